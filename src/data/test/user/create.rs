use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the User role, Normal
/// status and no last login stamp.
///
/// Expected: Ok with the user persisted
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("writer", "writer@example.com")).await?;

    assert_eq!(user.username, "writer");
    assert_eq!(user.email, "writer@example.com");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.status, UserStatus::Normal);
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests that the username column rejects duplicates at the storage layer.
///
/// Expected: Err recognized as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("writer", "first@example.com")).await?;

    let result = repo.create(params("writer", "second@example.com")).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests that the email column rejects duplicates at the storage layer.
///
/// Expected: Err recognized as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("writer", "shared@example.com")).await?;

    let result = repo.create(params("other", "shared@example.com")).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests the existence probes used by registration.
///
/// Expected: true for taken username/email, false otherwise
#[tokio::test]
async fn reports_existing_identities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("writer", "writer@example.com")).await?;

    assert!(repo.username_exists("writer").await?);
    assert!(!repo.username_exists("reader").await?);
    assert!(repo.email_exists("writer@example.com").await?);
    assert!(!repo.email_exists("reader@example.com").await?);

    Ok(())
}
