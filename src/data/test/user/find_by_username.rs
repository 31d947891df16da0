use super::*;

/// Tests looking a user up by username.
///
/// Expected: Some with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("writer")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("writer").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that an unknown username yields None rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
