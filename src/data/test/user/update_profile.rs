use super::*;

/// Tests that a partial profile update only touches the provided fields.
///
/// Expected: nickname changed, avatar and bio untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("Original")
        .build()
        .await?;
    let original_avatar = user.avatar.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                nickname: Some("Renamed".to_string()),
                avatar: None,
                bio: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.nickname, "Renamed");
    assert_eq!(updated.avatar, original_avatar);
    assert!(updated.bio.is_none());

    Ok(())
}

/// Tests that updating a missing user reports None instead of failing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(9999, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
