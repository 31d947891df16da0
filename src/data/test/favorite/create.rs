use super::*;

/// Tests inserting and removing a favorite row.
///
/// Expected: insert visible via exists(), delete reports one row
#[tokio::test]
async fn creates_and_deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(reader.id, article.id).await?;
    assert!(repo.exists(reader.id, article.id).await?);

    let removed = repo.delete(reader.id, article.id).await?;
    assert_eq!(removed, 1);
    assert!(!repo.exists(reader.id, article.id).await?);

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate favorite.
///
/// Expected: Err recognized as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(reader.id, article.id).await?;

    let result = repo.create(reader.id, article.id).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
