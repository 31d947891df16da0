use super::*;

/// Tests removing an existing like.
///
/// Expected: Ok(1) and the row gone
#[tokio::test]
async fn deletes_existing_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = LikeRepository::new(db);
    repo.create(reader.id, LikeTarget::Article, article.id)
        .await?;

    let removed = repo.delete(reader.id, LikeTarget::Article, article.id).await?;

    assert_eq!(removed, 1);
    assert!(!repo.exists(reader.id, LikeTarget::Article, article.id).await?);

    Ok(())
}

/// Tests removing a like that does not exist.
///
/// The zero row count is what tells the service not to decrement the counter.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_like_reports_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = LikeRepository::new(db);
    let removed = repo.delete(reader.id, LikeTarget::Article, article.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
