use super::*;

/// Tests publishing stamps published_at exactly once.
///
/// Expected: the stamp from the first publication survives a republish
#[tokio::test]
async fn stamps_published_at_on_first_publish_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);

    let published = repo.set_published(article, true).await?;
    assert!(published.is_published);
    let first_stamp = published.published_at.unwrap();

    let unpublished = repo.set_published(published, false).await?;
    assert!(!unpublished.is_published);
    // Unpublishing keeps the original stamp.
    assert_eq!(unpublished.published_at, Some(first_stamp));

    let republished = repo.set_published(unpublished, true).await?;
    assert_eq!(republished.published_at, Some(first_stamp));

    Ok(())
}
