use super::*;

/// Tests creating a draft article.
///
/// Verifies the review status passed by the caller is stored, counters start
/// at zero, and no publication stamp is set for drafts.
///
/// Expected: Ok with draft persisted
#[tokio::test]
async fn creates_draft_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(author.id, &params("Draft"), None, ReviewStatus::Pending)
        .await?;

    assert_eq!(article.title, "Draft");
    assert_eq!(article.review_status, ReviewStatus::Pending);
    assert!(!article.is_published);
    assert!(article.published_at.is_none());
    assert_eq!(article.view_count, 0);
    assert_eq!(article.like_count, 0);

    Ok(())
}

/// Tests that creating an already-published article stamps published_at.
///
/// Expected: Ok with the publication timestamp set
#[tokio::test]
async fn stamps_published_at_when_created_published() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let mut published = params("Live");
    published.is_published = true;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(author.id, &published, None, ReviewStatus::Approved)
        .await?;

    assert!(article.is_published);
    assert!(article.published_at.is_some());

    Ok(())
}

/// Tests that tag links are inserted alongside the article.
///
/// Expected: Ok with one article_tag row per tag
#[tokio::test]
async fn links_tags_on_create() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let tag1 = factory::tag::create_tag(db).await?;
    let tag2 = factory::tag::create_tag(db).await?;

    let mut tagged = params("Tagged");
    tagged.tag_ids = vec![tag1.id, tag2.id];

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(author.id, &tagged, None, ReviewStatus::Pending)
        .await?;

    let mut linked = repo.tag_ids_for(article.id).await?;
    linked.sort_unstable();
    let mut expected = vec![tag1.id, tag2.id];
    expected.sort_unstable();
    assert_eq!(linked, expected);

    Ok(())
}
