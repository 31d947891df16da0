use super::*;

/// Tests that drafts and unapproved articles never reach the public listing.
///
/// Expected: only the published, approved article is returned
#[tokio::test]
async fn lists_only_published_approved_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let visible = factory::article::create_published_article(db, author.id).await?;
    // Draft, even though approved.
    factory::article::ArticleFactory::new(db, author.id)
        .review_status(ReviewStatus::Approved)
        .build()
        .await?;
    // Published but still pending review.
    factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .build()
        .await?;
    // Published but rejected.
    factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .review_status(ReviewStatus::Rejected)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let (rows, total) = repo.get_public_page(&query(1, 10)).await?;

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, visible.id);

    Ok(())
}

/// Tests that listing rows carry their author.
///
/// Expected: the joined author matches the article's user_id
#[tokio::test]
async fn includes_author_in_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::article::create_published_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let (rows, _) = repo.get_public_page(&query(1, 10)).await?;

    assert_eq!(rows[0].1.as_ref().map(|u| u.id), Some(author.id));

    Ok(())
}

/// Tests the category filter.
///
/// Expected: only articles in the requested category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;

    let in_category = factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .review_status(ReviewStatus::Approved)
        .category_id(category.id)
        .build()
        .await?;
    factory::article::create_published_article(db, author.id).await?;

    let mut q = query(1, 10);
    q.category_id = Some(category.id);

    let repo = ArticleRepository::new(db);
    let (rows, total) = repo.get_public_page(&q).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, in_category.id);

    Ok(())
}

/// Tests the tag filter, including the short circuit for unused tags.
///
/// Expected: only tagged articles; an unused tag yields an empty page
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    let unused_tag = factory::tag::create_tag(db).await?;

    let mut tagged_params = params("Tagged");
    tagged_params.is_published = true;
    tagged_params.tag_ids = vec![tag.id];

    let repo = ArticleRepository::new(db);
    let tagged = repo
        .create(author.id, &tagged_params, None, ReviewStatus::Approved)
        .await?;
    factory::article::create_published_article(db, author.id).await?;

    let mut q = query(1, 10);
    q.tag_id = Some(tag.id);
    let (rows, total) = repo.get_public_page(&q).await?;
    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, tagged.id);

    q.tag_id = Some(unused_tag.id);
    let (rows, total) = repo.get_public_page(&q).await?;
    assert_eq!(total, 0);
    assert!(rows.is_empty());

    Ok(())
}

/// Tests the keyword filter against title and summary.
///
/// Expected: title and summary matches returned, others excluded
#[tokio::test]
async fn filters_by_keyword() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let by_title = factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .review_status(ReviewStatus::Approved)
        .title("Rust ownership explained")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .review_status(ReviewStatus::Approved)
        .title("Unrelated")
        .build()
        .await?;

    let mut q = query(1, 10);
    q.keyword = Some("ownership".to_string());

    let repo = ArticleRepository::new(db);
    let (rows, total) = repo.get_public_page(&q).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].0.id, by_title.id);

    Ok(())
}

/// Tests that pinned articles sort ahead of newer unpinned ones.
///
/// Expected: the pinned article first
#[tokio::test]
async fn pinned_articles_come_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let pinned = factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .review_status(ReviewStatus::Approved)
        .pinned(true)
        .build()
        .await?;
    factory::article::create_published_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let (rows, _) = repo.get_public_page(&query(1, 10)).await?;

    assert_eq!(rows[0].0.id, pinned.id);

    Ok(())
}

/// Tests pagination metadata.
///
/// Expected: page two of three records with size 2 holds the remaining one
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    for _ in 0..3 {
        factory::article::create_published_article(db, author.id).await?;
    }

    let repo = ArticleRepository::new(db);
    let (first, total) = repo.get_public_page(&query(1, 2)).await?;
    let (second, _) = repo.get_public_page(&query(2, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
