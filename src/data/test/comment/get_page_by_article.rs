use super::*;

/// Tests that listings hide soft-deleted comments.
///
/// Expected: only the active comment is returned and counted
#[tokio::test]
async fn excludes_deleted_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let kept = factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::CommentFactory::new(db, article.id, author.id)
        .status(CommentStatus::Deleted)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let (rows, total) = repo.get_page_by_article(article.id, 1, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, kept.id);

    Ok(())
}

/// Tests that listings are scoped to the requested article and carry authors.
///
/// Expected: other articles' comments excluded; author joined
#[tokio::test]
async fn scopes_to_article_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;
    let other_article = factory::article::create_published_article(db, author.id).await?;

    factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::create_comment(db, other_article.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let (rows, total) = repo.get_page_by_article(article.id, 1, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].1.as_ref().map(|u| u.id), Some(author.id));

    Ok(())
}
