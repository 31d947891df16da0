use super::*;

/// Tests posting a top-level comment.
///
/// Expected: Ok with an Active comment and zero likes
#[tokio::test]
async fn creates_top_level_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = CommentRepository::new(db);
    let comment = repo.create(author.id, &params(article.id, "First!")).await?;

    assert_eq!(comment.content, "First!");
    assert_eq!(comment.status, CommentStatus::Active);
    assert_eq!(comment.like_count, 0);
    assert!(comment.parent_id.is_none());

    Ok(())
}

/// Tests posting a reply inside a thread.
///
/// Expected: parent and reply target recorded
#[tokio::test]
async fn creates_reply_with_thread_anchors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;
    let root = factory::comment::create_comment(db, article.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let reply = repo
        .create(
            author.id,
            &CreateCommentParams {
                article_id: article.id,
                content: "Replying".to_string(),
                parent_id: Some(root.id),
                reply_to_id: Some(root.id),
            },
        )
        .await?;

    assert_eq!(reply.parent_id, Some(root.id));
    assert_eq!(reply.reply_to_id, Some(root.id));

    Ok(())
}
