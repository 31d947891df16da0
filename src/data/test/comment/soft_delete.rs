use super::*;

/// Tests that deletion is a state change, not a row removal.
///
/// Expected: status Deleted, row still present by id
#[tokio::test]
async fn keeps_row_with_deleted_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.soft_delete(comment).await?;

    assert_eq!(deleted.status, CommentStatus::Deleted);

    let stored = repo.find_by_id(deleted.id).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().status, CommentStatus::Deleted);

    Ok(())
}
