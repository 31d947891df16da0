use super::*;

/// Tests inserting a like row.
///
/// Expected: Ok with the row persisted and visible through exists()
#[tokio::test]
async fn creates_like_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = LikeRepository::new(db);
    repo.create(reader.id, LikeTarget::Article, article.id)
        .await?;

    assert!(repo.exists(reader.id, LikeTarget::Article, article.id).await?);

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate like.
///
/// This is the storage-layer constraint that removes the check-then-act race:
/// the second insert fails no matter how the calls interleave.
///
/// Expected: Err recognized as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = LikeRepository::new(db);
    repo.create(reader.id, LikeTarget::Article, article.id)
        .await?;

    let result = repo.create(reader.id, LikeTarget::Article, article.id).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}

/// Tests that the same user may like an article and a comment with the same
/// target id.
///
/// The target type is part of the key, so the two rows do not collide.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn target_type_distinguishes_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let article = factory::article::create_published_article(db, author.id).await?;

    let repo = LikeRepository::new(db);
    repo.create(reader.id, LikeTarget::Article, article.id)
        .await?;
    repo.create(reader.id, LikeTarget::Comment, article.id)
        .await?;

    assert!(repo.exists(reader.id, LikeTarget::Article, article.id).await?);
    assert!(repo.exists(reader.id, LikeTarget::Comment, article.id).await?);

    Ok(())
}
