use super::*;

/// Tests the view counter increments atomically.
///
/// Expected: two increments leave the counter at 2
#[tokio::test]
async fn increments_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    repo.increment_view_count(article.id).await?;
    repo.increment_view_count(article.id).await?;

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);

    Ok(())
}

/// Tests the like counter round trip.
///
/// Expected: increment then decrement returns to the starting value
#[tokio::test]
async fn like_count_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    repo.increment_like_count(article.id).await?;
    assert_eq!(repo.find_by_id(article.id).await?.unwrap().like_count, 1);

    repo.decrement_like_count(article.id).await?;
    assert_eq!(repo.find_by_id(article.id).await?.unwrap().like_count, 0);

    Ok(())
}

/// Tests the decrement floor.
///
/// Verifies a counter already at zero stays at zero instead of going
/// negative.
///
/// Expected: like_count remains 0 after decrementing at 0
#[tokio::test]
async fn decrement_never_goes_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    repo.decrement_like_count(article.id).await?;
    repo.decrement_favorite_count(article.id).await?;
    repo.decrement_comment_count(article.id).await?;

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.like_count, 0);
    assert_eq!(stored.favorite_count, 0);
    assert_eq!(stored.comment_count, 0);

    Ok(())
}
