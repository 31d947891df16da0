use super::*;

/// Tests approving a pending article.
///
/// Verifies the conditional update moves the article to Approved and stamps
/// reviewer, time and note.
///
/// Expected: Ok(1) with the decision recorded
#[tokio::test]
async fn approves_pending_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reviewer = factory::user::create_admin(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let rows = repo
        .review(
            article.id,
            ReviewStatus::Approved,
            reviewer.id,
            Some("ok".to_string()),
        )
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.review_status, ReviewStatus::Approved);
    assert_eq!(stored.reviewer_id, Some(reviewer.id));
    assert_eq!(stored.review_note.as_deref(), Some("ok"));
    assert!(stored.reviewed_at.is_some());

    Ok(())
}

/// Tests rejecting a pending article.
///
/// Expected: Ok(1) with status Rejected
#[tokio::test]
async fn rejects_pending_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reviewer = factory::user::create_admin(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let rows = repo
        .review(article.id, ReviewStatus::Rejected, reviewer.id, None)
        .await?;

    assert_eq!(rows, 1);
    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.review_status, ReviewStatus::Rejected);

    Ok(())
}

/// Tests that reviewing a non-pending article affects zero rows.
///
/// The Pending guard is in the UPDATE's WHERE clause, so a second decision on
/// the same article loses no matter how closely the calls race.
///
/// Expected: Ok(0) and the first decision unchanged
#[tokio::test]
async fn second_decision_affects_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reviewer = factory::user::create_admin(db).await?;
    let article = factory::article::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let first = repo
        .review(article.id, ReviewStatus::Approved, reviewer.id, None)
        .await?;
    let second = repo
        .review(article.id, ReviewStatus::Rejected, reviewer.id, None)
        .await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.review_status, ReviewStatus::Approved);

    Ok(())
}

/// Tests that a terminal state is never re-entered automatically.
///
/// Expected: Ok(0) for an already-rejected article
#[tokio::test]
async fn rejected_article_stays_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reviewer = factory::user::create_admin(db).await?;
    let article = factory::article::ArticleFactory::new(db, author.id)
        .review_status(ReviewStatus::Rejected)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let rows = repo
        .review(article.id, ReviewStatus::Approved, reviewer.id, None)
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests reviewing a missing article.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_article_affects_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_article_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewer = factory::user::create_admin(db).await?;

    let repo = ArticleRepository::new(db);
    let rows = repo
        .review(9999, ReviewStatus::Approved, reviewer.id, None)
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
