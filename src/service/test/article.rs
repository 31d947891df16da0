use super::*;
use crate::{
    data::article::ArticleRepository,
    error::{business::BusinessError, AppError},
    model::article::{ArticleParams, ArticleQuery, ReviewDecision},
    service::article::ArticleService,
};
use entity::article::ReviewStatus;
use test_utils::{builder::TestBuilder, factory};

fn params(title: &str) -> ArticleParams {
    ArticleParams {
        title: title.to_string(),
        summary: None,
        content: "Body".to_string(),
        cover_image: None,
        category_id: None,
        tag_ids: Vec::new(),
        is_published: false,
    }
}

/// Tests the review gate on submission.
///
/// An article created by a regular user must enter the queue as Pending;
/// one created by an admin is auto-approved.
///
/// Expected: Pending for users, Approved for admins
#[tokio::test]
async fn submission_review_status_follows_author_role() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::user::create_user(db).await.unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let user_article_id = service
        .create(params("By a user"), &principal_for(&user))
        .await
        .unwrap();
    let admin_article_id = service
        .create(params("By an admin"), &principal_for(&admin))
        .await
        .unwrap();

    let repo = ArticleRepository::new(db);
    let user_article = repo.find_by_id(user_article_id).await.unwrap().unwrap();
    let admin_article = repo.find_by_id(admin_article_id).await.unwrap().unwrap();

    assert_eq!(user_article.review_status, ReviewStatus::Pending);
    assert_eq!(admin_article.review_status, ReviewStatus::Approved);
}

/// Tests that article content is rendered to HTML on creation.
///
/// Expected: content_html holds the markdown rendering
#[tokio::test]
async fn create_renders_markdown() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::user::create_user(db).await.unwrap();

    let mut markdown = params("Formatted");
    markdown.content = "# Heading\n\nBody text".to_string();

    let article_id = service
        .create(markdown, &principal_for(&user))
        .await
        .unwrap();

    let article = ArticleRepository::new(db)
        .find_by_id(article_id)
        .await
        .unwrap()
        .unwrap();
    let html = article.content_html.unwrap();
    assert!(html.contains("<h1>"));
    assert!(html.contains("Heading"));
}

/// Tests that reviewing a non-pending article fails with the invalid-state
/// error and leaves the stored decision alone.
///
/// Expected: Err(BusinessError::ReviewNotPending)
#[tokio::test]
async fn review_requires_pending_state() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let reviewer = factory::user::create_admin(db).await.unwrap();
    let article = factory::article::create_article(db, author.id).await.unwrap();

    service
        .review(article.id, ReviewDecision::Approve, reviewer.id, None)
        .await
        .unwrap();

    let second = service
        .review(article.id, ReviewDecision::Reject, reviewer.id, None)
        .await;

    assert!(matches!(
        second,
        Err(AppError::BusinessErr(BusinessError::ReviewNotPending))
    ));

    let stored = ArticleRepository::new(db)
        .find_by_id(article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.review_status, ReviewStatus::Approved);
}

/// Tests that reviewing a missing article is a 404, not an invalid state.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn review_missing_article_is_not_found() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let reviewer = factory::user::create_admin(db).await.unwrap();

    let result = service
        .review(9999, ReviewDecision::Approve, reviewer.id, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests the like flow end to end.
///
/// The first like succeeds and bumps the counter; the second fails on the
/// storage-layer constraint; unliking decrements; a second unlike leaves the
/// counter at zero.
///
/// Expected: counter 1 → error → 0 → 0
#[tokio::test]
async fn like_is_at_most_once_and_floored() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let reader = factory::user::create_user(db).await.unwrap();
    let article = factory::article::create_published_article(db, author.id)
        .await
        .unwrap();

    service.like(article.id, reader.id).await.unwrap();

    let repo = ArticleRepository::new(db);
    assert_eq!(repo.find_by_id(article.id).await.unwrap().unwrap().like_count, 1);

    let again = service.like(article.id, reader.id).await;
    assert!(matches!(
        again,
        Err(AppError::BusinessErr(BusinessError::AlreadyLiked))
    ));
    assert_eq!(repo.find_by_id(article.id).await.unwrap().unwrap().like_count, 1);

    service.unlike(article.id, reader.id).await.unwrap();
    assert_eq!(repo.find_by_id(article.id).await.unwrap().unwrap().like_count, 0);

    // Unliking without a like is a no-op on the counter.
    service.unlike(article.id, reader.id).await.unwrap();
    assert_eq!(repo.find_by_id(article.id).await.unwrap().unwrap().like_count, 0);
}

/// Tests the favorite flow mirrors the like flow.
///
/// Expected: duplicate favorite errors, counter floored at zero
#[tokio::test]
async fn favorite_is_at_most_once_and_floored() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let reader = factory::user::create_user(db).await.unwrap();
    let article = factory::article::create_published_article(db, author.id)
        .await
        .unwrap();

    service.favorite(article.id, reader.id).await.unwrap();

    let again = service.favorite(article.id, reader.id).await;
    assert!(matches!(
        again,
        Err(AppError::BusinessErr(BusinessError::AlreadyFavorited))
    ));

    let repo = ArticleRepository::new(db);
    assert_eq!(
        repo.find_by_id(article.id).await.unwrap().unwrap().favorite_count,
        1
    );

    service.unfavorite(article.id, reader.id).await.unwrap();
    service.unfavorite(article.id, reader.id).await.unwrap();
    assert_eq!(
        repo.find_by_id(article.id).await.unwrap().unwrap().favorite_count,
        0
    );
}

/// Tests that only the author may modify an article.
///
/// Expected: Err(BusinessError::Forbidden) for another user
#[tokio::test]
async fn update_is_author_only() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let intruder = factory::user::create_user(db).await.unwrap();
    let article = factory::article::create_article(db, author.id).await.unwrap();

    let result = service
        .update(article.id, params("Hijacked"), &principal_for(&intruder))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BusinessErr(BusinessError::Forbidden(_)))
    ));
}

/// Tests the detail visibility gate.
///
/// An unapproved draft is 404 for strangers and anonymous readers but visible
/// to its author, and viewing counts a view.
///
/// Expected: 404 / 404 / Ok with view_count bumped
#[tokio::test]
async fn detail_hides_unapproved_articles_from_strangers() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let stranger = factory::user::create_user(db).await.unwrap();
    let article = factory::article::create_article(db, author.id).await.unwrap();

    let anonymous = service.detail(article.id, None).await;
    assert!(matches!(anonymous, Err(AppError::NotFound(_))));

    let stranger_view = service
        .detail(article.id, Some(&principal_for(&stranger)))
        .await;
    assert!(matches!(stranger_view, Err(AppError::NotFound(_))));

    let own_view = service
        .detail(article.id, Some(&principal_for(&author)))
        .await
        .unwrap();
    assert_eq!(own_view.article.id, article.id);
    assert_eq!(own_view.article.view_count, 1);
}

/// Tests that the public listing service keeps drafts and pending articles
/// out, while the pending queue contains exactly the pending ones.
///
/// Expected: one public record, one pending record
#[tokio::test]
async fn public_and_pending_listings_are_disjoint() {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let author = factory::user::create_user(db).await.unwrap();
    let visible = factory::article::create_published_article(db, author.id)
        .await
        .unwrap();
    let pending = factory::article::ArticleFactory::new(db, author.id)
        .published(true)
        .build()
        .await
        .unwrap();

    let public = service
        .list_public(ArticleQuery {
            page: 1,
            size: 10,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(public.total, 1);
    assert_eq!(public.records[0].id, visible.id);

    let queue = service.pending(1, 10).await.unwrap();
    assert_eq!(queue.total, 1);
    assert_eq!(queue.records[0].id, pending.id);
}
