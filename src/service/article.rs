//! Article service: listings, lifecycle, review workflow and social counters.
//!
//! Every mutation that touches more than one row (tag links, counters, join
//! rows) runs inside a single transaction; the review transition is a single
//! conditional UPDATE and needs none.

use std::collections::HashMap;

use pulldown_cmark::{html, Parser};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        article::{ArticleRepository, ArticleWithAuthor},
        category::CategoryRepository,
        favorite::FavoriteRepository,
        is_unique_violation,
        like::LikeRepository,
        tag::TagRepository,
        user::UserRepository,
    },
    error::{business::BusinessError, AppError},
    middleware::auth::Principal,
    model::article::{
        ArticleDetail, ArticleParams, ArticleQuery, ArticleSummary, PaginatedArticles,
        ReviewDecision,
    },
};
use entity::{article::ReviewStatus, like::LikeTarget};

/// Renders article markdown to HTML for storage alongside the source.
fn render_markdown(content: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(content));
    out
}

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the paginated public listing. Only published, approved articles
    /// appear here.
    pub async fn list_public(&self, query: ArticleQuery) -> Result<PaginatedArticles, AppError> {
        let repo = ArticleRepository::new(self.db);
        let (rows, total) = repo.get_public_page(&query).await?;
        let records = self.build_summaries(self.db, rows).await?;

        Ok(PaginatedArticles {
            records,
            total,
            page: query.page,
            size: query.size,
        })
    }

    /// Gets the paginated review queue for admins, oldest submission first.
    pub async fn pending(&self, page: u64, size: u64) -> Result<PaginatedArticles, AppError> {
        let repo = ArticleRepository::new(self.db);
        let (rows, total) = repo.get_pending_page(page, size).await?;
        let records = self.build_summaries(self.db, rows).await?;

        Ok(PaginatedArticles {
            records,
            total,
            page,
            size,
        })
    }

    /// Gets a user's own articles, optionally filtered to published or draft.
    pub async fn my_articles(
        &self,
        user_id: i32,
        published: Option<bool>,
        page: u64,
        size: u64,
    ) -> Result<PaginatedArticles, AppError> {
        let repo = ArticleRepository::new(self.db);
        let (rows, total) = repo.get_by_user_page(user_id, published, page, size).await?;
        let records = self.build_summaries(self.db, rows).await?;

        Ok(PaginatedArticles {
            records,
            total,
            page,
            size,
        })
    }

    /// Gets the articles a user has favorited, most recently favorited first.
    pub async fn my_favorites(
        &self,
        user_id: i32,
        page: u64,
        size: u64,
    ) -> Result<PaginatedArticles, AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let (favorites, total) = favorite_repo.get_page_by_user(user_id, page, size).await?;

        let article_ids: Vec<i32> = favorites.into_iter().map(|f| f.article_id).collect();
        let repo = ArticleRepository::new(self.db);
        let rows = repo.find_with_authors_by_ids(&article_ids).await?;
        let records = self.build_summaries(self.db, rows).await?;

        Ok(PaginatedArticles {
            records,
            total,
            page,
            size,
        })
    }

    /// Gets the full article detail and counts the view.
    ///
    /// Unpublished or unapproved articles are invisible (404) to everyone but
    /// their author and admins. Authenticated viewers additionally get their
    /// own like/favorite state.
    pub async fn detail(
        &self,
        id: i32,
        viewer: Option<&Principal>,
    ) -> Result<ArticleDetail, AppError> {
        let repo = ArticleRepository::new(self.db);

        let Some(mut article) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("文章", id));
        };

        let publicly_visible =
            article.is_published && article.review_status == ReviewStatus::Approved;
        let privileged = viewer
            .map(|p| p.user_id == article.user_id || p.is_admin())
            .unwrap_or(false);
        if !publicly_visible && !privileged {
            return Err(AppError::not_found("文章", id));
        }

        repo.increment_view_count(id).await?;
        article.view_count += 1;

        let author = UserRepository::new(self.db).find_by_id(article.user_id).await?;
        let category = match article.category_id {
            Some(category_id) => {
                CategoryRepository::new(self.db)
                    .find_by_id(category_id)
                    .await?
            }
            None => None,
        };
        let tags = repo.tags_for_article(id).await?;

        let (is_liked, is_favorited) = match viewer {
            Some(principal) => {
                let liked = LikeRepository::new(self.db)
                    .exists(principal.user_id, LikeTarget::Article, id)
                    .await?;
                let favorited = FavoriteRepository::new(self.db)
                    .exists(principal.user_id, id)
                    .await?;
                (liked, favorited)
            }
            None => (false, false),
        };

        Ok(ArticleDetail {
            article,
            author,
            category,
            tags,
            is_liked,
            is_favorited,
        })
    }

    /// Creates an article for the authenticated author.
    ///
    /// Admin submissions are auto-approved; everyone else enters the review
    /// queue as Pending. Unknown tag ids are dropped rather than failing the
    /// whole request.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the created article
    pub async fn create(
        &self,
        mut params: ArticleParams,
        author: &Principal,
    ) -> Result<i32, AppError> {
        let review_status = if author.is_admin() {
            ReviewStatus::Approved
        } else {
            ReviewStatus::Pending
        };
        let content_html = Some(render_markdown(&params.content));

        let txn = self.db.begin().await?;

        params.tag_ids = self.existing_tag_ids(&txn, &params.tag_ids).await?;

        let repo = ArticleRepository::new(&txn);
        let article = repo
            .create(author.user_id, &params, content_html, review_status)
            .await?;

        TagRepository::new(&txn)
            .adjust_article_count(&params.tag_ids, 1)
            .await?;

        txn.commit().await?;

        tracing::info!("user {} created article {}", author.user_id, article.id);
        Ok(article.id)
    }

    /// Updates an article. Only the author may edit; the tag set is replaced
    /// and the markdown re-rendered.
    pub async fn update(
        &self,
        id: i32,
        mut params: ArticleParams,
        principal: &Principal,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        let Some(article) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("文章", id));
        };
        if article.user_id != principal.user_id {
            return Err(BusinessError::Forbidden("无权限修改此文章".to_string()).into());
        }

        let content_html = Some(render_markdown(&params.content));
        params.tag_ids = self.existing_tag_ids(&txn, &params.tag_ids).await?;

        let tag_repo = TagRepository::new(&txn);
        let old_tag_ids = repo.tag_ids_for(id).await?;
        repo.clear_tags(id).await?;
        repo.add_tags(id, &params.tag_ids).await?;
        tag_repo.adjust_article_count(&old_tag_ids, -1).await?;
        tag_repo.adjust_article_count(&params.tag_ids, 1).await?;

        repo.update(article, &params, content_html).await?;

        txn.commit().await?;

        tracing::info!("user {} updated article {}", principal.user_id, id);
        Ok(())
    }

    /// Deletes an article. Only the author may delete; tag counters are
    /// released and dependent rows cascade.
    pub async fn delete(&self, id: i32, principal: &Principal) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        let Some(article) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("文章", id));
        };
        if article.user_id != principal.user_id {
            return Err(BusinessError::Forbidden("无权限删除此文章".to_string()).into());
        }

        let tag_ids = repo.tag_ids_for(id).await?;
        repo.delete(id).await?;
        TagRepository::new(&txn)
            .adjust_article_count(&tag_ids, -1)
            .await?;

        txn.commit().await?;

        tracing::info!("user {} deleted article {}", principal.user_id, id);
        Ok(())
    }

    /// Toggles the publication flag. Orthogonal to review: an approved draft
    /// can publish, and unpublishing never touches the review state.
    pub async fn set_published(
        &self,
        id: i32,
        publish: bool,
        principal: &Principal,
    ) -> Result<(), AppError> {
        let repo = ArticleRepository::new(self.db);

        let Some(article) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("文章", id));
        };
        if article.user_id != principal.user_id {
            return Err(BusinessError::Forbidden("无权限修改此文章".to_string()).into());
        }

        repo.set_published(article, publish).await?;
        Ok(())
    }

    /// Applies a review decision to a Pending article.
    ///
    /// The Pending guard lives in the UPDATE's WHERE clause, so of two
    /// concurrent reviewers exactly one wins; the other sees zero rows
    /// affected and gets the invalid-state error.
    pub async fn review(
        &self,
        id: i32,
        decision: ReviewDecision,
        reviewer_id: i32,
        note: Option<String>,
    ) -> Result<(), AppError> {
        let repo = ArticleRepository::new(self.db);

        let rows = repo
            .review(id, decision.target_status(), reviewer_id, note)
            .await?;

        if rows == 0 {
            return if repo.find_by_id(id).await?.is_none() {
                Err(AppError::not_found("文章", id))
            } else {
                Err(BusinessError::ReviewNotPending.into())
            };
        }

        tracing::info!(
            "article {} {} by reviewer {}",
            id,
            match decision {
                ReviewDecision::Approve => "approved",
                ReviewDecision::Reject => "rejected",
            },
            reviewer_id
        );
        Ok(())
    }

    /// Likes an article. The like row's primary key enforces at-most-once;
    /// the counter moves in the same transaction as the row insert.
    pub async fn like(&self, article_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        if repo.find_by_id(article_id).await?.is_none() {
            return Err(AppError::not_found("文章", article_id));
        }

        let inserted = LikeRepository::new(&txn)
            .create(user_id, LikeTarget::Article, article_id)
            .await;
        match inserted {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(BusinessError::AlreadyLiked.into())
            }
            Err(err) => return Err(err.into()),
        }

        repo.increment_like_count(article_id).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Removes a like. Only an actual removal decrements the counter, and the
    /// counter never drops below zero.
    pub async fn unlike(&self, article_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        if repo.find_by_id(article_id).await?.is_none() {
            return Err(AppError::not_found("文章", article_id));
        }

        let removed = LikeRepository::new(&txn)
            .delete(user_id, LikeTarget::Article, article_id)
            .await?;
        if removed > 0 {
            repo.decrement_like_count(article_id).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Favorites an article; same shape as liking.
    pub async fn favorite(&self, article_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        if repo.find_by_id(article_id).await?.is_none() {
            return Err(AppError::not_found("文章", article_id));
        }

        let inserted = FavoriteRepository::new(&txn).create(user_id, article_id).await;
        match inserted {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(BusinessError::AlreadyFavorited.into())
            }
            Err(err) => return Err(err.into()),
        }

        repo.increment_favorite_count(article_id).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Removes a favorite; same shape as unliking.
    pub async fn unfavorite(&self, article_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);

        if repo.find_by_id(article_id).await?.is_none() {
            return Err(AppError::not_found("文章", article_id));
        }

        let removed = FavoriteRepository::new(&txn).delete(user_id, article_id).await?;
        if removed > 0 {
            repo.decrement_favorite_count(article_id).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Keeps only tag ids that reference existing tags, preserving order.
    async fn existing_tag_ids<C: ConnectionTrait>(
        &self,
        db: &C,
        tag_ids: &[i32],
    ) -> Result<Vec<i32>, AppError> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = TagRepository::new(db).find_by_ids(tag_ids).await?;
        let known: std::collections::HashSet<i32> = found.into_iter().map(|t| t.id).collect();
        Ok(tag_ids
            .iter()
            .copied()
            .filter(|id| known.contains(id))
            .collect())
    }

    /// Enriches article rows with category names and tag names in two batch
    /// queries instead of one pair per row.
    async fn build_summaries<C: ConnectionTrait>(
        &self,
        db: &C,
        rows: Vec<ArticleWithAuthor>,
    ) -> Result<Vec<ArticleSummary>, AppError> {
        let article_ids: Vec<i32> = rows.iter().map(|(article, _)| article.id).collect();

        let category_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(article, _)| article.category_id)
            .collect();
        let categories: HashMap<i32, String> = CategoryRepository::new(db)
            .find_by_ids(&category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut tags_by_article = ArticleRepository::new(db)
            .tags_for_articles(&article_ids)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(article, author)| {
                let category_name = article
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let tag_names = tags_by_article
                    .remove(&article.id)
                    .map(|tags| tags.into_iter().map(|t| t.name).collect())
                    .unwrap_or_default();
                ArticleSummary::from_entity(article, author.as_ref(), category_name, tag_names)
            })
            .collect())
    }
}
