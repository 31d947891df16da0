//! Article data repository for database operations.
//!
//! The article aggregate owns the review workflow columns and the denormalized
//! social counters, so this repository carries both the listing queries and the
//! counter/state mutations. The review transition is a single conditional
//! UPDATE guarded on the Pending status; concurrent reviewers race on that
//! predicate and exactly one of them wins.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::model::article::{ArticleParams, ArticleQuery};
use entity::article::ReviewStatus;

/// An article row paired with its author, when the author still exists.
pub type ArticleWithAuthor = (entity::article::Model, Option<entity::user::Model>);

pub struct ArticleRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new article and its tag links.
    ///
    /// The review status is decided by the service (admins are auto-approved);
    /// `published_at` is stamped when the article is created already published.
    pub async fn create(
        &self,
        user_id: i32,
        params: &ArticleParams,
        content_html: Option<String>,
        review_status: ReviewStatus,
    ) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        let article = entity::article::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(params.title.clone()),
            summary: ActiveValue::Set(params.summary.clone()),
            content: ActiveValue::Set(params.content.clone()),
            content_html: ActiveValue::Set(content_html),
            cover_image: ActiveValue::Set(params.cover_image.clone()),
            category_id: ActiveValue::Set(params.category_id),
            is_published: ActiveValue::Set(params.is_published),
            is_top: ActiveValue::Set(false),
            is_featured: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(0),
            comment_count: ActiveValue::Set(0),
            favorite_count: ActiveValue::Set(0),
            review_status: ActiveValue::Set(review_status),
            reviewer_id: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            review_note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(params.is_published.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.add_tags(article.id, &params.tag_ids).await?;

        Ok(article)
    }

    /// Finds an article by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find_by_id(id).one(self.db).await
    }

    /// Applies the editable fields of an update to an already-fetched article.
    ///
    /// Ownership has been checked by the service. `published_at` is stamped
    /// the first time the article transitions into the published state.
    pub async fn update(
        &self,
        article: entity::article::Model,
        params: &ArticleParams,
        content_html: Option<String>,
    ) -> Result<entity::article::Model, DbErr> {
        let first_publish = params.is_published && article.published_at.is_none();

        let mut active: entity::article::ActiveModel = article.into();
        active.title = ActiveValue::Set(params.title.clone());
        active.summary = ActiveValue::Set(params.summary.clone());
        active.content = ActiveValue::Set(params.content.clone());
        active.content_html = ActiveValue::Set(content_html);
        active.cover_image = ActiveValue::Set(params.cover_image.clone());
        active.category_id = ActiveValue::Set(params.category_id);
        active.is_published = ActiveValue::Set(params.is_published);
        active.updated_at = ActiveValue::Set(Utc::now());
        if first_publish {
            active.published_at = ActiveValue::Set(Some(Utc::now()));
        }

        active.update(self.db).await
    }

    /// Deletes an article. Tag links, comments, likes and favorites go with it
    /// via foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Toggles the publication flag on an already-fetched article.
    ///
    /// Publishing stamps `published_at` on the first publication only;
    /// unpublishing leaves the stamp in place.
    pub async fn set_published(
        &self,
        article: entity::article::Model,
        publish: bool,
    ) -> Result<entity::article::Model, DbErr> {
        let first_publish = publish && article.published_at.is_none();

        let mut active: entity::article::ActiveModel = article.into();
        active.is_published = ActiveValue::Set(publish);
        active.updated_at = ActiveValue::Set(Utc::now());
        if first_publish {
            active.published_at = ActiveValue::Set(Some(Utc::now()));
        }

        active.update(self.db).await
    }

    /// Moves a Pending article into a terminal review state.
    ///
    /// The status predicate is part of the UPDATE itself, so two reviewers
    /// deciding the same article concurrently cannot both succeed; the loser
    /// affects zero rows.
    ///
    /// # Arguments
    /// - `id` - Article to review
    /// - `target` - `Approved` or `Rejected`
    /// - `reviewer_id` - The deciding admin
    /// - `note` - Optional reviewer note stored with the decision
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated: 1 on success, 0 if the article
    ///   was missing or not Pending
    /// - `Err(DbErr)` - Database error during update
    pub async fn review(
        &self,
        id: i32,
        target: ReviewStatus,
        reviewer_id: i32,
        note: Option<String>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Article::update_many()
            .col_expr(entity::article::Column::ReviewStatus, Expr::value(target))
            .col_expr(
                entity::article::Column::ReviewerId,
                Expr::value(Some(reviewer_id)),
            )
            .col_expr(
                entity::article::Column::ReviewedAt,
                Expr::value(Some(Utc::now())),
            )
            .col_expr(entity::article::Column::ReviewNote, Expr::value(note))
            .filter(entity::article::Column::Id.eq(id))
            .filter(entity::article::Column::ReviewStatus.eq(ReviewStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the paginated public listing: published, approved articles with
    /// optional category, tag and keyword filters, pinned articles first.
    ///
    /// # Arguments
    /// - `query` - Filters plus 1-based page number and page size
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Article/author pairs for the page and the total
    ///   match count
    pub async fn get_public_page(
        &self,
        query: &ArticleQuery,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), DbErr> {
        // Resolve the tag filter to article ids first; an unused tag short
        // circuits to an empty page.
        let tag_article_ids = match query.tag_id {
            Some(tag_id) => {
                let ids: Vec<i32> = entity::prelude::ArticleTag::find()
                    .filter(entity::article_tag::Column::TagId.eq(tag_id))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|link| link.article_id)
                    .collect();

                if ids.is_empty() {
                    return Ok((Vec::new(), 0));
                }
                Some(ids)
            }
            None => None,
        };

        let paginator = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::article::Column::IsPublished.eq(true))
            .filter(entity::article::Column::ReviewStatus.eq(ReviewStatus::Approved))
            .apply_if(query.category_id, |q, category_id| {
                q.filter(entity::article::Column::CategoryId.eq(category_id))
            })
            .apply_if(tag_article_ids, |q, ids| {
                q.filter(entity::article::Column::Id.is_in(ids))
            })
            .apply_if(query.keyword.as_deref(), |q, keyword| {
                q.filter(
                    Condition::any()
                        .add(entity::article::Column::Title.contains(keyword))
                        .add(entity::article::Column::Summary.contains(keyword)),
                )
            })
            .order_by_desc(entity::article::Column::IsTop)
            .order_by_desc(entity::article::Column::PublishedAt)
            .paginate(self.db, query.size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(query.page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Gets the paginated queue of articles awaiting review, oldest first.
    pub async fn get_pending_page(
        &self,
        page: u64,
        size: u64,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), DbErr> {
        let paginator = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::article::Column::ReviewStatus.eq(ReviewStatus::Pending))
            .order_by_asc(entity::article::Column::CreatedAt)
            .paginate(self.db, size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Gets a user's own articles, newest first, optionally filtered by
    /// publication state.
    pub async fn get_by_user_page(
        &self,
        user_id: i32,
        published: Option<bool>,
        page: u64,
        size: u64,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), DbErr> {
        let paginator = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::article::Column::UserId.eq(user_id))
            .apply_if(published, |q, published| {
                q.filter(entity::article::Column::IsPublished.eq(published))
            })
            .order_by_desc(entity::article::Column::CreatedAt)
            .paginate(self.db, size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Fetches articles with authors by id, preserving the input order.
    ///
    /// Used for favorite listings where the ordering comes from the favorite
    /// rows rather than the articles themselves.
    pub async fn find_with_authors_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<ArticleWithAuthor>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::article::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        let mut by_id: HashMap<i32, ArticleWithAuthor> = rows
            .into_iter()
            .map(|row| (row.0.id, row))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Bumps the view counter without reading the row first.
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::ViewCount,
                Expr::col(entity::article::Column::ViewCount).add(1),
            )
            .filter(entity::article::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Bumps the like counter.
    pub async fn increment_like_count(&self, id: i32) -> Result<(), DbErr> {
        self.increment_counter(id, entity::article::Column::LikeCount)
            .await
    }

    /// Decrements the like counter, never below zero.
    pub async fn decrement_like_count(&self, id: i32) -> Result<(), DbErr> {
        self.decrement_counter_floored(id, entity::article::Column::LikeCount)
            .await
    }

    /// Bumps the comment counter.
    pub async fn increment_comment_count(&self, id: i32) -> Result<(), DbErr> {
        self.increment_counter(id, entity::article::Column::CommentCount)
            .await
    }

    /// Decrements the comment counter, never below zero.
    pub async fn decrement_comment_count(&self, id: i32) -> Result<(), DbErr> {
        self.decrement_counter_floored(id, entity::article::Column::CommentCount)
            .await
    }

    /// Bumps the favorite counter.
    pub async fn increment_favorite_count(&self, id: i32) -> Result<(), DbErr> {
        self.increment_counter(id, entity::article::Column::FavoriteCount)
            .await
    }

    /// Decrements the favorite counter, never below zero.
    pub async fn decrement_favorite_count(&self, id: i32) -> Result<(), DbErr> {
        self.decrement_counter_floored(id, entity::article::Column::FavoriteCount)
            .await
    }

    async fn increment_counter(
        &self,
        id: i32,
        column: entity::article::Column,
    ) -> Result<(), DbErr> {
        entity::prelude::Article::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(entity::article::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counter decrement with a floor at zero: the `> 0` predicate makes an
    /// already-zero counter a no-op instead of going negative.
    async fn decrement_counter_floored(
        &self,
        id: i32,
        column: entity::article::Column,
    ) -> Result<(), DbErr> {
        entity::prelude::Article::update_many()
            .col_expr(column, Expr::col(column).sub(1))
            .filter(entity::article::Column::Id.eq(id))
            .filter(column.gt(0))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts published, approved articles in a category. Drives the dynamic
    /// per-category counts in the category listing.
    pub async fn count_published_in_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::CategoryId.eq(category_id))
            .filter(entity::article::Column::IsPublished.eq(true))
            .filter(entity::article::Column::ReviewStatus.eq(ReviewStatus::Approved))
            .count(self.db)
            .await
    }

    /// Gets the tag ids currently linked to an article.
    pub async fn tag_ids_for(&self, article_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.tag_id)
            .collect())
    }

    /// Inserts tag links for an article.
    pub async fn add_tags(&self, article_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        for tag_id in tag_ids {
            entity::article_tag::ActiveModel {
                article_id: ActiveValue::Set(article_id),
                tag_id: ActiveValue::Set(*tag_id),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?;
        }
        Ok(())
    }

    /// Removes every tag link of an article.
    pub async fn clear_tags(&self, article_id: i32) -> Result<(), DbErr> {
        entity::prelude::ArticleTag::delete_many()
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Fetches the tags of one article.
    pub async fn tags_for_article(
        &self,
        article_id: i32,
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        let tag_ids = self.tag_ids_for(article_id).await?;
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids))
            .all(self.db)
            .await
    }

    /// Fetches the tags of many articles in two queries, keyed by article id.
    ///
    /// Listing pages enrich every row with its tag names; doing it per row
    /// would be one query per article.
    pub async fn tags_for_articles(
        &self,
        article_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::tag::Model>>, DbErr> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::ArticleId.is_in(article_ids.to_vec()))
            .all(self.db)
            .await?;

        let tag_ids: Vec<i32> = links.iter().map(|link| link.tag_id).collect();
        let tags_by_id: HashMap<i32, entity::tag::Model> = if tag_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Tag::find()
                .filter(entity::tag::Column::Id.is_in(tag_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|tag| (tag.id, tag))
                .collect()
        };

        let mut result: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();
        for link in links {
            if let Some(tag) = tags_by_id.get(&link.tag_id) {
                result.entry(link.article_id).or_default().push(tag.clone());
            }
        }

        Ok(result)
    }
}
