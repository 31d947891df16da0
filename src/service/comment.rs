//! Comment service: listing, posting, soft deletion and comment likes.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        article::ArticleRepository, comment::CommentRepository, is_unique_violation,
        like::LikeRepository,
    },
    error::{business::BusinessError, AppError},
    model::comment::{Comment, CreateCommentParams, PaginatedComments},
};
use entity::like::LikeTarget;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of active comments for an article, newest first, with
    /// author display data.
    pub async fn list(
        &self,
        article_id: i32,
        page: u64,
        size: u64,
    ) -> Result<PaginatedComments, AppError> {
        let repo = CommentRepository::new(self.db);
        let (rows, total) = repo.get_page_by_article(article_id, page, size).await?;

        let records = rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author.as_ref()))
            .collect();

        Ok(PaginatedComments {
            records,
            total,
            page,
            size,
        })
    }

    /// Posts a comment and bumps the article's comment counter in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the created comment
    pub async fn create(
        &self,
        params: CreateCommentParams,
        user_id: i32,
    ) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        let article_repo = ArticleRepository::new(&txn);
        if article_repo.find_by_id(params.article_id).await?.is_none() {
            return Err(AppError::not_found("文章", params.article_id));
        }

        let comment = CommentRepository::new(&txn).create(user_id, &params).await?;
        article_repo
            .increment_comment_count(params.article_id)
            .await?;

        txn.commit().await?;
        Ok(comment.id)
    }

    /// Soft-deletes a comment. Only the comment's author may delete it; the
    /// article's comment counter is released with a floor at zero.
    pub async fn delete(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        let Some(comment) = repo.find_by_id(comment_id).await? else {
            return Err(BusinessError::CommentNotFound.into());
        };
        if comment.user_id != user_id {
            return Err(BusinessError::Forbidden("无权删除此评论".to_string()).into());
        }

        let article_id = comment.article_id;
        repo.soft_delete(comment).await?;
        ArticleRepository::new(&txn)
            .decrement_comment_count(article_id)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Likes a comment. At-most-once is the like row's primary key; the
    /// counter moves in the same transaction.
    pub async fn like(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        if repo.find_by_id(comment_id).await?.is_none() {
            return Err(BusinessError::CommentNotFound.into());
        }

        let inserted = LikeRepository::new(&txn)
            .create(user_id, LikeTarget::Comment, comment_id)
            .await;
        match inserted {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(BusinessError::AlreadyLiked.into())
            }
            Err(err) => return Err(err.into()),
        }

        repo.increment_like_count(comment_id).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Removes a comment like; only an actual removal decrements the counter.
    pub async fn unlike(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        if repo.find_by_id(comment_id).await?.is_none() {
            return Err(BusinessError::CommentNotFound.into());
        }

        let removed = LikeRepository::new(&txn)
            .delete(user_id, LikeTarget::Comment, comment_id)
            .await?;
        if removed > 0 {
            repo.decrement_like_count(comment_id).await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
