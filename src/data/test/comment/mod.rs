use crate::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use entity::comment::CommentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_page_by_article;
mod soft_delete;

fn params(article_id: i32, content: &str) -> CreateCommentParams {
    CreateCommentParams {
        article_id,
        content: content.to_string(),
        parent_id: None,
        reply_to_id: None,
    }
}
