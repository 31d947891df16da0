use crate::{
    data::article::ArticleRepository,
    model::article::{ArticleParams, ArticleQuery},
};
use entity::article::ReviewStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counters;
mod create;
mod get_public_page;
mod publish;
mod review;

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

fn query(page: u64, size: u64) -> ArticleQuery {
    ArticleQuery {
        page,
        size,
        ..Default::default()
    }
}
