use crate::data::{favorite::FavoriteRepository, is_unique_violation};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_page_by_user;
