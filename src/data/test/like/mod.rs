use crate::data::{is_unique_violation, like::LikeRepository};
use entity::like::LikeTarget;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
