//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each aggregate in the application. Repositories are generic over SeaORM's
//! `ConnectionTrait` so the same methods run against the pooled connection or inside
//! an open transaction, which is how services keep multi-step mutations atomic.

pub mod article;
pub mod category;
pub mod comment;
pub mod favorite;
pub mod like;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;

/// Whether a database error is a unique constraint violation.
///
/// Like, favorite and user rows rely on unique keys as their business
/// constraint; services probe failed inserts with this to turn the violation
/// into the matching "already exists" error.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
