//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::service::auth::token::TokenProvider;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenProvider` holds reference-counted signing keys
/// - `PathBuf` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates the JWT access and refresh tokens.
    pub tokens: TokenProvider,

    /// Root directory where uploaded images are stored.
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is handed to the Axum router.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - JWT provider built from the configured secret
    /// - `upload_dir` - Upload storage root, already created on disk
    pub fn new(db: DatabaseConnection, tokens: TokenProvider, upload_dir: PathBuf) -> Self {
        Self {
            db,
            tokens,
            upload_dir,
        }
    }
}
