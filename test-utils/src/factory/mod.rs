//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let article = factory::article::create_article(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::{article::ReviewStatus, user::Role};
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("reviewer")
//!     .role(Role::Admin)
//!     .build()
//!     .await?;
//!
//! let article = factory::article::ArticleFactory::new(&db, admin.id)
//!     .published(true)
//!     .review_status(ReviewStatus::Approved)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `tag` - Create tag entities
//! - `article` - Create article entities
//! - `comment` - Create comment entities
//! - `helpers` - Unique ID generation shared by all factories

pub mod article;
pub mod category;
pub mod comment;
pub mod helpers;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::{create_article, create_published_article};
pub use category::create_category;
pub use comment::create_comment;
pub use tag::create_tag;
pub use user::{create_admin, create_user};
