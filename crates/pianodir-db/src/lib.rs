//! # pianodir-db
//!
//! Database layer implementing `InterestRepository` with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema migrations (`migrations/`)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pianodir_db::{create_pool, run_migrations, DatabaseConfig, PgInterestRepository};
//! use pianodir_core::InterestRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let interests = PgInterestRepository::new(pool);
//!
//!     let count = interests.count_interested("event-1").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::PgInterestRepository;
