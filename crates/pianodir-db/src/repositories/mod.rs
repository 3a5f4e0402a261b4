//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pianodir-core.

mod error;
mod interest;

pub use interest::PgInterestRepository;
