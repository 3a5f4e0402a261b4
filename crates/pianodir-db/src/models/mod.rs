//! Database models - SQLx-compatible structs for PostgreSQL tables

mod interest;

pub use interest::InterestModel;
