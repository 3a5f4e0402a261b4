//! # pianodir-service
//!
//! Application layer: share tracking, event interest toggling, the service
//! context that wires stores and host capabilities together, and the DTOs
//! exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    InterestService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ShareService,
};
