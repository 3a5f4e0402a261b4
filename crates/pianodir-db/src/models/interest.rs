//! Event interest database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the event_interests table
#[derive(Debug, Clone, FromRow)]
pub struct InterestModel {
    pub id: Uuid,
    pub user_id: String,
    pub event_id: String,
    pub interested: bool,
    pub created_at: DateTime<Utc>,
}
