//! Interest entity <-> model mapper

use chrono::{DateTime, Utc};
use pianodir_core::InterestRecord;
use uuid::Uuid;

use crate::models::InterestModel;

/// Convert InterestModel to InterestRecord entity
impl From<InterestModel> for InterestRecord {
    fn from(model: InterestModel) -> Self {
        InterestRecord {
            id: model.id,
            user_id: model.user_id,
            event_id: model.event_id,
            interested: model.interested,
            created_at: model.created_at,
        }
    }
}

/// Borrowed column values of an interest record for insertion
pub struct InterestInsert<'a> {
    pub id: Uuid,
    pub user_id: &'a str,
    pub event_id: &'a str,
    pub interested: bool,
    pub created_at: DateTime<Utc>,
}

impl<'a> InterestInsert<'a> {
    pub fn new(record: &'a InterestRecord) -> Self {
        Self {
            id: record.id,
            user_id: &record.user_id,
            event_id: &record.event_id,
            interested: record.interested,
            created_at: record.created_at,
        }
    }
}
