//! Reminder request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NOTE_LENGTH;

/// Create reminder request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReminderRequest {
    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, max = MAX_NOTE_LENGTH))]
    pub note: String,

    /// When the reminder becomes due; must be in the future
    pub remind_at: DateTime<Utc>,

    /// Anonymous device identifier, if the client tracks one
    #[validate(length(max = 100))]
    pub device_id: Option<String>,
}

/// List reminders query parameters
#[derive(Debug, Deserialize)]
pub struct ListRemindersQuery {
    pub device_id: Option<String>,
    /// Include reminders that have already been delivered
    pub include_sent: Option<bool>,
    pub limit: Option<i64>,
}
