//! Reminder response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Reminder;

/// Reminder response
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    pub remind_at: DateTime<Utc>,
    pub device_id: Option<String>,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            latitude: reminder.latitude,
            longitude: reminder.longitude,
            note: reminder.note,
            remind_at: reminder.remind_at,
            device_id: reminder.device_id,
            notified: reminder.notified,
            created_at: reminder.created_at,
        }
    }
}

/// Reminder list response
#[derive(Debug, Serialize)]
pub struct RemindersListResponse {
    pub reminders: Vec<ReminderResponse>,
    pub total: usize,
}
