//! Parking reminder model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled reminder pinned to a parking location
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    /// When the reminder becomes due
    pub remind_at: DateTime<Utc>,
    /// Anonymous device identifier supplied by the client, if any
    pub device_id: Option<String>,
    /// Set once the dispatch sweep has delivered the reminder
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Whether the reminder is due at `now` and still undelivered
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.notified && self.remind_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reminder(remind_at: DateTime<Utc>, notified: bool) -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            latitude: 40.7128,
            longitude: -74.0060,
            note: "move the car".to_string(),
            remind_at,
            device_id: None,
            notified,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_is_due() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap();

        assert!(reminder(past, false).is_due(now));
        assert!(reminder(now, false).is_due(now));
        assert!(!reminder(future, false).is_due(now));
        assert!(!reminder(past, true).is_due(now));
    }
}
