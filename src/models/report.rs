//! Spot report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-submitted report about a parking spot
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SpotReport {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    /// Anonymous device identifier supplied by the client, if any
    pub device_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
