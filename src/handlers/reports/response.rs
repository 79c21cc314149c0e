//! Report response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::SpotReport;

/// Report response
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub note: String,
    pub device_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Distance from the query point, present on nearby listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

impl From<SpotReport> for ReportResponse {
    fn from(report: SpotReport) -> Self {
        Self {
            id: report.id,
            latitude: report.latitude,
            longitude: report.longitude,
            note: report.note,
            device_id: report.device_id,
            created_at: report.created_at,
            distance_meters: None,
        }
    }
}

/// Report list response
#[derive(Debug, Serialize)]
pub struct ReportsListResponse {
    pub reports: Vec<ReportResponse>,
    pub total: usize,
}
