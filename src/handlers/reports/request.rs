//! Report request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NOTE_LENGTH;

/// Create report request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, max = MAX_NOTE_LENGTH))]
    pub note: String,

    /// Anonymous device identifier, if the client tracks one
    #[validate(length(max = 100))]
    pub device_id: Option<String>,
}

/// List reports query parameters
#[derive(Debug, Deserialize)]
pub struct ListReportsQuery {
    pub limit: Option<i64>,
}

/// Nearby reports query parameters
#[derive(Debug, Deserialize)]
pub struct NearReportsQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in meters; defaults to the configured radius
    pub radius: Option<f64>,
}
