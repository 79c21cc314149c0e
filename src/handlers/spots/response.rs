//! Spot response DTOs

use serde::Serialize;

/// One evaluated parking spot
#[derive(Debug, Clone, Serialize)]
pub struct SpotStatus {
    pub latitude: f64,
    pub longitude: f64,
    /// Sign description as served by the open-data feed
    pub sign_text: Option<String>,
    pub allowed: bool,
    pub reason: String,
}

/// Viewport query response
#[derive(Debug, Serialize)]
pub struct SpotsListResponse {
    pub spots: Vec<SpotStatus>,
    pub total: usize,
}

/// Nearest-parking response
#[derive(Debug, Serialize)]
pub struct NearestSpotResponse {
    pub spot: SpotStatus,
    pub distance_meters: f64,
}
