//! Spot request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Viewport (bounding box) query parameters
#[derive(Debug, Deserialize)]
pub struct ViewportQuery {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,

    /// Record cap, clamped to the configured maximum
    pub limit: Option<u32>,

    /// Instant to evaluate rules against; defaults to the current time
    pub at: Option<DateTime<Utc>>,
}

/// Nearest-parking query parameters
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lng: f64,

    /// Search radius in meters; defaults to the configured radius
    pub radius: Option<f64>,

    /// Instant to evaluate rules against; defaults to the current time
    pub at: Option<DateTime<Utc>>,
}
