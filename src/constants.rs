//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// OPEN DATA DEFAULTS
// =============================================================================

/// NYC parking-regulation sign dataset (Socrata resource)
pub const DEFAULT_DATASET_URL: &str = "https://data.cityofnewyork.us/resource/dv6r-f4he.json";

/// Default upstream request timeout in seconds
pub const DEFAULT_OPENDATA_TIMEOUT_SECONDS: u64 = 10;

/// Maximum records fetched for a viewport (bounding box) query
pub const VIEWPORT_RECORD_LIMIT: u32 = 1000;

/// Maximum records fetched for a radius query
pub const RADIUS_RECORD_LIMIT: u32 = 500;

// =============================================================================
// SEARCH DEFAULTS
// =============================================================================

/// Default radius for nearest-parking search, in meters
pub const DEFAULT_NEAREST_RADIUS_METERS: f64 = 500.0;

/// Maximum radius accepted for any radius search, in meters
pub const MAX_SEARCH_RADIUS_METERS: f64 = 5000.0;

/// NYC bounding box (approximate)
pub mod nyc_bounds {
    pub const SOUTH: f64 = 40.4774;
    pub const WEST: f64 = -74.2591;
    pub const NORTH: f64 = 40.9176;
    pub const EAST: f64 = -73.7004;
}

// =============================================================================
// REPORT SETTINGS
// =============================================================================

/// Maximum length of a report or reminder note
pub const MAX_NOTE_LENGTH: u64 = 500;

/// Default number of reports returned by a listing
pub const DEFAULT_REPORT_LIST_LIMIT: i64 = 50;

/// Maximum number of reports returned by a listing
pub const MAX_REPORT_LIST_LIMIT: i64 = 200;

// =============================================================================
// REMINDER SETTINGS
// =============================================================================

/// Default cron schedule for the reminder dispatch sweep (every minute)
pub const DEFAULT_REMINDER_SWEEP_CRON: &str = "0 * * * * *";

/// Maximum number of reminders returned by a listing
pub const MAX_REMINDER_LIST_LIMIT: i64 = 200;

/// Maximum reminders dispatched per sweep
pub const REMINDER_SWEEP_BATCH_SIZE: i64 = 100;

// =============================================================================
// RATE LIMITS
// =============================================================================

/// Per-IP fixed-window rate limits
pub mod rate_limits {
    /// Spot queries hit the upstream open-data API
    pub const SPOTS_MAX_REQUESTS: i64 = 30;
    pub const SPOTS_WINDOW_SECS: i64 = 60;

    /// Rule evaluation is pure and cheap
    pub const RULES_MAX_REQUESTS: i64 = 120;
    pub const RULES_WINDOW_SECS: i64 = 60;

    /// Report and reminder writes
    pub const WRITE_MAX_REQUESTS: i64 = 20;
    pub const WRITE_WINDOW_SECS: i64 = 60;

    /// Everything else
    pub const GENERAL_MAX_REQUESTS: i64 = 60;
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}
