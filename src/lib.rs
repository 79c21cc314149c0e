//! uSpotly - NYC Street-Parking Finder Backend
//!
//! This library provides the core functionality for the uSpotly service,
//! which evaluates NYC parking-sign regulations for a point and moment.
//!
//! # Features
//!
//! - Free-text parking-sign rule interpretation
//! - Viewport and nearest-spot searches over the city open-data feed
//! - User spot reports and scheduled parking reminders
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//!
//! The rule interpreter in [`rules`] is a pure function and the one piece
//! of real algorithmic logic; everything else is the service shell.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod opendata;
pub mod rules;
pub mod scheduler;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use rules::{Decision, EvaluationTime};
pub use state::AppState;
