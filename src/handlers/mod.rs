//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod reminders;
pub mod reports;
pub mod rules;
pub mod spots;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/spots", spots::routes())
        .nest("/rules", rules::routes())
        .nest("/reports", reports::routes())
        .nest("/reminders", reminders::routes())
}
