//! Parking reminder handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Reminder routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_reminder))
        .route("/", get(handler::list_reminders))
        .route("/{id}", delete(handler::delete_reminder))
}
