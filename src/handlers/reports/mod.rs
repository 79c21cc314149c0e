//! Spot report handlers

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

/// Report routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_report))
        .route("/", get(handler::list_reports))
        .route("/near", get(handler::list_reports_near))
        .route("/{id}", delete(handler::delete_report))
}
