//! Rule evaluation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Rule evaluation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/evaluate", post(handler::evaluate_rule))
}
