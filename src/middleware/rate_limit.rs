//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{
    constants,
    error::{AppError, AppResult},
    state::AppState,
};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> AppResult<Response> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    // Determine rate limit based on path
    let (limit, window) = get_rate_limit(&path);

    // Check rate limit
    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Set expiry on first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.starts_with("/api/v1/spots") {
        (
            constants::rate_limits::SPOTS_MAX_REQUESTS,
            constants::rate_limits::SPOTS_WINDOW_SECS,
        )
    } else if path.starts_with("/api/v1/rules") {
        (
            constants::rate_limits::RULES_MAX_REQUESTS,
            constants::rate_limits::RULES_WINDOW_SECS,
        )
    } else if path.starts_with("/api/v1/reports") || path.starts_with("/api/v1/reminders") {
        (
            constants::rate_limits::WRITE_MAX_REQUESTS,
            constants::rate_limits::WRITE_WINDOW_SECS,
        )
    } else {
        (
            constants::rate_limits::GENERAL_MAX_REQUESTS,
            constants::rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/api/v1/spots") {
        "spots"
    } else if path.starts_with("/api/v1/rules") {
        "rules"
    } else if path.starts_with("/api/v1/reports") {
        "reports"
    } else if path.starts_with("/api/v1/reminders") {
        "reminders"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_buckets() {
        assert_eq!(path_bucket("/api/v1/spots/nearest"), "spots");
        assert_eq!(path_bucket("/api/v1/rules/evaluate"), "rules");
        assert_eq!(path_bucket("/api/v1/reports/near"), "reports");
        assert_eq!(path_bucket("/api/v1/reminders"), "reminders");
        assert_eq!(path_bucket("/api/v1/health"), "general");
    }

    #[test]
    fn test_spot_limit_is_tighter_than_rules() {
        let (spots, _) = get_rate_limit("/api/v1/spots");
        let (rules, _) = get_rate_limit("/api/v1/rules/evaluate");
        assert!(spots < rules);
    }
}
