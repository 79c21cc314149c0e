//! Reminder handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    constants::MAX_REMINDER_LIST_LIMIT, error::AppResult, services::ReminderService,
    state::AppState,
};

use super::{
    request::{CreateReminderRequest, ListRemindersQuery},
    response::{ReminderResponse, RemindersListResponse},
};

/// Create a new reminder
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(payload): Json<CreateReminderRequest>,
) -> AppResult<(StatusCode, Json<ReminderResponse>)> {
    let reminder = ReminderService::create_reminder(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(ReminderResponse::from(reminder))))
}

/// List reminders
pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<ListRemindersQuery>,
) -> AppResult<Json<RemindersListResponse>> {
    let limit = query
        .limit
        .unwrap_or(MAX_REMINDER_LIST_LIMIT)
        .clamp(1, MAX_REMINDER_LIST_LIMIT);

    let reminders = ReminderService::list_reminders(
        state.db(),
        query.device_id.as_deref(),
        query.include_sent.unwrap_or(false),
        limit,
    )
    .await?;

    let reminders: Vec<ReminderResponse> =
        reminders.into_iter().map(ReminderResponse::from).collect();
    let total = reminders.len();
    Ok(Json(RemindersListResponse { reminders, total }))
}

/// Delete a reminder
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ReminderService::delete_reminder(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
