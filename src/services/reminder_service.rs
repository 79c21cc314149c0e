//! Reminder service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::REMINDER_SWEEP_BATCH_SIZE,
    db::repositories::ReminderRepository,
    error::{AppError, AppResult},
    handlers::reminders::request::CreateReminderRequest,
    models::Reminder,
    utils::validation::{sanitize_string, validate_note, validate_nyc_position},
};

/// Reminder service for business logic
pub struct ReminderService;

impl ReminderService {
    /// Create a new reminder
    pub async fn create_reminder(
        pool: &PgPool,
        payload: CreateReminderRequest,
    ) -> AppResult<Reminder> {
        payload.validate()?;
        validate_nyc_position(payload.latitude, payload.longitude)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let note = sanitize_string(&payload.note);
        validate_note(&note).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        if payload.remind_at <= Utc::now() {
            return Err(AppError::InvalidInput(
                "remind_at must be in the future".to_string(),
            ));
        }

        ReminderRepository::create(
            pool,
            payload.latitude,
            payload.longitude,
            &note,
            payload.remind_at,
            payload.device_id.as_deref(),
        )
        .await
    }

    /// List reminders for a device
    pub async fn list_reminders(
        pool: &PgPool,
        device_id: Option<&str>,
        include_sent: bool,
        limit: i64,
    ) -> AppResult<Vec<Reminder>> {
        ReminderRepository::list(pool, device_id, include_sent, limit).await
    }

    /// Delete a reminder
    pub async fn delete_reminder(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ReminderRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Reminder not found".to_string()));
        }
        Ok(())
    }

    /// Deliver all reminders due at `now` and mark them notified.
    ///
    /// Delivery is a structured log line per reminder; transports such as
    /// push notifications hang off that seam. Returns the number delivered.
    pub async fn dispatch_due(pool: &PgPool, now: DateTime<Utc>) -> AppResult<u64> {
        let due = ReminderRepository::find_due(pool, now, REMINDER_SWEEP_BATCH_SIZE).await?;
        if due.is_empty() {
            return Ok(0);
        }

        for reminder in &due {
            tracing::info!(
                reminder_id = %reminder.id,
                latitude = reminder.latitude,
                longitude = reminder.longitude,
                remind_at = %reminder.remind_at,
                note = %reminder.note,
                "Reminder due"
            );
        }

        let ids: Vec<Uuid> = due.iter().map(|r| r.id).collect();
        ReminderRepository::mark_notified(pool, &ids).await
    }
}
