//! Reminder repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Reminder};

/// Repository for reminder database operations
pub struct ReminderRepository;

impl ReminderRepository {
    /// Create a new reminder
    pub async fn create(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        note: &str,
        remind_at: DateTime<Utc>,
        device_id: Option<&str>,
    ) -> AppResult<Reminder> {
        let reminder = sqlx::query_as::<_, Reminder>(
            r#"
            INSERT INTO reminders (latitude, longitude, note, remind_at, device_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(note)
        .bind(remind_at)
        .bind(device_id)
        .fetch_one(pool)
        .await?;

        Ok(reminder)
    }

    /// List reminders, optionally scoped to a device and filtered to unsent
    pub async fn list(
        pool: &PgPool,
        device_id: Option<&str>,
        include_sent: bool,
        limit: i64,
    ) -> AppResult<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            r#"
            SELECT * FROM reminders
            WHERE ($1::TEXT IS NULL OR device_id = $1)
              AND ($2 OR NOT notified)
            ORDER BY remind_at ASC
            LIMIT $3
            "#,
        )
        .bind(device_id)
        .bind(include_sent)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(reminders)
    }

    /// Due, undelivered reminders as of `now`, oldest first
    pub async fn find_due(
        pool: &PgPool,
        now: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            r#"
            SELECT * FROM reminders
            WHERE NOT notified AND remind_at <= $1
            ORDER BY remind_at ASC
            LIMIT $2
            "#,
        )
        .bind(now)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(reminders)
    }

    /// Mark a batch of reminders as delivered
    pub async fn mark_notified(pool: &PgPool, ids: &[Uuid]) -> AppResult<u64> {
        let result = sqlx::query(r#"UPDATE reminders SET notified = TRUE WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete reminder, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM reminders WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
