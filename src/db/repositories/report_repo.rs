//! Spot report repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::SpotReport};

/// Repository for spot report database operations
pub struct ReportRepository;

impl ReportRepository {
    /// Create a new report
    pub async fn create(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        note: &str,
        device_id: Option<&str>,
    ) -> AppResult<SpotReport> {
        let report = sqlx::query_as::<_, SpotReport>(
            r#"
            INSERT INTO spot_reports (latitude, longitude, note, device_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(note)
        .bind(device_id)
        .fetch_one(pool)
        .await?;

        Ok(report)
    }

    /// Find report by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<SpotReport>> {
        let report =
            sqlx::query_as::<_, SpotReport>(r#"SELECT * FROM spot_reports WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(report)
    }

    /// List most recent reports
    pub async fn list_recent(pool: &PgPool, limit: i64) -> AppResult<Vec<SpotReport>> {
        let reports = sqlx::query_as::<_, SpotReport>(
            r#"SELECT * FROM spot_reports ORDER BY created_at DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(reports)
    }

    /// List reports inside a latitude/longitude box, most recent first
    pub async fn list_in_box(
        pool: &PgPool,
        south: f64,
        north: f64,
        west: f64,
        east: f64,
        limit: i64,
    ) -> AppResult<Vec<SpotReport>> {
        let reports = sqlx::query_as::<_, SpotReport>(
            r#"
            SELECT * FROM spot_reports
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
            ORDER BY created_at DESC
            LIMIT $5
            "#,
        )
        .bind(south)
        .bind(north)
        .bind(west)
        .bind(east)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(reports)
    }

    /// Delete report, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM spot_reports WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
