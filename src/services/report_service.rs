//! Spot report service

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_REPORT_LIST_LIMIT, MAX_REPORT_LIST_LIMIT},
    db::repositories::ReportRepository,
    error::{AppError, AppResult},
    geo::{LatLng, haversine_meters},
    handlers::reports::{request::CreateReportRequest, response::ReportResponse},
    utils::validation::{sanitize_string, validate_note, validate_nyc_position, validate_radius},
};

/// Approximate meters per degree of latitude
const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Report service for business logic
pub struct ReportService;

impl ReportService {
    /// Create a new spot report
    pub async fn create_report(
        pool: &PgPool,
        payload: CreateReportRequest,
    ) -> AppResult<ReportResponse> {
        payload.validate()?;
        validate_nyc_position(payload.latitude, payload.longitude)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let note = sanitize_string(&payload.note);
        validate_note(&note).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let report = ReportRepository::create(
            pool,
            payload.latitude,
            payload.longitude,
            &note,
            payload.device_id.as_deref(),
        )
        .await?;

        Ok(ReportResponse::from(report))
    }

    /// List most recent reports
    pub async fn list_recent(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> AppResult<Vec<ReportResponse>> {
        let limit = limit
            .unwrap_or(DEFAULT_REPORT_LIST_LIMIT)
            .clamp(1, MAX_REPORT_LIST_LIMIT);

        let reports = ReportRepository::list_recent(pool, limit).await?;
        Ok(reports.into_iter().map(ReportResponse::from).collect())
    }

    /// List reports near a point, closest first
    ///
    /// Fetches a bounding box wide enough to contain the circle, then
    /// filters by great-circle distance.
    pub async fn list_near(
        pool: &PgPool,
        center_lat: f64,
        center_lng: f64,
        radius_meters: f64,
        max_radius_meters: f64,
    ) -> AppResult<Vec<ReportResponse>> {
        validate_nyc_position(center_lat, center_lng)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        validate_radius(radius_meters, max_radius_meters)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let dlat = radius_meters / METERS_PER_DEGREE_LAT;
        let dlng = radius_meters / (METERS_PER_DEGREE_LAT * center_lat.to_radians().cos());

        let reports = ReportRepository::list_in_box(
            pool,
            center_lat - dlat,
            center_lat + dlat,
            center_lng - dlng,
            center_lng + dlng,
            MAX_REPORT_LIST_LIMIT,
        )
        .await?;

        let center = LatLng::new(center_lat, center_lng);
        let mut nearby: Vec<ReportResponse> = reports
            .into_iter()
            .filter_map(|r| {
                let distance = haversine_meters(center, LatLng::new(r.latitude, r.longitude));
                (distance <= radius_meters).then(|| {
                    let mut response = ReportResponse::from(r);
                    response.distance_meters = Some(distance);
                    response
                })
            })
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_meters
                .unwrap_or(f64::MAX)
                .total_cmp(&b.distance_meters.unwrap_or(f64::MAX))
        });
        Ok(nearby)
    }

    /// Delete a report
    pub async fn delete_report(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ReportRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Report not found".to_string()));
        }
        Ok(())
    }
}
