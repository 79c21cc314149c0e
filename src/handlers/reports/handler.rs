//! Report handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{error::AppResult, services::ReportService, state::AppState};

use super::{
    request::{CreateReportRequest, ListReportsQuery, NearReportsQuery},
    response::{ReportResponse, ReportsListResponse},
};

/// Create a new spot report
pub async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<CreateReportRequest>,
) -> AppResult<(StatusCode, Json<ReportResponse>)> {
    let report = ReportService::create_report(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// List most recent reports
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ListReportsQuery>,
) -> AppResult<Json<ReportsListResponse>> {
    let reports = ReportService::list_recent(state.db(), query.limit).await?;
    let total = reports.len();
    Ok(Json(ReportsListResponse { reports, total }))
}

/// List reports near a point
pub async fn list_reports_near(
    State(state): State<AppState>,
    Query(query): Query<NearReportsQuery>,
) -> AppResult<Json<ReportsListResponse>> {
    let search = &state.config().search;
    let radius = query.radius.unwrap_or(search.default_radius_meters);

    let reports = ReportService::list_near(
        state.db(),
        query.lat,
        query.lng,
        radius,
        search.max_radius_meters,
    )
    .await?;

    let total = reports.len();
    Ok(Json(ReportsListResponse { reports, total }))
}

/// Delete a report
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ReportService::delete_report(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
