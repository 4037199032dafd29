use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::reports::dtos::{
    CreateReportDto, ListReportsQuery, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::models::WasteReport;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

fn into_dtos(reports: Vec<WasteReport>) -> Vec<ReportResponseDto> {
    reports.into_iter().map(ReportResponseDto::from).collect()
}

/// List reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ListReportsQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    AppQuery(query): AppQuery<ListReportsQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list(query.status, query.category).await;
    let meta = Meta::with_total(reports.len());
    Ok(Json(ApiResponse::success(
        Some(into_dtos(reports)),
        None,
        Some(meta),
    )))
}

/// Submit a new waste report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid request")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.create(dto.into()).await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Report submitted".to_string()),
            None,
        )),
    ))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Track a report by its token (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/reports/track/{token}",
    params(
        ("token" = String, Path, description = "Tracking token (e.g., TT-IND-2025-48291)")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Token not found")
    ),
    tag = "reports"
)]
pub async fn track_report(
    State(service): State<Arc<ReportService>>,
    AppPath(token): AppPath<String>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_by_token(&token).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Update report status (worker/admin portal)
///
/// Returns the full collection. An unknown id changes nothing.
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "All reports after the update", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 400, description = "Invalid request")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service
        .update_status(id, dto.status, dto.resolved_image_url)
        .await;
    let meta = Meta::with_total(reports.len());
    Ok(Json(ApiResponse::success(
        Some(into_dtos(reports)),
        None,
        Some(meta),
    )))
}
