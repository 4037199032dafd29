//! Portal controller handlers
//!
//! Each handler returns the portal state after the action so clients can
//! re-render from a single response.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::portal::dtos::{
    NavigateDto, PortalStateDto, SetViewDto, SubmitReportResponseDto, TrackTokenDto,
};
use crate::features::portal::services::PortalService;
use crate::features::reports::dtos::CreateReportDto;
use crate::shared::types::ApiResponse;

/// Get the current view and its screen
#[utoipa::path(
    get,
    path = "/api/portal",
    responses(
        (status = 200, description = "Current portal state", body = ApiResponse<PortalStateDto>)
    ),
    tag = "portal"
)]
pub async fn get_portal(
    State(service): State<Arc<PortalService>>,
) -> Result<Json<ApiResponse<PortalStateDto>>> {
    let snapshot = service.snapshot().await;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}

/// Apply a navigation action
#[utoipa::path(
    post,
    path = "/api/portal/navigate",
    request_body = NavigateDto,
    responses(
        (status = 200, description = "Portal state after navigation", body = ApiResponse<PortalStateDto>),
        (status = 400, description = "Unknown action")
    ),
    tag = "portal"
)]
pub async fn navigate(
    State(service): State<Arc<PortalService>>,
    AppJson(dto): AppJson<NavigateDto>,
) -> Result<Json<ApiResponse<PortalStateDto>>> {
    let snapshot = service.navigate(dto.action).await;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}

/// Set the view directly
#[utoipa::path(
    put,
    path = "/api/portal/view",
    request_body = SetViewDto,
    responses(
        (status = 200, description = "Portal state for the view", body = ApiResponse<PortalStateDto>),
        (status = 400, description = "Unknown view")
    ),
    tag = "portal"
)]
pub async fn set_view(
    State(service): State<Arc<PortalService>>,
    AppJson(dto): AppJson<SetViewDto>,
) -> Result<Json<ApiResponse<PortalStateDto>>> {
    let snapshot = service.set_view(dto.view).await;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}

/// Submit a report from the new-report flow
#[utoipa::path(
    post,
    path = "/api/portal/submit",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<SubmitReportResponseDto>),
        (status = 400, description = "Invalid request")
    ),
    tag = "portal"
)]
pub async fn submit_report(
    State(service): State<Arc<PortalService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubmitReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (report, snapshot) = service.submit(dto.into()).await;
    let response = SubmitReportResponseDto {
        report: report.into(),
        portal: snapshot.into(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(response),
            Some("Report Submitted! Thank you for helping keep India clean.".to_string()),
            None,
        )),
    ))
}

/// Track a report by token
#[utoipa::path(
    post,
    path = "/api/portal/track",
    request_body = TrackTokenDto,
    responses(
        (status = 200, description = "Tracking page for the report", body = ApiResponse<PortalStateDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Token not found")
    ),
    tag = "portal"
)]
pub async fn track(
    State(service): State<Arc<PortalService>>,
    AppJson(dto): AppJson<TrackTokenDto>,
) -> Result<Json<ApiResponse<PortalStateDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let snapshot = service.track(&dto.token).await?;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}

/// Hide the submission notice
#[utoipa::path(
    post,
    path = "/api/portal/notice/dismiss",
    responses(
        (status = 200, description = "Portal state without notice", body = ApiResponse<PortalStateDto>)
    ),
    tag = "portal"
)]
pub async fn dismiss_notice(
    State(service): State<Arc<PortalService>>,
) -> Result<Json<ApiResponse<PortalStateDto>>> {
    let snapshot = service.dismiss_notice().await;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}
