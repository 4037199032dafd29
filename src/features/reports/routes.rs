use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route("/api/reports/track/{token}", get(handlers::track_report))
        .route("/api/reports/{id}", get(handlers::get_report))
        .route(
            "/api/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use crate::features::reports::dtos::ReportResponseDto;
    use crate::features::reports::models::{ReportStatus, WasteCategory};
    use crate::features::reports::seed::demo_reports;
    use crate::shared::constants::TOKEN_NOT_FOUND_MESSAGE;
    use crate::shared::test_helpers::sequential_store;
    use crate::shared::types::ApiResponse;

    fn server() -> TestServer {
        let store = sequential_store().with_reports(demo_reports(Utc::now()));
        TestServer::new(routes(Arc::new(ReportService::new(store)))).unwrap()
    }

    fn bin_overflow_payload() -> serde_json::Value {
        json!({
            "category": "Overflowing Dustbin",
            "description": "Dustbin overflowing outside the school gate",
            "severity": 4,
            "location": {
                "latitude": 28.6304,
                "longitude": 77.2177,
                "city": "Delhi"
            }
        })
    }

    #[tokio::test]
    async fn test_create_report_lands_first_in_list() {
        let server = server();

        let response = server.post("/api/reports").json(&bin_overflow_payload()).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let created = response
            .json::<ApiResponse<ReportResponseDto>>()
            .data
            .unwrap();

        assert_eq!(created.status, ReportStatus::Pending);
        assert_eq!(created.category, WasteCategory::BinOverflow);
        assert_eq!(created.timeline.len(), 1);
        assert_eq!(created.token, "TT-IND-2025-10001");

        let list = server
            .get("/api/reports")
            .await
            .json::<ApiResponse<Vec<ReportResponseDto>>>();
        assert_eq!(list.meta.unwrap().total, 5);
        assert_eq!(list.data.unwrap()[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_report_rejects_severity_out_of_range() {
        let server = server();
        let mut payload = bin_overflow_payload();
        payload["severity"] = json!(9);

        let response = server.post("/api/reports").json(&payload).await;

        response.assert_status_bad_request();
        let body = response.json::<ApiResponse<()>>();
        assert!(!body.success);
        assert!(body.errors.is_some());
    }

    #[tokio::test]
    async fn test_create_report_rejects_unknown_category() {
        let server = server();
        let mut payload = bin_overflow_payload();
        payload["category"] = json!("Radioactive");

        server
            .post("/api/reports")
            .json(&payload)
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_track_report_is_case_insensitive() {
        let server = server();

        let response = server.get("/api/reports/track/tt-ind-2025-48291").await;

        response.assert_status_ok();
        let report = response
            .json::<ApiResponse<ReportResponseDto>>()
            .data
            .unwrap();
        assert_eq!(report.token, "TT-IND-2025-48291");
        assert_eq!(report.status, ReportStatus::InProgress);
    }

    #[tokio::test]
    async fn test_track_report_miss_is_404() {
        let server = server();

        let response = server.get("/api/reports/track/TT-IND-2025-99999").await;

        response.assert_status_not_found();
        let body = response.json::<ApiResponse<()>>();
        assert_eq!(body.message.as_deref(), Some(TOKEN_NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_resolve_pending_report_with_after_photo() {
        let server = server();
        let pending_id = Uuid::from_u128(1);

        let response = server
            .patch(&format!("/api/reports/{}/status", pending_id))
            .json(&json!({ "status": "RESOLVED", "resolved_image_url": "url-after.jpg" }))
            .await;

        response.assert_status_ok();
        let reports = response
            .json::<ApiResponse<Vec<ReportResponseDto>>>()
            .data
            .unwrap();
        let resolved = reports.iter().find(|r| r.id == pending_id).unwrap();
        assert_eq!(resolved.status, ReportStatus::Resolved);
        assert_eq!(resolved.timeline.len(), 2);
        assert_eq!(resolved.resolved_image_url.as_deref(), Some("url-after.jpg"));
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_leaves_reports_unchanged() {
        let server = server();
        let before = server
            .get("/api/reports")
            .await
            .json::<ApiResponse<Vec<ReportResponseDto>>>()
            .data
            .unwrap();

        let response = server
            .patch(&format!("/api/reports/{}/status", Uuid::new_v4()))
            .json(&json!({ "status": "ASSIGNED" }))
            .await;

        response.assert_status_ok();
        let after = response
            .json::<ApiResponse<Vec<ReportResponseDto>>>()
            .data
            .unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_list_reports_filters_by_status() {
        let server = server();

        let response = server
            .get("/api/reports")
            .add_query_param("status", "IN_PROGRESS")
            .await;

        response.assert_status_ok();
        let reports = response
            .json::<ApiResponse<Vec<ReportResponseDto>>>()
            .data
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.status == ReportStatus::InProgress));
    }

    #[tokio::test]
    async fn test_list_reports_rejects_unknown_status() {
        let server = server();

        server
            .get("/api/reports")
            .add_query_param("status", "CLOSED")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_create_report_ignores_after_photo() {
        let server = server();
        let mut payload = bin_overflow_payload();
        payload["resolved_image_url"] = json!("after.jpg");

        let response = server.post("/api/reports").json(&payload).await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let created = response
            .json::<ApiResponse<ReportResponseDto>>()
            .data
            .unwrap();
        assert_eq!(created.status, ReportStatus::Pending);
        assert!(created.resolved_image_url.is_none());
    }

    #[tokio::test]
    async fn test_get_report_malformed_id_uses_error_envelope() {
        let server = server();

        let response = server.get("/api/reports/not-a-uuid").await;

        response.assert_status_bad_request();
        let body = response.json::<ApiResponse<()>>();
        assert!(!body.success);
        assert!(body.message.is_some());
    }

    #[tokio::test]
    async fn test_update_status_malformed_id_uses_error_envelope() {
        let server = server();

        let response = server
            .patch("/api/reports/42/status")
            .json(&json!({ "status": "ASSIGNED" }))
            .await;

        response.assert_status_bad_request();
        assert!(!response.json::<ApiResponse<()>>().success);
    }

    #[tokio::test]
    async fn test_get_report_miss_is_404() {
        let server = server();

        server
            .get(&format!("/api/reports/{}", Uuid::new_v4()))
            .await
            .assert_status_not_found();
    }
}
