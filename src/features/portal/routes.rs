use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::portal::handlers;
use crate::features::portal::services::PortalService;

/// Create routes for the portal controller
pub fn routes(service: Arc<PortalService>) -> Router {
    Router::new()
        .route("/api/portal", get(handlers::get_portal))
        .route("/api/portal/navigate", post(handlers::navigate))
        .route("/api/portal/view", put(handlers::set_view))
        .route("/api/portal/submit", post(handlers::submit_report))
        .route("/api/portal/track", post(handlers::track))
        .route("/api/portal/notice/dismiss", post(handlers::dismiss_notice))
        .with_state(service)
}
