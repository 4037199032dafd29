use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, ReportStatus, WasteCategory, WasteReport};
use crate::features::reports::services::ReportStore;
use crate::shared::constants::TOKEN_NOT_FOUND_MESSAGE;
use crate::shared::validation::TOKEN_REGEX;

/// Service for report operations
///
/// Wraps the [`ReportStore`] so each operation completes under a single lock
/// acquisition.
pub struct ReportService {
    store: RwLock<ReportStore>,
}

impl ReportService {
    pub fn new(store: ReportStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Submit a new report
    pub async fn create(&self, data: NewReport) -> WasteReport {
        let report = self.store.write().await.create(data);

        tracing::info!(
            "Report created: id={}, token={}, category={}, severity={}",
            report.id,
            report.token,
            report.category,
            report.severity
        );

        report
    }

    /// List reports newest first, optionally narrowed by status and category
    pub async fn list(
        &self,
        status: Option<ReportStatus>,
        category: Option<WasteCategory>,
    ) -> Vec<WasteReport> {
        self.store
            .read()
            .await
            .all()
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .filter(|r| category.map_or(true, |c| r.category == c))
            .cloned()
            .collect()
    }

    /// Get report by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<WasteReport> {
        self.store
            .read()
            .await
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Look up a report by its tracking token
    pub async fn find_by_token(&self, token: &str) -> Option<WasteReport> {
        let token = token.trim();
        let found = self.store.read().await.find_by_token(token).cloned();

        if found.is_none() {
            if TOKEN_REGEX.is_match(token) {
                tracing::debug!("No report for token {}", token);
            } else {
                tracing::debug!("Malformed tracking token looked up: {:?}", token);
            }
        }

        found
    }

    /// Like [`Self::find_by_token`], but a miss is an error
    pub async fn get_by_token(&self, token: &str) -> Result<WasteReport> {
        self.find_by_token(token)
            .await
            .ok_or_else(|| AppError::NotFound(TOKEN_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Change a report's status and return the whole collection.
    ///
    /// Unknown ids are ignored.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ReportStatus,
        resolved_image_url: Option<String>,
    ) -> Vec<WasteReport> {
        let mut store = self.store.write().await;

        let previous = store.find_by_id(id).map(|r| r.status);
        let reports = store.update_status(id, status, resolved_image_url).to_vec();

        match previous {
            Some(from) => tracing::info!("Report {} status: {} -> {}", id, from, status),
            None => tracing::warn!("Status update for unknown report {} ignored", id),
        }

        reports
    }
}
