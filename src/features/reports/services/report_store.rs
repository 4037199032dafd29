use chrono::Utc;
use uuid::Uuid;

use crate::features::reports::models::{NewReport, ReportStatus, WasteReport};
use crate::features::reports::services::token_generator::{RandomTokenGenerator, TokenGenerator};

/// Canonical, newest-first collection of waste reports
///
/// Single writer: every mutation goes through `&mut self`.
pub struct ReportStore {
    reports: Vec<WasteReport>,
    tokens: Box<dyn TokenGenerator>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore {
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomTokenGenerator))
    }

    pub fn with_generator(tokens: Box<dyn TokenGenerator>) -> Self {
        Self {
            reports: Vec::new(),
            tokens,
        }
    }

    /// Replace the collection with `reports`, kept in the given order
    pub fn with_reports(mut self, reports: Vec<WasteReport>) -> Self {
        self.reports = reports;
        self
    }

    /// Create a PENDING report and put it at the front of the collection
    pub fn create(&mut self, data: NewReport) -> WasteReport {
        let report =
            WasteReport::submitted(data, Uuid::new_v4(), self.tokens.generate(), Utc::now());
        self.reports.insert(0, report.clone());
        report
    }

    /// Case-insensitive exact token match
    pub fn find_by_token(&self, token: &str) -> Option<&WasteReport> {
        self.reports.iter().find(|r| r.token_matches(token))
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&WasteReport> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Set the status of report `id` and append it to the timeline.
    ///
    /// An unknown id leaves the collection untouched. An empty or missing
    /// `resolved_image_url` keeps whatever image the report already has.
    pub fn update_status(
        &mut self,
        id: Uuid,
        status: ReportStatus,
        resolved_image_url: Option<String>,
    ) -> &[WasteReport] {
        if let Some(report) = self.reports.iter_mut().find(|r| r.id == id) {
            let image = resolved_image_url.filter(|url| !url.is_empty());
            report.record_status(status, Utc::now(), image);
        }
        &self.reports
    }

    pub fn all(&self) -> &[WasteReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::WasteCategory;
    use crate::shared::test_helpers::{
        new_report, sequential_store as store, SequentialTokenGenerator,
    };

    #[test]
    fn test_create_seeds_single_pending_entry() {
        let mut store = store();

        let report = store.create(new_report(WasteCategory::Roadside, 2));

        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].status, ReportStatus::Pending);
        assert_eq!(report.timeline[0].timestamp, report.timestamp);
        assert_eq!(report.token, "TT-IND-2025-10001");
    }

    #[test]
    fn test_create_prepends_newest_first() {
        let mut store = store();
        store.create(new_report(WasteCategory::Plastic, 1));

        let report = store.create(new_report(WasteCategory::BinOverflow, 4));

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, report.id);
        assert_eq!(store.all()[0].category, WasteCategory::BinOverflow);
        assert_eq!(store.all()[0].severity, 4);
        assert_eq!(store.all()[0].status, ReportStatus::Pending);
        assert_eq!(store.all()[0].timeline.len(), 1);
    }

    #[test]
    fn test_find_by_token_is_case_insensitive() {
        let mut store = store();
        let report = store.create(new_report(WasteCategory::Wet, 3));

        let found = store.find_by_token("tt-ind-2025-10001").unwrap();

        assert_eq!(found.id, report.id);
    }

    #[test]
    fn test_find_by_token_miss_returns_none() {
        let mut store = store();
        store.create(new_report(WasteCategory::Wet, 3));

        assert!(store.find_by_token("TT-IND-2025-99999").is_none());
        // No partial matching
        assert!(store.find_by_token("TT-IND-2025-1000").is_none());
    }

    #[test]
    fn test_update_status_appends_timeline() {
        let mut store = store();
        let report = store.create(new_report(WasteCategory::Other, 5));
        let updates = [
            ReportStatus::Assigned,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
            ReportStatus::Pending,
        ];

        for status in updates {
            store.update_status(report.id, status, None);
        }

        let updated = store.find_by_id(report.id).unwrap();
        assert_eq!(updated.timeline.len(), 1 + updates.len());
        assert_eq!(updated.status, ReportStatus::Pending);
        assert_eq!(updated.timeline.last().unwrap().status, updated.status);
        let history: Vec<ReportStatus> = updated.timeline.iter().map(|e| e.status).collect();
        assert_eq!(
            history,
            vec![
                ReportStatus::Pending,
                ReportStatus::Assigned,
                ReportStatus::InProgress,
                ReportStatus::Resolved,
                ReportStatus::Pending,
            ]
        );
    }

    #[test]
    fn test_update_status_resolved_with_image() {
        let mut store = store();
        let report = store.create(new_report(WasteCategory::Construction, 2));

        let reports = store.update_status(
            report.id,
            ReportStatus::Resolved,
            Some("url-after.jpg".to_string()),
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, ReportStatus::Resolved);
        assert_eq!(reports[0].timeline.len(), 2);
        assert_eq!(reports[0].resolved_image_url.as_deref(), Some("url-after.jpg"));
    }

    #[test]
    fn test_update_status_never_clears_resolved_image() {
        let mut store = store();
        let report = store.create(new_report(WasteCategory::Construction, 2));
        store.update_status(report.id, ReportStatus::Resolved, Some("after.jpg".to_string()));

        store.update_status(report.id, ReportStatus::InProgress, Some(String::new()));

        let updated = store.find_by_id(report.id).unwrap();
        assert_eq!(updated.status, ReportStatus::InProgress);
        assert_eq!(updated.resolved_image_url.as_deref(), Some("after.jpg"));
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let mut store = store();
        store.create(new_report(WasteCategory::Plastic, 1));
        store.create(new_report(WasteCategory::Wet, 2));
        let before = store.all().to_vec();

        let after = store.update_status(Uuid::new_v4(), ReportStatus::Resolved, None);

        assert_eq!(after, before.as_slice());
    }

    #[test]
    fn test_duplicate_tokens_are_not_rejected() {
        let mut store = ReportStore::with_generator(Box::new(SequentialTokenGenerator::fixed(
            42424,
        )));

        let first = store.create(new_report(WasteCategory::Plastic, 1));
        let second = store.create(new_report(WasteCategory::Plastic, 1));

        assert_eq!(first.token, second.token);
        assert_eq!(store.len(), 2);
        // Lookup resolves to the newest report carrying the token
        assert_eq!(store.find_by_token(&first.token).unwrap().id, second.id);
    }
}
