use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::portal::models::{
    NavigationAction, PortalSnapshot, Screen, SubmissionNotice, View,
};
use crate::features::portal::services::ViewRouter;
use crate::features::reports::models::{NewReport, WasteReport};
use crate::features::reports::ReportService;
use crate::shared::constants::{NO_REPORT_SELECTED_MESSAGE, TOKEN_NOT_FOUND_MESSAGE};

#[derive(Default)]
struct PortalSession {
    router: ViewRouter,
    last_submitted: Option<SubmissionNotice>,
    show_notice: bool,
}

impl PortalSession {
    fn visible_notice(&self) -> Option<SubmissionNotice> {
        if self.show_notice {
            self.last_submitted.clone()
        } else {
            None
        }
    }
}

/// Application controller for the single-user portal
///
/// Owns the view router and the submission notice; drives the report
/// service on behalf of UI callbacks.
pub struct PortalService {
    reports: Arc<ReportService>,
    session: Mutex<PortalSession>,
}

impl PortalService {
    pub fn new(reports: Arc<ReportService>) -> Self {
        Self {
            reports,
            session: Mutex::new(PortalSession::default()),
        }
    }

    /// Current view with its resolved screen
    pub async fn snapshot(&self) -> PortalSnapshot {
        let session = self.session.lock().await;
        self.render(&session).await
    }

    pub async fn navigate(&self, action: NavigationAction) -> PortalSnapshot {
        let mut session = self.session.lock().await;
        let from = session.router.view();
        let to = session.router.navigate(action);
        tracing::debug!("Portal navigation {:?}: {} -> {}", action, from, to);
        self.render(&session).await
    }

    /// Jump straight to `view`, bypassing navigation actions
    pub async fn set_view(&self, view: View) -> PortalSnapshot {
        let mut session = self.session.lock().await;
        session.router.set_view(view);
        self.render(&session).await
    }

    /// Submit a report, raise the success notice and return to landing
    pub async fn submit(&self, data: NewReport) -> (WasteReport, PortalSnapshot) {
        let mut session = self.session.lock().await;
        let report = self.reports.create(data).await;

        session.last_submitted = Some(SubmissionNotice::from(&report));
        session.show_notice = true;
        session.router.set_view(View::Landing);

        let snapshot = self.render(&session).await;
        (report, snapshot)
    }

    /// Track by token, from landing or from the tracking page itself.
    ///
    /// A miss leaves the view and selection as they were.
    pub async fn track(&self, token: &str) -> Result<PortalSnapshot> {
        let mut session = self.session.lock().await;
        let report = self
            .reports
            .find_by_token(token)
            .await
            .ok_or_else(|| AppError::NotFound(TOKEN_NOT_FOUND_MESSAGE.to_string()))?;

        session.router.track(report.id);
        tracing::info!("Tracking report {} ({})", report.id, report.token);
        Ok(self.render(&session).await)
    }

    pub async fn dismiss_notice(&self) -> PortalSnapshot {
        let mut session = self.session.lock().await;
        session.show_notice = false;
        self.render(&session).await
    }

    async fn render(&self, session: &PortalSession) -> PortalSnapshot {
        let view = session.router.view();
        let screen = match view {
            View::Landing => Screen::Landing,
            View::Report => Screen::Report,
            View::Dashboard => Screen::Dashboard {
                reports: self.reports.list(None, None).await,
            },
            View::Worker => Screen::Worker {
                reports: self.reports.list(None, None).await,
            },
            View::Admin => Screen::Admin {
                reports: self.reports.list(None, None).await,
            },
            View::Track => match session.router.tracked_report() {
                Some(id) => match self.reports.get_by_id(id).await {
                    Ok(report) => Screen::Track { report },
                    Err(_) => Screen::TrackError {
                        message: NO_REPORT_SELECTED_MESSAGE.to_string(),
                    },
                },
                None => Screen::TrackError {
                    message: NO_REPORT_SELECTED_MESSAGE.to_string(),
                },
            },
            View::Profile | View::Map => Screen::Empty,
        };

        PortalSnapshot {
            view,
            screen,
            notice: session.visible_notice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{ReportStatus, WasteCategory};
    use crate::shared::test_helpers::{new_report, sequential_store};
    use tokio_test::{assert_err, assert_ok};

    fn portal() -> PortalService {
        PortalService::new(Arc::new(ReportService::new(sequential_store())))
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_landing() {
        let portal = portal();

        let snapshot = portal.snapshot().await;

        assert_eq!(snapshot.view, View::Landing);
        assert_eq!(snapshot.screen, Screen::Landing);
        assert_eq!(snapshot.notice, None);
    }

    #[tokio::test]
    async fn test_submit_returns_to_landing_with_notice() {
        let portal = portal();
        portal.navigate(NavigationAction::StartReporting).await;

        let (report, snapshot) = portal
            .submit(new_report(WasteCategory::BinOverflow, 4))
            .await;

        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(snapshot.view, View::Landing);
        let notice = snapshot.notice.unwrap();
        assert_eq!(notice.token, report.token);
        assert_eq!(notice.submitted_at, report.timestamp);
    }

    #[tokio::test]
    async fn test_notice_follows_navigation_until_dismissed() {
        let portal = portal();
        portal.submit(new_report(WasteCategory::Wet, 2)).await;

        let on_map = portal.navigate(NavigationAction::ViewMap).await;
        assert!(on_map.notice.is_some());

        let dismissed = portal.dismiss_notice().await;
        assert_eq!(dismissed.notice, None);
        assert_eq!(dismissed.view, View::Dashboard);
    }

    #[tokio::test]
    async fn test_track_found_shows_report() {
        let portal = portal();
        let (report, _) = portal.submit(new_report(WasteCategory::Plastic, 3)).await;

        let snapshot = assert_ok!(portal.track("tt-ind-2025-10001").await);

        assert_eq!(snapshot.view, View::Track);
        assert_eq!(snapshot.screen, Screen::Track { report });
    }

    #[tokio::test]
    async fn test_track_new_replaces_selection() {
        let portal = portal();
        let (first, _) = portal.submit(new_report(WasteCategory::Plastic, 3)).await;
        let (second, _) = portal.submit(new_report(WasteCategory::Other, 1)).await;
        assert_ok!(portal.track(&first.token).await);

        let snapshot = assert_ok!(portal.track(&second.token).await);

        assert_eq!(snapshot.screen, Screen::Track { report: second });
    }

    #[tokio::test]
    async fn test_track_miss_keeps_state() {
        let portal = portal();
        let (report, _) = portal.submit(new_report(WasteCategory::Plastic, 3)).await;
        assert_ok!(portal.track(&report.token).await);

        let err = assert_err!(portal.track("TT-IND-2025-99999").await);

        assert!(matches!(err, AppError::NotFound(_)));
        let snapshot = portal.snapshot().await;
        assert_eq!(snapshot.view, View::Track);
        assert_eq!(snapshot.screen, Screen::Track { report });
    }

    #[tokio::test]
    async fn test_track_view_without_selection_falls_back_to_error() {
        let portal = portal();

        let snapshot = portal.set_view(View::Track).await;

        assert_eq!(snapshot.view, View::Track);
        assert_eq!(
            snapshot.screen,
            Screen::TrackError {
                message: NO_REPORT_SELECTED_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_tracked_report_reflects_later_updates() {
        let reports = Arc::new(ReportService::new(sequential_store()));
        let portal = PortalService::new(Arc::clone(&reports));
        let (report, _) = portal.submit(new_report(WasteCategory::Roadside, 4)).await;
        assert_ok!(portal.track(&report.token).await);

        reports
            .update_status(report.id, ReportStatus::Assigned, None)
            .await;

        match portal.snapshot().await.screen {
            Screen::Track { report } => {
                assert_eq!(report.status, ReportStatus::Assigned);
                assert_eq!(report.timeline.len(), 2);
            }
            other => panic!("expected tracking screen, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_portal_screens_carry_report_list() {
        let portal = portal();
        portal.submit(new_report(WasteCategory::Plastic, 3)).await;
        portal.submit(new_report(WasteCategory::Wet, 2)).await;

        for action in [
            NavigationAction::WorkerPortal,
            NavigationAction::AdminPortal,
            NavigationAction::ViewMap,
        ] {
            let reports = match portal.navigate(action).await.screen {
                Screen::Worker { reports }
                | Screen::Admin { reports }
                | Screen::Dashboard { reports } => reports,
                other => panic!("unexpected screen {:?}", other),
            };
            assert_eq!(reports.len(), 2);
            assert_eq!(reports[0].category, WasteCategory::Wet);
        }
    }

    #[tokio::test]
    async fn test_dead_views_render_empty() {
        let portal = portal();

        assert_eq!(portal.set_view(View::Profile).await.screen, Screen::Empty);
        assert_eq!(portal.set_view(View::Map).await.screen, Screen::Empty);
    }
}
