use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::WasteReport;

/// Which UI collaborator is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Landing,
    Dashboard,
    Report,
    /// Declared, but no navigation action leads here
    Profile,
    /// Declared, but no navigation action leads here
    Map,
    Worker,
    Track,
    Admin,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Landing => "LANDING",
            View::Dashboard => "DASHBOARD",
            View::Report => "REPORT",
            View::Profile => "PROFILE",
            View::Map => "MAP",
            View::Worker => "WORKER",
            View::Track => "TRACK",
            View::Admin => "ADMIN",
        };
        f.write_str(name)
    }
}

/// Navigation requests raised by UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    /// Landing page "report waste" button
    StartReporting,
    /// Landing page or admin dashboard map link
    ViewMap,
    WorkerPortal,
    AdminPortal,
    /// Back button of any portal page
    Back,
    /// Abandon the new-report flow
    Cancel,
}

impl NavigationAction {
    pub fn target(self) -> View {
        match self {
            NavigationAction::StartReporting => View::Report,
            NavigationAction::ViewMap => View::Dashboard,
            NavigationAction::WorkerPortal => View::Worker,
            NavigationAction::AdminPortal => View::Admin,
            NavigationAction::Back | NavigationAction::Cancel => View::Landing,
        }
    }
}

/// What the active collaborator gets to render
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    /// Hotspot map over every report
    Dashboard { reports: Vec<WasteReport> },
    /// New report flow
    Report,
    Worker { reports: Vec<WasteReport> },
    Admin { reports: Vec<WasteReport> },
    Track { report: WasteReport },
    /// TRACK entered without a selection
    TrackError { message: String },
    /// Views with nothing wired to them
    Empty,
}

/// Success notice raised after a submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionNotice {
    pub report_id: Uuid,
    pub token: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&WasteReport> for SubmissionNotice {
    fn from(report: &WasteReport) -> Self {
        Self {
            report_id: report.id,
            token: report.token.clone(),
            submitted_at: report.timestamp,
        }
    }
}

/// Everything a client needs to draw the current page
#[derive(Debug, Clone, PartialEq)]
pub struct PortalSnapshot {
    pub view: View,
    pub screen: Screen,
    pub notice: Option<SubmissionNotice>,
}
