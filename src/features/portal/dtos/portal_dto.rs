use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::portal::models::{
    NavigationAction, PortalSnapshot, Screen, SubmissionNotice, View,
};
use crate::features::reports::dtos::ReportResponseDto;
use crate::features::reports::models::WasteReport;

/// Request DTO for a navigation action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigateDto {
    pub action: NavigationAction,
}

/// Request DTO for setting the view directly
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetViewDto {
    pub view: View,
}

/// Request DTO for tracking by token
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrackTokenDto {
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// Resolved screen for the active view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenDto {
    Landing,
    Dashboard { reports: Vec<ReportResponseDto> },
    Report,
    Worker { reports: Vec<ReportResponseDto> },
    Admin { reports: Vec<ReportResponseDto> },
    Track { report: ReportResponseDto },
    TrackError { message: String },
    Empty,
}

fn report_dtos(reports: Vec<WasteReport>) -> Vec<ReportResponseDto> {
    reports.into_iter().map(ReportResponseDto::from).collect()
}

impl From<Screen> for ScreenDto {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Landing => ScreenDto::Landing,
            Screen::Dashboard { reports } => ScreenDto::Dashboard {
                reports: report_dtos(reports),
            },
            Screen::Report => ScreenDto::Report,
            Screen::Worker { reports } => ScreenDto::Worker {
                reports: report_dtos(reports),
            },
            Screen::Admin { reports } => ScreenDto::Admin {
                reports: report_dtos(reports),
            },
            Screen::Track { report } => ScreenDto::Track {
                report: report.into(),
            },
            Screen::TrackError { message } => ScreenDto::TrackError { message },
            Screen::Empty => ScreenDto::Empty,
        }
    }
}

/// Success notice shown after a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionNoticeDto {
    pub report_id: Uuid,
    /// Token to copy and keep for tracking
    pub token: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<SubmissionNotice> for SubmissionNoticeDto {
    fn from(n: SubmissionNotice) -> Self {
        Self {
            report_id: n.report_id,
            token: n.token,
            submitted_at: n.submitted_at,
        }
    }
}

/// Response DTO for the portal state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortalStateDto {
    pub view: View,
    pub screen: ScreenDto,
    pub notice: Option<SubmissionNoticeDto>,
}

impl From<PortalSnapshot> for PortalStateDto {
    fn from(s: PortalSnapshot) -> Self {
        Self {
            view: s.view,
            screen: s.screen.into(),
            notice: s.notice.map(SubmissionNoticeDto::from),
        }
    }
}

/// Response DTO for a portal submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub report: ReportResponseDto,
    pub portal: PortalStateDto,
}
