use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report lifecycle status
///
/// Any status may follow any other; no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Assigned,
    InProgress,
    Resolved,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "PENDING"),
            ReportStatus::Assigned => write!(f, "ASSIGNED"),
            ReportStatus::InProgress => write!(f, "IN_PROGRESS"),
            ReportStatus::Resolved => write!(f, "RESOLVED"),
        }
    }
}

/// Kind of waste being reported, serialized by its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum WasteCategory {
    #[serde(rename = "Roadside Garbage")]
    Roadside,
    #[serde(rename = "Overflowing Dustbin")]
    BinOverflow,
    #[serde(rename = "Plastic Waste")]
    Plastic,
    #[serde(rename = "Wet Waste")]
    Wet,
    #[serde(rename = "Construction Waste")]
    Construction,
    #[serde(rename = "Other")]
    Other,
}

impl WasteCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Roadside => "Roadside Garbage",
            WasteCategory::BinOverflow => "Overflowing Dustbin",
            WasteCategory::Plastic => "Plastic Waste",
            WasteCategory::Wet => "Wet Waste",
            WasteCategory::Construction => "Construction Waste",
            WasteCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the waste was spotted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

/// One entry in a report's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEvent {
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub note: Option<String>,
}

impl TimelineEvent {
    pub fn new(status: ReportStatus, timestamp: DateTime<Utc>) -> Self {
        Self {
            status,
            timestamp,
            note: None,
        }
    }
}

/// In-memory model for a waste report
#[derive(Debug, Clone, PartialEq)]
pub struct WasteReport {
    pub id: Uuid,
    pub token: String,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub category: WasteCategory,
    pub description: String,
    pub severity: u8,
    pub location: Location,
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
    pub timeline: Vec<TimelineEvent>,
    pub ai_analysis: Option<String>,
    pub resolved_image_url: Option<String>,
}

/// Data for creating a new report
///
/// Everything the submitter provides; id, token, timestamp, status and
/// timeline are assigned by the store. The "after" photo only arrives with
/// a status update.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub category: WasteCategory,
    pub description: String,
    pub severity: u8,
    pub location: Location,
    pub ai_analysis: Option<String>,
}

impl WasteReport {
    /// Build a freshly submitted report: PENDING with a single timeline entry
    pub fn submitted(data: NewReport, id: Uuid, token: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            token,
            image_url: data.image_url,
            title: data.title,
            category: data.category,
            description: data.description,
            severity: data.severity,
            location: data.location,
            timestamp,
            status: ReportStatus::Pending,
            timeline: vec![TimelineEvent::new(ReportStatus::Pending, timestamp)],
            ai_analysis: data.ai_analysis,
            resolved_image_url: None,
        }
    }

    /// Token comparison used by tracking lookups
    pub fn token_matches(&self, token: &str) -> bool {
        self.token.eq_ignore_ascii_case(token)
    }

    /// Move to `status`, recording the change in the timeline
    pub fn record_status(
        &mut self,
        status: ReportStatus,
        at: DateTime<Utc>,
        resolved_image_url: Option<String>,
    ) {
        self.status = status;
        self.timeline.push(TimelineEvent::new(status, at));
        if let Some(url) = resolved_image_url {
            self.resolved_image_url = Some(url);
        }
    }
}
