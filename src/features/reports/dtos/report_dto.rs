use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{
    Location, NewReport, ReportStatus, TimelineEvent, WasteCategory, WasteReport,
};

/// Response DTO for report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    /// Tracking token, e.g. `TT-IND-2025-48291`
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

impl From<WasteReport> for ReportResponseDto {
    fn from(r: WasteReport) -> Self {
        Self {
            id: r.id,
            token: r.token,
            image_url: r.image_url,
            title: r.title,
            category: r.category,
            description: r.description,
            severity: r.severity,
            location: r.location,
            timestamp: r.timestamp,
            status: r.status,
            timeline: r.timeline,
            ai_analysis: r.ai_analysis,
            resolved_image_url: r.resolved_image_url,
        }
    }
}

/// Location as submitted by the reporting client
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

impl From<LocationDto> for Location {
    fn from(l: LocationDto) -> Self {
        Self {
            latitude: l.latitude,
            longitude: l.longitude,
            address: l.address,
            city: l.city,
            pincode: l.pincode,
        }
    }
}

/// Request DTO for submitting a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    /// "Before" photo URL
    pub image_url: Option<String>,

    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub title: Option<String>,

    pub category: WasteCategory,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// 1 (minor) to 5 (hazardous)
    #[validate(range(min = 1, max = 5, message = "Severity must be between 1 and 5"))]
    pub severity: u8,

    #[validate(nested)]
    pub location: LocationDto,

    pub ai_analysis: Option<String>,
}

impl From<CreateReportDto> for NewReport {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            image_url: dto.image_url,
            title: dto.title,
            category: dto.category,
            description: dto.description,
            severity: dto.severity,
            location: dto.location.into(),
            ai_analysis: dto.ai_analysis,
        }
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
    /// "After" photo; only applied when present and non-empty
    pub resolved_image_url: Option<String>,
}

/// Query params for listing reports
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListReportsQuery {
    /// Only reports currently in this status
    pub status: Option<ReportStatus>,
    /// Only reports of this category (display label, e.g. "Plastic Waste")
    pub category: Option<WasteCategory>,
}
