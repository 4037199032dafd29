//! Demo reports the store can start with, spread across the lifecycle.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::features::reports::models::{
    Location, ReportStatus, TimelineEvent, WasteCategory, WasteReport,
};

fn location(
    latitude: f64,
    longitude: f64,
    address: &str,
    city: &str,
    pincode: &str,
) -> Location {
    Location {
        latitude,
        longitude,
        address: Some(address.to_string()),
        city: Some(city.to_string()),
        pincode: Some(pincode.to_string()),
    }
}

fn timeline(events: &[(ReportStatus, DateTime<Utc>)]) -> Vec<TimelineEvent> {
    events
        .iter()
        .map(|(status, at)| TimelineEvent::new(*status, *at))
        .collect()
}

/// Four demo reports with timestamps relative to `now`
pub fn demo_reports(now: DateTime<Utc>) -> Vec<WasteReport> {
    let ms = Duration::milliseconds;

    let market_bin_at = now - ms(3_600_000);
    let drums_at = now - ms(86_400_000);
    let debris_at = now - ms(172_800_000);
    let mg_road_at = now - ms(7_200_000);

    vec![
        WasteReport {
            id: Uuid::from_u128(1),
            token: "TT-IND-2025-10001".to_string(),
            image_url: Some("https://picsum.photos/400/300?random=1".to_string()),
            title: Some("Overflowing Bin at Market".to_string()),
            category: WasteCategory::BinOverflow,
            description: "The main dustbin is full and garbage is spilling on the road."
                .to_string(),
            severity: 4,
            location: location(
                28.6304,
                77.2177,
                "Connaught Place, Delhi",
                "Delhi",
                "110001",
            ),
            timestamp: market_bin_at,
            status: ReportStatus::Pending,
            timeline: timeline(&[(ReportStatus::Pending, market_bin_at)]),
            ai_analysis: None,
            resolved_image_url: None,
        },
        WasteReport {
            id: Uuid::from_u128(2),
            token: "TT-IND-2025-10002".to_string(),
            image_url: Some("https://picsum.photos/400/300?random=2".to_string()),
            title: Some("Chemical drums dumped".to_string()),
            category: WasteCategory::Other,
            description: "Suspicious blue drums left in the alleyway. Smells bad.".to_string(),
            severity: 5,
            location: location(
                19.0760,
                72.8777,
                "45 Industrial Ave, Mumbai",
                "Mumbai",
                "400001",
            ),
            timestamp: drums_at,
            status: ReportStatus::InProgress,
            timeline: timeline(&[
                (ReportStatus::Pending, drums_at),
                (ReportStatus::Assigned, now - ms(43_200_000)),
                (ReportStatus::InProgress, now - ms(10_000_000)),
            ]),
            ai_analysis: None,
            resolved_image_url: None,
        },
        WasteReport {
            id: Uuid::from_u128(3),
            token: "TT-IND-2025-10003".to_string(),
            image_url: Some("https://picsum.photos/400/300?random=3".to_string()),
            title: Some("Construction Debris".to_string()),
            category: WasteCategory::Construction,
            description: "Leftover bricks and cement bags blocking the sidewalk.".to_string(),
            severity: 2,
            location: location(
                12.9716,
                77.5946,
                "88 Residential Blvd, Bangalore",
                "Bangalore",
                "560001",
            ),
            timestamp: debris_at,
            status: ReportStatus::Resolved,
            timeline: timeline(&[
                (ReportStatus::Pending, debris_at),
                (ReportStatus::Resolved, now - ms(100_000)),
            ]),
            ai_analysis: None,
            resolved_image_url: Some("https://picsum.photos/400/300?random=10".to_string()),
        },
        WasteReport {
            id: Uuid::from_u128(4),
            token: "TT-IND-2025-48291".to_string(),
            image_url: Some("https://picsum.photos/400/300?random=4".to_string()),
            title: Some("Garbage Pile on MG Road".to_string()),
            category: WasteCategory::Roadside,
            description:
                "Huge pile of mixed waste blocking the pedestrian path near the metro station."
                    .to_string(),
            severity: 4,
            location: location(12.97, 77.59, "MG Road, Bangalore", "Bangalore", "560025"),
            timestamp: mg_road_at,
            status: ReportStatus::InProgress,
            timeline: timeline(&[
                (ReportStatus::Pending, mg_road_at),
                (ReportStatus::Assigned, now - ms(3_600_000)),
                (ReportStatus::InProgress, now - ms(1_800_000)),
            ]),
            ai_analysis: None,
            resolved_image_url: None,
        },
    ]
}
