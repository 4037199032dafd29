#[cfg(test)]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(test)]
use fake::{faker::lorem::en::Sentence, Fake};

#[cfg(test)]
use crate::features::reports::models::{Location, NewReport, WasteCategory};
#[cfg(test)]
use crate::features::reports::services::{format_token, ReportStore, TokenGenerator};

/// Deterministic token source for tests
#[cfg(test)]
pub struct SequentialTokenGenerator {
    next: AtomicU32,
    step: u32,
}

#[cfg(test)]
impl SequentialTokenGenerator {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
            step: 1,
        }
    }

    /// Always hands out the same token
    pub fn fixed(number: u32) -> Self {
        Self {
            next: AtomicU32::new(number),
            step: 0,
        }
    }
}

#[cfg(test)]
impl TokenGenerator for SequentialTokenGenerator {
    fn generate(&self) -> String {
        format_token(self.next.fetch_add(self.step, Ordering::Relaxed))
    }
}

#[cfg(test)]
pub fn test_location() -> Location {
    Location {
        latitude: 12.9716,
        longitude: 77.5946,
        address: Some("88 Residential Blvd, Bangalore".to_string()),
        city: Some("Bangalore".to_string()),
        pincode: Some("560001".to_string()),
    }
}

#[cfg(test)]
pub fn new_report(category: WasteCategory, severity: u8) -> NewReport {
    NewReport {
        image_url: Some("https://picsum.photos/400/300?random=1".to_string()),
        title: None,
        category,
        description: Sentence(3..8).fake(),
        severity,
        location: test_location(),
        ai_analysis: None,
    }
}

/// Empty store whose tokens count up from `TT-IND-2025-10001`
#[cfg(test)]
pub fn sequential_store() -> ReportStore {
    ReportStore::with_generator(Box::new(SequentialTokenGenerator::starting_at(10001)))
}
