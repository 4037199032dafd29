mod report;

pub use report::{Location, NewReport, ReportStatus, TimelineEvent, WasteCategory, WasteReport};
