mod report_service;
mod report_store;
mod token_generator;

pub use report_service::ReportService;
pub use report_store::ReportStore;
#[cfg(test)]
pub use token_generator::{format_token, TokenGenerator};
