//! Waste reports: submission, token tracking and the status lifecycle.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/reports` | No | List reports, newest first |
//! | POST | `/api/reports` | No | Submit a report |
//! | GET | `/api/reports/{id}` | No | Get a report by id |
//! | GET | `/api/reports/track/{token}` | No | Track a report by token |
//! | PATCH | `/api/reports/{id}/status` | No | Update status, returns all reports |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::{ReportService, ReportStore};
