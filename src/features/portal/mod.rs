//! Portal controller: view routing, tracked-report selection and the
//! submission notice for the single-user UI.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/portal` | No | Current view and screen |
//! | POST | `/api/portal/navigate` | No | Apply a navigation action |
//! | PUT | `/api/portal/view` | No | Set the view directly |
//! | POST | `/api/portal/submit` | No | Submit a report and return to landing |
//! | POST | `/api/portal/track` | No | Track a report by token |
//! | POST | `/api/portal/notice/dismiss` | No | Hide the submission notice |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PortalService;
