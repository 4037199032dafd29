pub mod portal_handler;

pub use portal_handler::*;
