/// Fixed prefix of every tracking token.
///
/// The year is part of the prefix and is not derived from the clock.
pub const TOKEN_PREFIX: &str = "TT-IND-2025-";

/// Smallest numeric suffix a tracking token can carry
pub const TOKEN_NUMBER_MIN: u32 = 10_000;

/// Largest numeric suffix a tracking token can carry
pub const TOKEN_NUMBER_MAX: u32 = 99_999;

/// Message surfaced when a token lookup misses
pub const TOKEN_NOT_FOUND_MESSAGE: &str = "Token not found! Please check the number and try again.";

/// Message rendered in place of the tracking page when nothing is selected
pub const NO_REPORT_SELECTED_MESSAGE: &str = "Error: No report selected";
