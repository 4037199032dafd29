use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating tracking tokens
    /// Case-insensitive, matching how tokens are looked up
    /// - Valid: "TT-IND-2025-10001", "tt-ind-2025-48291"
    /// - Invalid: "TT-IND-2025-1234", "TT-IND-2024-10001", "TT-IND-2025-10001 "
    pub static ref TOKEN_REGEX: Regex = Regex::new(r"(?i)^TT-IND-2025-\d{5}$").unwrap();
}
