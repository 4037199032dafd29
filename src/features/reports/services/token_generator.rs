use rand::Rng;

use crate::shared::constants::{TOKEN_NUMBER_MAX, TOKEN_NUMBER_MIN, TOKEN_PREFIX};

/// Source of human-facing tracking tokens
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws the numeric suffix uniformly from [10000, 99999].
///
/// Tokens are not checked against existing reports, so two reports can end
/// up sharing one.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let number = rand::thread_rng().gen_range(TOKEN_NUMBER_MIN..=TOKEN_NUMBER_MAX);
        format_token(number)
    }
}

/// Format a numeric suffix as a tracking token, e.g. `TT-IND-2025-48291`
pub fn format_token(number: u32) -> String {
    format!("{}{}", TOKEN_PREFIX, number)
}
