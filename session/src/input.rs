use std::num::NonZeroU32;

use crate::{Result, SessionError};

/// Parses the question count field. Counts that are not positive integers
/// are rejected here and never reach the service.
pub fn parse_question_count(text: &str) -> Result<NonZeroU32> {
    text.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| SessionError::InvalidQuestionCount(text.to_owned()))
}
