use crate::shared::errors::{AppError, AppResult};

pub struct Validator;

impl Validator {
    /// Trim `value` and check its length (in characters) against `min..=max`.
    ///
    /// Returns the trimmed text so callers normalize exactly once.
    pub fn bounded_text(label: &str, value: &str, min: usize, max: usize) -> AppResult<String> {
        let trimmed = value.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                label
            )));
        }
        if length < min {
            return Err(AppError::ValidationError(format!(
                "{} must be at least {} characters long",
                label, min
            )));
        }
        if length > max {
            return Err(AppError::ValidationError(format!(
                "{} cannot exceed {} characters",
                label, max
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Reject empty or whitespace-only input; the value itself is left as given
    pub fn require_non_blank(label: &str, value: &str) -> AppResult<()> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                label
            )));
        }
        Ok(())
    }
}
