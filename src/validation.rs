//! Client-side input validation.
//!
//! Violations are synthesized into the same `ApiError::Validation`
//! shape the server reports, so one rendering branch handles both and
//! locally-rejected input never reaches the network.

use crate::api::{ApiError, ValidationErrors};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;
pub const MIN_REVIEW_TEXT_LENGTH: usize = 50;
pub const MAX_REVIEW_TEXT_LENGTH: usize = 400;

/// Structural email check: non-empty local part, a single `@`, and a
/// dotted domain with a non-empty tail.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

/// Validate login input before the network call.
pub fn validate_login(email: &str) -> Result<(), ApiError> {
    if is_valid_email(email) {
        return Ok(());
    }

    Err(ApiError::Validation(ValidationErrors {
        email_value_error: Some("Please enter a valid email address".to_string()),
        ..ValidationErrors::default()
    }))
}

/// Validate review input before the network call.
///
/// Rating must be a selected value in 1–10 and the comment length must
/// fall in the inclusive 50–400 window.
pub fn validate_review(rating: u8, comment: &str) -> Result<(), ApiError> {
    let mut errors = ValidationErrors::default();

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        errors.rating_value_error =
            Some(format!("The rating must be at least {MIN_RATING} star."));
    }

    let length = comment.chars().count();
    if !(MIN_REVIEW_TEXT_LENGTH..=MAX_REVIEW_TEXT_LENGTH).contains(&length) {
        errors.review_text_value_error = Some(format!(
            "Review text must be at least {MIN_REVIEW_TEXT_LENGTH} and no more than {MAX_REVIEW_TEXT_LENGTH} characters."
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}
