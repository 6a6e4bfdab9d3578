//! Request-shape validation for contact payloads.
//!
//! The core crate deliberately stores whatever it is given; everything
//! here is the 422 boundary. Constraints: names non-empty and ≤ 255
//! chars, syntactically valid email ≤ 255 chars, phone 7–50 chars of
//! digits, spaces, parentheses, dots, dashes, and an optional leading
//! `+`, notes ≤ 5000 chars.

use std::sync::LazyLock;

use regex::Regex;
use rolodex_core::contact::{ContactPatch, NewContact};

use crate::error::ApiError;

static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\+?[0-9()\-.\s]{7,50}$").expect("valid regex"));

// Intentionally permissive: one `@`, no whitespace, a dotted domain.
// Deliverability is not our problem.
static EMAIL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

const MAX_NAME_CHARS: usize = 255;
const MAX_EMAIL_CHARS: usize = 255;
const MAX_NOTES_CHARS: usize = 5000;

fn check_name(field: &str, value: &str) -> Result<(), ApiError> {
  if value.is_empty() {
    return Err(ApiError::Validation(format!("{field} must not be empty")));
  }
  if value.chars().count() > MAX_NAME_CHARS {
    return Err(ApiError::Validation(format!(
      "{field} must be at most {MAX_NAME_CHARS} characters"
    )));
  }
  Ok(())
}

fn check_email(value: &str) -> Result<(), ApiError> {
  if value.chars().count() > MAX_EMAIL_CHARS {
    return Err(ApiError::Validation(format!(
      "email must be at most {MAX_EMAIL_CHARS} characters"
    )));
  }
  if !EMAIL_PATTERN.is_match(value) {
    return Err(ApiError::Validation(format!("invalid email address: {value}")));
  }
  Ok(())
}

fn check_phone(value: &str) -> Result<(), ApiError> {
  if !PHONE_PATTERN.is_match(value) {
    return Err(ApiError::Validation(
      "phone must be 7-50 characters containing digits, spaces, \
       parentheses, dots, dashes, and an optional leading +"
        .into(),
    ));
  }
  Ok(())
}

fn check_notes(value: &str) -> Result<(), ApiError> {
  if value.chars().count() > MAX_NOTES_CHARS {
    return Err(ApiError::Validation(format!(
      "notes must be at most {MAX_NOTES_CHARS} characters"
    )));
  }
  Ok(())
}

/// Validate a create or full-replace payload.
pub fn validate_new(input: &NewContact) -> Result<(), ApiError> {
  check_name("first_name", &input.first_name)?;
  check_name("last_name", &input.last_name)?;
  check_email(&input.email)?;
  check_phone(&input.phone)?;
  if let Some(notes) = &input.notes {
    check_notes(notes)?;
  }
  Ok(())
}

/// Validate a partial-update payload; only provided fields are checked.
pub fn validate_patch(patch: &ContactPatch) -> Result<(), ApiError> {
  if let Some(first_name) = &patch.first_name {
    check_name("first_name", first_name)?;
  }
  if let Some(last_name) = &patch.last_name {
    check_name("last_name", last_name)?;
  }
  if let Some(email) = &patch.email {
    check_email(email)?;
  }
  if let Some(phone) = &patch.phone {
    check_phone(phone)?;
  }
  if let Some(Some(notes)) = &patch.notes {
    check_notes(notes)?;
  }
  Ok(())
}
