//! Request validation for account payloads.

use crate::error::AppError;
use crate::model::AccountPayload;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub const NAME_MAX: usize = 64;
pub const EMAIL_MAX: usize = 64;
pub const ADDRESS_MAX: usize = 256;
pub const PHONE_MAX: usize = 32;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update body. Column widths match the `accounts` table.
    pub fn validate(body: &AccountPayload) -> Result<(), AppError> {
        if body.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        max_length("name", &body.name, NAME_MAX)?;
        if !EMAIL_PATTERN.is_match(&body.email) {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        max_length("email", &body.email, EMAIL_MAX)?;
        max_length("address", &body.address, ADDRESS_MAX)?;
        if let Some(phone) = &body.phone_number {
            max_length("phone_number", phone, PHONE_MAX)?;
        }
        Ok(())
    }
}

fn max_length(col: &str, s: &str, max: usize) -> Result<(), AppError> {
    if s.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, max
        )));
    }
    Ok(())
}
