//! Field-level checks shared by the resources.
//!
//! Every function is pure. Text checks return the trimmed value so the same
//! normalization is used for storage and for duplicate comparison.

use crate::DomainError;

/// Trims `value`, failing with `"<field> required"` if nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(trimmed.to_string())
}

/// Checks a text field only when the payload carries it.
pub fn optional_required_text(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    match value {
        Some(v) => required_text(field, v).map(|_| ()),
        None => Ok(()),
    }
}

pub fn non_negative(field: &str, value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::non_negative(field));
    }
    Ok(())
}

/// Rejects values below a domain-specific lower bound.
pub fn at_least(field: &str, value: i32, min: i32) -> Result<(), DomainError> {
    if value < min {
        return Err(DomainError::Validation(format!(
            "{field} must be {min} or later"
        )));
    }
    Ok(())
}

pub fn non_negative_amount(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::Validation(format!("{field} must be a number")));
    }
    if value < 0.0 {
        return Err(DomainError::non_negative(field));
    }
    Ok(())
}

/// Case-insensitive equality after trimming, as used for uniqueness keys.
pub fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Trims an optional patch value.
pub fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
