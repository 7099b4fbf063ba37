//! String utilities for the domain layer.

use super::error::DomainError;

/// Trim a user-entered field and reject it when nothing is left.
///
/// `field` names the offending input in the returned error.
pub fn normalize_field(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation { field });
    }
    Ok(trimmed.to_string())
}
