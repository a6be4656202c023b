//! Input validation for psst operations.
//!
//! Secret names become the last segment of a storage path, so they must not
//! be able to escape the recipient's prefix.

use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Secret names:
/// - Cannot be empty
/// - Only a-z, A-Z, 0-9, `-`, `_` and `.`
/// - Cannot be `.` or `..`
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name == "." || name == ".." {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "reserved path segment".to_string(),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.') {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, '-', '_' and '.' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a secret value. Values cannot be empty.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }

    Ok(())
}
