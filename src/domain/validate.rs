//! Field validation shared by the catalog entities.

use crate::error::NextCurlError;

/// Trims `value` and checks it is non-empty and at most `max_chars` long.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] naming `field` when the check
/// fails.
pub fn required_text(field: &str, value: &str, max_chars: usize) -> Result<String, NextCurlError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NextCurlError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    if trimmed.chars().count() > max_chars {
        return Err(NextCurlError::InvalidRequest(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`] for optional patch fields.
///
/// # Errors
///
/// Returns [`NextCurlError::InvalidRequest`] when a present value fails
/// validation.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max_chars: usize,
) -> Result<Option<String>, NextCurlError> {
    value
        .map(|v| required_text(field, v, max_chars))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        assert!(required_text("t", "ééé", 3).is_ok());
        assert!(required_text("t", "éééé", 3).is_err());
    }

    #[test]
    fn error_names_the_field() {
        let Err(err) = required_text("student", " ", 10) else {
            unreachable!("blank value must fail");
        };
        assert!(err.to_string().contains("student"));
    }

    #[test]
    fn optional_none_passes_through() {
        assert!(matches!(optional_text("t", None, 1), Ok(None)));
    }
}
