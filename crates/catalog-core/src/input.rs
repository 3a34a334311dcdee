//! Small helpers for the loosely-typed inputs that arrive through paths and
//! partial-update bodies.

use anyhow::anyhow;

use crate::errors::AppError;

/// `true` when the string is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Drops blank optional values so partial updates treat `""` as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

/// Fails with a validation error naming `field` when `value` is blank.
pub fn require_non_blank<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    if is_blank(value) {
        return Err(AppError::validation(anyhow!("{} is required", field)));
    }
    Ok(value)
}

/// Parses the `true`/`false` literal carried in status-toggle paths.
///
/// Matching is case-insensitive and surrounding whitespace is ignored. Any
/// other literal is rejected rather than silently read as `false`.
pub fn parse_status_flag(raw: &str) -> Result<bool, AppError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(AppError::validation(anyhow!(
            "Invalid status value '{}', expected true or false",
            raw
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_parse_status_flag_accepts_any_case() {
        assert!(parse_status_flag("true").unwrap());
        assert!(parse_status_flag("TRUE").unwrap());
        assert!(!parse_status_flag("False").unwrap());
        assert!(!parse_status_flag(" false ").unwrap());
    }

    #[test]
    fn test_parse_status_flag_rejects_other_literals() {
        for raw in ["", "1", "yes", "truthy"] {
            let err = parse_status_flag(raw).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "literal {raw:?}");
        }
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("AZ".to_string())), Some("AZ".to_string()));
    }

    #[test]
    fn test_require_non_blank_names_the_field() {
        let err = require_non_blank(" \t", "username").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message(), "username is required");
        assert_eq!(require_non_blank("admin", "username").unwrap(), "admin");
    }
}
