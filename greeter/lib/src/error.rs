//! Error types for the greeter library.

use thiserror::Error;

/// Raised when a name argument is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument: `{parameter}` must be a non-empty string")]
pub struct InvalidNameError {
    /// Name of the offending parameter.
    pub parameter: &'static str,
}

/// Returns the name when it is present and non-empty.
///
/// ## Errors
///
/// Returns [`InvalidNameError`] naming `parameter` when `name` is `None`
/// or the empty string.
pub(crate) fn require_name<'a>(
    name: Option<&'a str>,
    parameter: &'static str,
) -> Result<&'a str, InvalidNameError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(InvalidNameError { parameter }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_name_passes_through() {
        assert_eq!(require_name(Some("Ada"), "name"), Ok("Ada"));
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(require_name(Some(" "), "name"), Ok(" "));
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = require_name(None, "name").unwrap_err();
        assert_eq!(err.parameter, "name");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = require_name(Some(""), "name").unwrap_err();
        assert_eq!(err, InvalidNameError { parameter: "name" });
    }

    #[test]
    fn message_names_the_parameter() {
        let err = InvalidNameError { parameter: "name" };
        assert_eq!(
            err.to_string(),
            "invalid argument: `name` must be a non-empty string"
        );
    }
}
