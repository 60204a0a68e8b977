//! Public greeting entry point.

use crate::error::{InvalidNameError, require_name};
use crate::generator;

/// Greets `name` in a randomly chosen language.
///
/// The name is checked here before delegating, even though the generator
/// checks it again.
///
/// ## Errors
///
/// Returns [`InvalidNameError`] when `name` is `None` or empty.
///
/// ## Examples
///
/// ```rust
/// use greeter_lib::greet;
///
/// let err = greet(None).unwrap_err();
/// assert_eq!(err.parameter, "name");
/// ```
#[tracing::instrument(level = "debug")]
pub fn greet(name: Option<&str>) -> Result<String, InvalidNameError> {
    let name = require_name(name, "name")?;
    generator::greet(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;
    use strum::IntoEnumIterator;

    #[test]
    fn delegates_to_generator() {
        let greeting = greet(Some("World")).unwrap();
        assert!(Language::iter().any(|l| l.greet("World") == greeting));
    }

    #[test]
    fn rejects_none() {
        assert_eq!(greet(None), Err(InvalidNameError { parameter: "name" }));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(greet(Some("")), Err(InvalidNameError { parameter: "name" }));
    }
}
