//! Random greeting selection.
//!
//! The generator owns the selection step: it validates the name, draws a
//! [`Language`] uniformly over [`TEMPLATES`](crate::TEMPLATES) and formats
//! the name into the chosen template.
//!
//! ## Examples
//!
//! ```rust
//! use greeter_lib::{generator, Language};
//! use strum::IntoEnumIterator;
//!
//! let greeting = generator::greet(Some("World")).unwrap();
//! assert!(Language::iter().any(|l| l.greet("World") == greeting));
//! ```

use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

use crate::error::{InvalidNameError, require_name};
use crate::language::Language;

/// Greets `name` in a randomly chosen language.
///
/// Uses the calling thread's random generator, so concurrent callers never
/// share a random source.
///
/// ## Errors
///
/// Returns [`InvalidNameError`] when `name` is `None` or empty.
#[tracing::instrument(level = "debug")]
pub fn greet(name: Option<&str>) -> Result<String, InvalidNameError> {
    greet_with_rng(name, &mut rand::thread_rng())
}

/// Greets `name` in a language drawn from `rng`.
///
/// ## Errors
///
/// Returns [`InvalidNameError`] when `name` is `None` or empty. The random
/// source is left untouched in that case.
///
/// ## Examples
///
/// ```rust
/// use greeter_lib::greet_with_rng;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let greeting = greet_with_rng(Some("World"), &mut rng).unwrap();
/// assert!(greeting.contains("World"));
/// ```
pub fn greet_with_rng<R: Rng + ?Sized>(
    name: Option<&str>,
    rng: &mut R,
) -> Result<String, InvalidNameError> {
    let name = require_name(name, "name")?;
    let index = rng.gen_range(0..Language::COUNT);
    // index < COUNT
    let language = Language::iter().nth(index).unwrap_or(Language::English);
    debug!(%language, "selected greeting template");

    Ok(language.greet(name))
}

/// Greets `name` in the given language.
///
/// ## Errors
///
/// Returns [`InvalidNameError`] when `name` is `None` or empty.
pub fn greet_in(name: Option<&str>, language: Language) -> Result<String, InvalidNameError> {
    let name = require_name(name, "name")?;
    Ok(language.greet(name))
}
