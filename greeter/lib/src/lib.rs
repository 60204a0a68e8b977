//! Localized greetings for the greeter CLI.
//!
//! The library formats a caller-supplied name into one of a fixed set of
//! greeting templates, picking the language at random on every call.
//!
//! ## Modules
//!
//! - [`generator`] - owns the template list and performs the random selection
//! - [`greeter`] - thin entry point that validates and delegates to the generator
//!
//! ## Core Types
//!
//! - [`Language`] - the supported greeting languages, in template order
//! - [`InvalidNameError`] - returned when a name is absent or empty
//!
//! ## Examples
//!
//! ```rust
//! use greeter_lib::greet;
//!
//! let greeting = greet(Some("World")).unwrap();
//! assert!(greeting.ends_with(" World"));
//!
//! assert!(greet(None).is_err());
//! assert!(greet(Some("")).is_err());
//! ```

mod error;
pub mod generator;
pub mod greeter;
mod language;

pub use error::InvalidNameError;
pub use generator::{greet_in, greet_with_rng};
pub use greeter::greet;
pub use language::{Language, PLACEHOLDER, TEMPLATES, templates};
