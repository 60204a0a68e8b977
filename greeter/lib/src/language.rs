//! Supported greeting languages and their templates.

use strum::EnumCount;

/// Placeholder substituted with the recipient's name.
pub const PLACEHOLDER: &str = "{0}";

/// Greeting templates, indexed by [`Language`] discriminant.
pub const TEMPLATES: [&str; Language::COUNT] = [
    "Olá {0}",
    "Hola {0}",
    "Hello {0}",
    "Hallo {0}",
    "Ciao {0}",
    "Bonjour {0}",
    "Namaste {0}",
];

/// A language with a greeting template.
///
/// Variant order matches [`TEMPLATES`]; `Language::iter()` walks them in
/// that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumCount, strum::EnumIter,
)]
pub enum Language {
    Portuguese,
    Spanish,
    English,
    German,
    Italian,
    French,
    Hindi,
}

impl Language {
    /// The raw template for this language.
    pub fn template(self) -> &'static str {
        TEMPLATES[self as usize]
    }

    /// Formats `name` into this language's template.
    ///
    /// No validation is performed; see [`crate::greet_in`] for the
    /// checked variant.
    pub fn greet(self, name: &str) -> String {
        self.template().replacen(PLACEHOLDER, name, 1)
    }
}

/// The greeting templates, in [`Language`] order.
pub fn templates() -> &'static [&'static str] {
    &TEMPLATES
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_template_has_exactly_one_placeholder() {
        for template in TEMPLATES {
            assert_eq!(template.matches(PLACEHOLDER).count(), 1, "{template}");
        }
    }

    #[test]
    fn iteration_is_in_template_order() {
        for (index, language) in Language::iter().enumerate() {
            assert_eq!(language as usize, index);
            assert_eq!(language.template(), templates()[index]);
        }
        assert_eq!(Language::iter().count(), templates().len());
    }

    #[test]
    fn templates_map_to_languages() {
        assert_eq!(Language::Portuguese.template(), "Olá {0}");
        assert_eq!(Language::English.template(), "Hello {0}");
        assert_eq!(Language::Hindi.template(), "Namaste {0}");
    }

    #[test]
    fn greet_substitutes_name() {
        assert_eq!(Language::German.greet("World"), "Hallo World");
        assert_eq!(Language::French.greet("Zoë"), "Bonjour Zoë");
    }

    #[test]
    fn name_containing_placeholder_is_kept_verbatim() {
        assert_eq!(Language::Italian.greet("{0}"), "Ciao {0}");
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(Language::Spanish.to_string(), "Spanish");
    }
}
