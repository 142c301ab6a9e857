//! Building blocks shared by the identifier grammars.

use regex::{Captures, Regex};

/// Two-letter ISO 3166-1 alpha-2 country code.
pub(crate) const COUNTRY_CODE: &str = "[A-Za-z]{2}";

/// Three-character party / operator code.
pub(crate) const PARTY_CODE: &str = "[A-Za-z0-9]{3}";

/// Single check digit character.
pub(crate) const CHECK_DIGIT: &str = "[A-Za-z0-9]";

/// Compile one of the crate's built-in grammars.
///
/// Patterns are fixed at compile time, so a failure here is a bug in this
/// crate rather than a runtime condition.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid identifier grammar {pattern}: {e}"))
}

/// Extract a named group and upper-case it. `None` if the group did not participate.
pub(crate) fn upper_group(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_ascii_uppercase())
}
