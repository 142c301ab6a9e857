//! Field-level validation shared by all identifier formats.
//!
//! Every function takes an already upper-cased value and reports the first
//! rule it violates.

use std::ops::RangeInclusive;

use tracing::debug;

use super::countries::CountryRegistry;
use super::error::{Field, IdError};

fn reject(field: Field, value: &str, reason: String) -> IdError {
    debug!(%field, value, %reason, "rejected identifier field");
    IdError::field(field, value, reason)
}

/// Two ASCII letters, known to `registry`.
pub(crate) fn alpha2_country_code(
    code: &str,
    registry: &dyn CountryRegistry,
) -> Result<(), IdError> {
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(reject(
            Field::CountryCode,
            code,
            "expected 2 ASCII letters".into(),
        ));
    }
    if !registry.is_valid_country_code(code) {
        return Err(reject(
            Field::CountryCode,
            code,
            "not a known country code".into(),
        ));
    }
    Ok(())
}

/// A telephone country code: optional leading `+` followed by 1 to 3 digits.
///
/// Returns the code normalized with a leading `+`.
pub(crate) fn dialing_country_code(code: &str) -> Result<String, IdError> {
    let digits = code.strip_prefix('+').unwrap_or(code);
    if !(1..=3).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject(
            Field::CountryCode,
            code,
            "expected an optional '+' followed by 1 to 3 digits".into(),
        ));
    }
    Ok(format!("+{digits}"))
}

/// Exactly `len` ASCII letters or digits.
pub(crate) fn exact_alphanumeric(field: Field, value: &str, len: usize) -> Result<(), IdError> {
    if value.len() != len {
        return Err(reject(
            field,
            value,
            format!("expected length {len}, got {}", value.len()),
        ));
    }
    if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(reject(
            field,
            value,
            "expected ASCII letters and digits only".into(),
        ));
    }
    Ok(())
}

/// A length within `len` where every character satisfies `allowed`.
pub(crate) fn bounded(
    field: Field,
    value: &str,
    len: RangeInclusive<usize>,
    allowed: impl Fn(u8) -> bool,
    charset: &str,
) -> Result<(), IdError> {
    if !len.contains(&value.len()) {
        return Err(reject(
            field,
            value,
            format!(
                "expected length {} to {}, got {}",
                len.start(),
                len.end(),
                value.len()
            ),
        ));
    }
    if !value.bytes().all(allowed) {
        return Err(reject(field, value, format!("expected {charset} only")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countries::Iso3166;

    #[test]
    fn alpha2_country_code_rules() {
        assert!(alpha2_country_code("NL", &Iso3166).is_ok());
        assert!(alpha2_country_code("ZZ", &Iso3166).is_err());
        assert!(alpha2_country_code("XYZ", &Iso3166).is_err());
        assert!(alpha2_country_code("1A", &Iso3166).is_err());
    }

    #[test]
    fn registry_is_consulted() {
        let everything = |_: &str| true;
        assert!(alpha2_country_code("ZZ", &everything).is_ok());
    }

    #[test]
    fn dialing_country_code_normalizes() {
        assert_eq!(dialing_country_code("49").unwrap(), "+49");
        assert_eq!(dialing_country_code("+49").unwrap(), "+49");
        assert_eq!(dialing_country_code("+1").unwrap(), "+1");
        assert!(dialing_country_code("+").is_err());
        assert!(dialing_country_code("+12345").is_err());
        assert!(dialing_country_code("AA").is_err());
        assert!(dialing_country_code("++49").is_err());
    }

    #[test]
    fn exact_alphanumeric_rules() {
        assert!(exact_alphanumeric(Field::PartyCode, "TNM", 3).is_ok());
        let err = exact_alphanumeric(Field::PartyCode, "TNMA", 3).unwrap_err();
        assert!(err.is_field_error());
        assert!(exact_alphanumeric(Field::PartyCode, "T-M", 3).is_err());
    }

    #[test]
    fn bounded_rules() {
        let digits_or_star = |b: u8| b.is_ascii_digit() || b == b'*';
        assert!(bounded(Field::PowerOutletId, "000*438", 1..=32, digits_or_star, "digits").is_ok());
        assert!(bounded(Field::PowerOutletId, "", 1..=32, digits_or_star, "digits").is_err());
        assert!(bounded(Field::PowerOutletId, "00A", 1..=32, digits_or_star, "digits").is_err());
    }
}
