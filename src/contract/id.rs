use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scheme::ContractScheme;
use crate::core::validation;
use crate::core::{CountryRegistry, Field, IdError, IdFormat, Iso3166};

/// A validated contract identifier.
///
/// Fields are upper-cased and immutable. The check digit is always present:
/// when it is not supplied it is computed, when it is supplied it has been
/// verified.
///
/// ```
/// use mobilityid::contract::{ContractId, ContractScheme};
///
/// let id = ContractId::parse(ContractScheme::Emi3, "nl-tnm-c00122045-k").unwrap();
/// assert_eq!(id.to_string(), "NL-TNM-C00122045-K");
/// assert_eq!(id.compact_string(), "NLTNMC00122045K");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContractId")]
pub struct ContractId {
    scheme: ContractScheme,
    country_code: String,
    party_code: String,
    instance: String,
    check_digit: char,
}

impl ContractId {
    /// Build an identifier from its parts, computing the check digit.
    pub fn new(
        scheme: ContractScheme,
        country_code: &str,
        party_code: &str,
        instance: &str,
    ) -> Result<Self, IdError> {
        ContractIdBuilder::new(scheme, country_code, party_code, instance).build()
    }

    /// Build an identifier from its parts, verifying the supplied check digit.
    pub fn with_check_digit(
        scheme: ContractScheme,
        country_code: &str,
        party_code: &str,
        instance: &str,
        check_digit: char,
    ) -> Result<Self, IdError> {
        ContractIdBuilder::new(scheme, country_code, party_code, instance)
            .check_digit(check_digit)
            .build()
    }

    /// Validate the instance value and settle the check digit.
    ///
    /// Country and party code must already be normalized and validated.
    pub(crate) fn assemble(
        scheme: ContractScheme,
        country_code: String,
        party_code: String,
        instance: String,
        check_digit: Option<char>,
    ) -> Result<Self, IdError> {
        validation::exact_alphanumeric(Field::Instance, &instance, scheme.instance_len())?;

        let computed = scheme.compute_check_digit(&country_code, &party_code, &instance)?;
        if let Some(provided) = check_digit.map(|c| c.to_ascii_uppercase()) {
            if provided != computed {
                debug!(
                    format = %scheme.format(),
                    %provided,
                    %computed,
                    "rejected contract ID: check digit mismatch"
                );
                return Err(IdError::CheckDigitMismatch { provided, computed });
            }
        }

        Ok(Self {
            scheme,
            country_code,
            party_code,
            instance,
            check_digit: computed,
        })
    }

    pub fn scheme(&self) -> ContractScheme {
        self.scheme
    }

    pub fn format(&self) -> IdFormat {
        self.scheme.format()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn party_code(&self) -> &str {
        &self.party_code
    }

    /// Instance value, without the scheme's marker character.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Country and party code joined by `-`, e.g. `NL-TNM`.
    pub fn party_id(&self) -> String {
        format!("{}-{}", self.country_code, self.party_code)
    }

    /// Country and party code without separator, e.g. `NLTNM`.
    pub fn compact_party_id(&self) -> String {
        format!("{}{}", self.country_code, self.party_code)
    }

    /// Canonical form without separators.
    pub fn compact_string(&self) -> String {
        let mut out = self.compact_string_no_check_digit();
        out.push(self.check_digit);
        out
    }

    /// Canonical form without separators and without the trailing check digit.
    pub fn compact_string_no_check_digit(&self) -> String {
        let mut out = self.compact_party_id();
        if let Some(marker) = self.scheme.marker() {
            out.push(marker);
        }
        out.push_str(&self.instance);
        out
    }
}

/// Canonical form, e.g. `NL-TNM-C00122045-K`.
impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-", self.country_code, self.party_code)?;
        if let Some(marker) = self.scheme.marker() {
            write!(f, "{marker}")?;
        }
        write!(f, "{}-{}", self.instance, self.check_digit)
    }
}

/// Builder for contract IDs.
///
/// Use it to supply a check digit or a custom [`CountryRegistry`]:
///
/// ```
/// use mobilityid::contract::{ContractIdBuilder, ContractScheme};
///
/// let benelux = |code: &str| matches!(code, "BE" | "NL" | "LU");
/// let id = ContractIdBuilder::new(ContractScheme::Din, "NL", "TNM", "012204")
///     .check_digit('5')
///     .registry(&benelux)
///     .build()
///     .unwrap();
/// assert_eq!(id.to_string(), "NL-TNM-012204-5");
/// ```
pub struct ContractIdBuilder<'r> {
    scheme: ContractScheme,
    country_code: String,
    party_code: String,
    instance: String,
    check_digit: Option<char>,
    registry: &'r dyn CountryRegistry,
}

impl ContractIdBuilder<'static> {
    pub fn new(
        scheme: ContractScheme,
        country_code: impl Into<String>,
        party_code: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            country_code: country_code.into(),
            party_code: party_code.into(),
            instance: instance.into(),
            check_digit: None,
            registry: &Iso3166,
        }
    }
}

impl<'r> ContractIdBuilder<'r> {
    /// Require this check digit instead of accepting the computed one.
    pub fn check_digit(mut self, check_digit: char) -> Self {
        self.check_digit = Some(check_digit);
        self
    }

    /// Same as [`check_digit`](Self::check_digit), but `None` leaves it to be computed.
    pub fn maybe_check_digit(mut self, check_digit: Option<char>) -> Self {
        self.check_digit = check_digit;
        self
    }

    /// Validate country codes against `registry` instead of [`Iso3166`].
    pub fn registry<'a>(self, registry: &'a dyn CountryRegistry) -> ContractIdBuilder<'a> {
        ContractIdBuilder {
            scheme: self.scheme,
            country_code: self.country_code,
            party_code: self.party_code,
            instance: self.instance,
            check_digit: self.check_digit,
            registry,
        }
    }

    pub fn build(self) -> Result<ContractId, IdError> {
        let country_code = self.country_code.to_ascii_uppercase();
        let party_code = self.party_code.to_ascii_uppercase();
        let instance = self.instance.to_ascii_uppercase();

        validation::alpha2_country_code(&country_code, self.registry)?;
        validation::exact_alphanumeric(Field::PartyCode, &party_code, 3)?;

        ContractId::assemble(
            self.scheme,
            country_code,
            party_code,
            instance,
            self.check_digit,
        )
    }
}

/// Unvalidated mirror of [`ContractId`] used for deserialization.
#[derive(Deserialize)]
struct RawContractId {
    scheme: ContractScheme,
    country_code: String,
    party_code: String,
    instance: String,
    check_digit: Option<char>,
}

impl TryFrom<RawContractId> for ContractId {
    type Error = IdError;

    fn try_from(raw: RawContractId) -> Result<Self, Self::Error> {
        ContractIdBuilder::new(raw.scheme, raw.country_code, raw.party_code, raw.instance)
            .maybe_check_digit(raw.check_digit)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn din() -> ContractId {
        ContractId::with_check_digit(ContractScheme::Din, "IN", "TNM", "000071", '9').unwrap()
    }

    fn emi3() -> ContractId {
        ContractId::with_check_digit(ContractScheme::Emi3, "NL", "TNM", "00122045", 'K').unwrap()
    }

    fn iso() -> ContractId {
        ContractId::with_check_digit(ContractScheme::Iso, "NL", "TNM", "001234567", 'X').unwrap()
    }

    #[test]
    fn din_renderings() {
        let id = din();
        assert_eq!(id.to_string(), "IN-TNM-000071-9");
        assert_eq!(id.compact_string(), "INTNM0000719");
        assert_eq!(id.compact_string_no_check_digit(), "INTNM000071");
    }

    #[test]
    fn emi3_renderings_include_marker() {
        let id = emi3();
        assert_eq!(id.to_string(), "NL-TNM-C00122045-K");
        assert_eq!(id.compact_string(), "NLTNMC00122045K");
        assert_eq!(id.compact_string_no_check_digit(), "NLTNMC00122045");
        assert_eq!(id.instance(), "00122045");
    }

    #[test]
    fn iso_renderings() {
        let id = iso();
        assert_eq!(id.to_string(), "NL-TNM-001234567-X");
        assert_eq!(id.compact_string(), "NLTNM001234567X");
        assert_eq!(id.compact_string_no_check_digit(), "NLTNM001234567");
    }

    #[test]
    fn party_ids() {
        let id = emi3();
        assert_eq!(id.party_id(), "NL-TNM");
        assert_eq!(id.compact_party_id(), "NLTNM");
    }

    #[test]
    fn check_digit_computed_when_absent() {
        let id = ContractId::new(ContractScheme::Emi3, "NL", "TNM", "00122045").unwrap();
        assert_eq!(id.check_digit(), 'K');
        assert_eq!(id, emi3());
    }

    #[test]
    fn zero_is_a_real_check_digit() {
        let id = ContractId::new(ContractScheme::Iso, "DE", "8AA", "001234567").unwrap();
        assert_eq!(id.check_digit(), '0');
        assert_eq!(id.to_string(), "DE-8AA-001234567-0");
    }

    #[test]
    fn input_is_upper_cased() {
        let id = ContractId::with_check_digit(ContractScheme::Emi3, "nl", "tnm", "00122045", 'k')
            .unwrap();
        assert_eq!(id, emi3());
    }

    #[test]
    fn invalid_fields() {
        let cases = [
            ("ZZ", "TNM", "00122045", Field::CountryCode),
            ("XYZ", "TNM", "00122045", Field::CountryCode),
            ("NL", "TNMA", "00122045", Field::PartyCode),
            ("NL", "TNM", "C001234567890", Field::Instance),
            ("NL", "TNM", "0012204", Field::Instance),
            ("NL", "TNM", "0012204*", Field::Instance),
        ];
        for (country, party, instance, expected) in cases {
            match ContractId::new(ContractScheme::Emi3, country, party, instance) {
                Err(IdError::Field { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} error, got {other:?}"),
            }
        }
    }

    #[test]
    fn mismatching_check_digit() {
        let err = ContractId::with_check_digit(ContractScheme::Emi3, "NL", "TNM", "00122045", 'A')
            .unwrap_err();
        assert_eq!(
            err,
            IdError::CheckDigitMismatch {
                provided: 'A',
                computed: 'K'
            }
        );
    }

    #[test]
    fn custom_registry() {
        let nowhere = |_: &str| false;
        let err = ContractIdBuilder::new(ContractScheme::Din, "IN", "TNM", "000071")
            .registry(&nowhere)
            .build()
            .unwrap_err();
        assert!(err.is_field_error());
    }

    #[test]
    fn serde_roundtrip() {
        let id = emi3();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            r#"{"scheme":"emi3","country_code":"NL","party_code":"TNM","instance":"00122045","check_digit":"K"}"#
        );
        let back: ContractId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"scheme":"emi3","country_code":"NL","party_code":"TNM","instance":"00122045","check_digit":"A"}"#;
        assert!(serde_json::from_str::<ContractId>(json).is_err());

        let without_check = r#"{"scheme":"din","country_code":"IN","party_code":"TNM","instance":"000071"}"#;
        let id: ContractId = serde_json::from_str(without_check).unwrap();
        assert_eq!(id.check_digit(), '9');
    }
}
