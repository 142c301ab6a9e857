use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::id::{ContractId, ContractIdBuilder};
use super::scheme::ContractScheme;
use crate::core::grammar::{CHECK_DIGIT, COUNTRY_CODE, PARTY_CODE, compile, upper_group};
use crate::core::{CountryRegistry, IdError, Iso3166};

// DIN accepts `-` or `*` between fields, EMI3 and ISO only `-`.
static DIN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^(?P<country>{COUNTRY_CODE})[*-]?(?P<party>{PARTY_CODE})[*-]?(?P<instance>[A-Za-z0-9]{{6}})(?:[*-]?(?P<check>{CHECK_DIGIT}))?$"
    ))
});

static EMI3: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^(?P<country>{COUNTRY_CODE})-?(?P<party>{PARTY_CODE})-?[Cc](?P<instance>[A-Za-z0-9]{{8}})(?:-?(?P<check>{CHECK_DIGIT}))?$"
    ))
});

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^(?P<country>{COUNTRY_CODE})-?(?P<party>{PARTY_CODE})-?(?P<instance>[A-Za-z0-9]{{9}})(?:-?(?P<check>{CHECK_DIGIT}))?$"
    ))
});

fn grammar(scheme: ContractScheme) -> &'static Regex {
    match scheme {
        ContractScheme::Din => &DIN,
        ContractScheme::Emi3 => &EMI3,
        ContractScheme::Iso => &ISO,
    }
}

/// The raw, upper-cased fields of a contract ID string, before any
/// field or check digit validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractIdParts {
    pub scheme: ContractScheme,
    pub country_code: String,
    pub party_code: String,
    /// Instance value without the marker character.
    pub instance: String,
    /// `None` when the input carried no check digit.
    pub check_digit: Option<char>,
}

impl ContractIdParts {
    /// Match `input` against the grammar of `scheme`.
    pub fn split(scheme: ContractScheme, input: &str) -> Result<Self, IdError> {
        let not_matching = || {
            debug!(format = %scheme.format(), input, "rejected contract ID: grammar mismatch");
            IdError::Format {
                format: scheme.format(),
                input: input.to_owned(),
            }
        };

        let caps = grammar(scheme).captures(input).ok_or_else(not_matching)?;
        let country_code = upper_group(&caps, "country").ok_or_else(not_matching)?;
        let party_code = upper_group(&caps, "party").ok_or_else(not_matching)?;
        let instance = upper_group(&caps, "instance").ok_or_else(not_matching)?;
        let check_digit = upper_group(&caps, "check").and_then(|c| c.chars().next());

        Ok(Self {
            scheme,
            country_code,
            party_code,
            instance,
            check_digit,
        })
    }

    /// Validate the parts into a [`ContractId`].
    pub fn validate(self, registry: &dyn CountryRegistry) -> Result<ContractId, IdError> {
        ContractIdBuilder::new(self.scheme, self.country_code, self.party_code, self.instance)
            .maybe_check_digit(self.check_digit)
            .registry(registry)
            .build()
    }
}

impl ContractId {
    /// Parse `input` as a contract ID of the given scheme.
    ///
    /// Field separators are optional and case is ignored. A check digit
    /// present in the input is verified, an absent one is computed.
    pub fn parse(scheme: ContractScheme, input: &str) -> Result<Self, IdError> {
        Self::parse_with(scheme, input, &Iso3166)
    }

    /// Like [`parse`](Self::parse), validating the country code against `registry`.
    pub fn parse_with(
        scheme: ContractScheme,
        input: &str,
        registry: &dyn CountryRegistry,
    ) -> Result<Self, IdError> {
        ContractIdParts::split(scheme, input)?.validate(registry)
    }
}
