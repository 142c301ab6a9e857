use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::id::{EvseId, EvseIdBuilder};
use super::scheme::EvseScheme;
use crate::core::grammar::{COUNTRY_CODE, PARTY_CODE, compile, upper_group};
use crate::core::{CountryRegistry, IdError, Iso3166};

// DIN separators are mandatory.
static DIN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<country>\+?[0-9]{1,3})\*(?P<operator>[0-9]{3,6})\*(?P<outlet>[0-9*]{1,32})$")
});

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^(?P<country>{COUNTRY_CODE})\*?(?P<operator>{PARTY_CODE})\*?[Ee](?P<outlet>[A-Za-z0-9*]{{1,31}})$"
    ))
});

fn grammar(scheme: EvseScheme) -> &'static Regex {
    match scheme {
        EvseScheme::Din => &DIN,
        EvseScheme::Iso => &ISO,
    }
}

impl EvseId {
    /// Parse `input` as an EVSE ID of the given scheme.
    ///
    /// ISO field separators are optional; DIN ones are not. A DIN country
    /// code without `+` is normalized to carry one.
    pub fn parse(scheme: EvseScheme, input: &str) -> Result<Self, IdError> {
        Self::parse_with(scheme, input, &Iso3166)
    }

    /// Like [`parse`](Self::parse), validating ISO country codes against `registry`.
    pub fn parse_with(
        scheme: EvseScheme,
        input: &str,
        registry: &dyn CountryRegistry,
    ) -> Result<Self, IdError> {
        let not_matching = || {
            debug!(format = %scheme.format(), input, "rejected EVSE ID: grammar mismatch");
            IdError::Format {
                format: scheme.format(),
                input: input.to_owned(),
            }
        };

        let caps = grammar(scheme).captures(input).ok_or_else(not_matching)?;
        let country_code = upper_group(&caps, "country").ok_or_else(not_matching)?;
        let operator_code = upper_group(&caps, "operator").ok_or_else(not_matching)?;
        let power_outlet_id = upper_group(&caps, "outlet").ok_or_else(not_matching)?;

        EvseIdBuilder::new(scheme, country_code, operator_code, power_outlet_id)
            .registry(registry)
            .build()
    }
}
