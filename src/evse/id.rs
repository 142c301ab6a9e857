use std::fmt;

use serde::{Deserialize, Serialize};

use super::scheme::EvseScheme;
use crate::core::validation;
use crate::core::{CountryRegistry, Field, IdError, IdFormat, Iso3166};

/// A validated EVSE (charge point) identifier.
///
/// ```
/// use mobilityid::evse::{EvseId, EvseScheme};
///
/// let id = EvseId::new(EvseScheme::Iso, "DE", "AB7", "840*6487").unwrap();
/// assert_eq!(id.to_string(), "DE*AB7*E840*6487");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEvseId")]
pub struct EvseId {
    scheme: EvseScheme,
    country_code: String,
    operator_code: String,
    power_outlet_id: String,
}

impl EvseId {
    pub fn new(
        scheme: EvseScheme,
        country_code: &str,
        operator_code: &str,
        power_outlet_id: &str,
    ) -> Result<Self, IdError> {
        EvseIdBuilder::new(scheme, country_code, operator_code, power_outlet_id).build()
    }

    pub fn scheme(&self) -> EvseScheme {
        self.scheme
    }

    pub fn format(&self) -> IdFormat {
        self.scheme.format()
    }

    /// Alpha-2 code for ISO, `+`-prefixed dialing code for DIN.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn operator_code(&self) -> &str {
        &self.operator_code
    }

    /// Power outlet ID, without the scheme's marker character.
    pub fn power_outlet_id(&self) -> &str {
        &self.power_outlet_id
    }

    pub fn party_id(&self) -> String {
        format!("{}-{}", self.country_code, self.operator_code)
    }

    pub fn compact_party_id(&self) -> String {
        format!("{}{}", self.country_code, self.operator_code)
    }

    /// Canonical form with every `*` removed, including those inside the outlet ID.
    pub fn compact_string(&self) -> String {
        self.to_string().replace('*', "")
    }
}

/// Canonical form: fields joined by `*`, e.g. `DE*AB7*E840*6487`.
impl fmt::Display for EvseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}*", self.country_code, self.operator_code)?;
        if let Some(marker) = self.scheme.marker() {
            write!(f, "{marker}")?;
        }
        f.write_str(&self.power_outlet_id)
    }
}

/// Builder for EVSE IDs, mainly to supply a custom [`CountryRegistry`].
///
/// The registry only applies to ISO IDs; DIN country codes are dialing codes.
pub struct EvseIdBuilder<'r> {
    scheme: EvseScheme,
    country_code: String,
    operator_code: String,
    power_outlet_id: String,
    registry: &'r dyn CountryRegistry,
}

impl EvseIdBuilder<'static> {
    pub fn new(
        scheme: EvseScheme,
        country_code: impl Into<String>,
        operator_code: impl Into<String>,
        power_outlet_id: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            country_code: country_code.into(),
            operator_code: operator_code.into(),
            power_outlet_id: power_outlet_id.into(),
            registry: &Iso3166,
        }
    }
}

impl<'r> EvseIdBuilder<'r> {
    pub fn registry<'a>(self, registry: &'a dyn CountryRegistry) -> EvseIdBuilder<'a> {
        EvseIdBuilder {
            scheme: self.scheme,
            country_code: self.country_code,
            operator_code: self.operator_code,
            power_outlet_id: self.power_outlet_id,
            registry,
        }
    }

    pub fn build(self) -> Result<EvseId, IdError> {
        let scheme = self.scheme;
        let operator_code = self.operator_code.to_ascii_uppercase();
        let power_outlet_id = self.power_outlet_id.to_ascii_uppercase();

        let country_code = match scheme {
            EvseScheme::Din => validation::dialing_country_code(&self.country_code)?,
            EvseScheme::Iso => {
                let code = self.country_code.to_ascii_uppercase();
                validation::alpha2_country_code(&code, self.registry)?;
                code
            }
        };

        match scheme {
            EvseScheme::Din => validation::bounded(
                Field::OperatorCode,
                &operator_code,
                scheme.operator_len(),
                |b| b.is_ascii_digit(),
                "digits",
            )?,
            EvseScheme::Iso => validation::exact_alphanumeric(Field::OperatorCode, &operator_code, 3)?,
        }

        validation::bounded(
            Field::PowerOutletId,
            &power_outlet_id,
            scheme.power_outlet_len(),
            |b| scheme.is_outlet_byte(b),
            match scheme {
                EvseScheme::Din => "digits and '*'",
                EvseScheme::Iso => "ASCII letters, digits and '*'",
            },
        )?;

        Ok(EvseId {
            scheme,
            country_code,
            operator_code,
            power_outlet_id,
        })
    }
}

#[derive(Deserialize)]
struct RawEvseId {
    scheme: EvseScheme,
    country_code: String,
    operator_code: String,
    power_outlet_id: String,
}

impl TryFrom<RawEvseId> for EvseId {
    type Error = IdError;

    fn try_from(raw: RawEvseId) -> Result<Self, Self::Error> {
        EvseIdBuilder::new(
            raw.scheme,
            raw.country_code,
            raw.operator_code,
            raw.power_outlet_id,
        )
        .build()
    }
}
