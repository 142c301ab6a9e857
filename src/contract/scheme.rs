use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CheckDigitError, IdFormat, din_check_digit, iso_check_digit};

/// The three contract ID standards.
///
/// | Scheme | Instance | Marker | Check digit |
/// |--------|----------|--------|-------------|
/// | `Din`  | 6        | none   | DIN weighted sum |
/// | `Emi3` | 8        | `C`    | ISO matrix |
/// | `Iso`  | 9        | none   | ISO matrix |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractScheme {
    Din,
    Emi3,
    Iso,
}

impl ContractScheme {
    pub const ALL: [ContractScheme; 3] = [ContractScheme::Din, ContractScheme::Emi3, ContractScheme::Iso];

    pub fn format(self) -> IdFormat {
        match self {
            ContractScheme::Din => IdFormat::DinContract,
            ContractScheme::Emi3 => IdFormat::Emi3Contract,
            ContractScheme::Iso => IdFormat::IsoContract,
        }
    }

    /// Exact length of the instance value.
    pub fn instance_len(self) -> usize {
        match self {
            ContractScheme::Din => 6,
            ContractScheme::Emi3 => 8,
            ContractScheme::Iso => 9,
        }
    }

    /// Literal written immediately before the instance value.
    pub fn marker(self) -> Option<char> {
        match self {
            ContractScheme::Emi3 => Some('C'),
            ContractScheme::Din | ContractScheme::Iso => None,
        }
    }

    /// Compute the check digit for already validated, upper-cased fields.
    pub fn compute_check_digit(
        self,
        country_code: &str,
        party_code: &str,
        instance: &str,
    ) -> Result<char, CheckDigitError> {
        let mut code = String::with_capacity(16);
        code.push_str(country_code);
        code.push_str(party_code);
        if let Some(marker) = self.marker() {
            code.push(marker);
        }
        code.push_str(instance);

        match self {
            ContractScheme::Din => Ok(din_check_digit(&code)),
            ContractScheme::Emi3 | ContractScheme::Iso => iso_check_digit(&code),
        }
    }
}

impl fmt::Display for ContractScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContractScheme::Din => "DIN",
            ContractScheme::Emi3 => "EMI3",
            ContractScheme::Iso => "ISO",
        })
    }
}
