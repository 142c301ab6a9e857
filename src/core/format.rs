use std::fmt;

use serde::{Deserialize, Serialize};

/// The five supported identifier formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFormat {
    /// DIN SPEC 91286 contract ID, e.g. `DE-8AA-123456-7`.
    DinContract,
    /// eMI3 contract ID, e.g. `NL-TNM-C00122045-K`.
    Emi3Contract,
    /// ISO 15118-1 contract ID, e.g. `NL-TNM-001234567-X`.
    IsoContract,
    /// DIN SPEC 91286 EVSE ID, e.g. `+49*810*000*438`.
    DinEvse,
    /// ISO 15118-1 EVSE ID, e.g. `DE*AB7*E840*6487`.
    IsoEvse,
}

impl IdFormat {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            IdFormat::DinContract => "DIN contract ID",
            IdFormat::Emi3Contract => "EMI3 contract ID",
            IdFormat::IsoContract => "ISO contract ID",
            IdFormat::DinEvse => "DIN EVSE ID",
            IdFormat::IsoEvse => "ISO EVSE ID",
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
