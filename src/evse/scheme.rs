use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::IdFormat;

/// The two EVSE ID standards.
///
/// DIN IDs use a telephone country code and numeric operator and outlet
/// fields; ISO IDs use an alpha-2 country code and put an `E` marker before
/// the outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvseScheme {
    Din,
    Iso,
}

impl EvseScheme {
    pub const ALL: [EvseScheme; 2] = [EvseScheme::Din, EvseScheme::Iso];

    pub fn format(self) -> IdFormat {
        match self {
            EvseScheme::Din => IdFormat::DinEvse,
            EvseScheme::Iso => IdFormat::IsoEvse,
        }
    }

    /// Literal written immediately before the power outlet ID.
    pub fn marker(self) -> Option<char> {
        match self {
            EvseScheme::Din => None,
            EvseScheme::Iso => Some('E'),
        }
    }

    pub fn operator_len(self) -> RangeInclusive<usize> {
        match self {
            EvseScheme::Din => 3..=6,
            EvseScheme::Iso => 3..=3,
        }
    }

    pub fn power_outlet_len(self) -> RangeInclusive<usize> {
        match self {
            EvseScheme::Din => 1..=32,
            EvseScheme::Iso => 1..=31,
        }
    }

    /// Whether `b` may appear in a power outlet ID. `*` is allowed in both schemes.
    pub(crate) fn is_outlet_byte(self, b: u8) -> bool {
        match self {
            EvseScheme::Din => b.is_ascii_digit() || b == b'*',
            EvseScheme::Iso => b.is_ascii_alphanumeric() || b == b'*',
        }
    }
}

impl fmt::Display for EvseScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvseScheme::Din => "DIN",
            EvseScheme::Iso => "ISO",
        })
    }
}
