//! Format-independent building blocks: errors, the country registry and
//! both check digit algorithms.

mod check_digit;
pub mod countries;
mod error;
mod format;
#[cfg_attr(not(any(feature = "contract", feature = "evse")), allow(dead_code))]
pub(crate) mod grammar;
#[cfg_attr(not(any(feature = "contract", feature = "evse")), allow(dead_code))]
pub(crate) mod validation;

pub use check_digit::*;
pub use countries::{CountryRegistry, Iso3166, is_known_country_code};
pub use error::*;
pub use format::IdFormat;
