//! # mobilityid
//!
//! Parsing, validation, construction and conversion of e-mobility
//! identifiers: contract IDs (DIN SPEC 91286, eMI3, ISO 15118-1) and EVSE
//! IDs (DIN SPEC 91286, ISO 15118-1).
//!
//! Every identifier is an immutable value. Constructors and parsers either
//! return a fully validated identifier or an [`IdError`]; nothing here does
//! I/O or holds mutable state.
//!
//! ## Quick Start
//!
//! ```rust
//! use mobilityid::contract::{ContractId, ContractScheme};
//! use mobilityid::evse::{EvseId, EvseScheme};
//!
//! let contract = ContractId::parse(ContractScheme::Emi3, "NL-TNM-C00122045-K").unwrap();
//! assert_eq!(contract.party_id(), "NL-TNM");
//! assert_eq!(contract.check_digit(), 'K');
//!
//! let din = contract.convert(ContractScheme::Din).unwrap();
//! assert_eq!(din.to_string(), "NL-TNM-012204-5");
//!
//! let evse = EvseId::new(EvseScheme::Iso, "DE", "AB7", "840*6487").unwrap();
//! assert_eq!(evse.to_string(), "DE*AB7*E840*6487");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `contract` (default) | DIN / EMI3 / ISO contract IDs and conversions |
//! | `evse` (default) | DIN / ISO EVSE IDs |
//! | `all` | Everything |
//!
//! Check digit algorithms, errors and the country registry are always available.

pub mod core;

#[cfg(feature = "contract")]
pub mod contract;

#[cfg(feature = "evse")]
pub mod evse;

// Re-export core types at crate root for convenience
pub use crate::core::*;

#[cfg(feature = "contract")]
pub use crate::contract::{ContractId, ContractScheme};

#[cfg(feature = "evse")]
pub use crate::evse::{EvseId, EvseScheme};
