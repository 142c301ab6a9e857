//! Contract IDs: DIN SPEC 91286, eMI3 and ISO 15118-1.
//!
//! All three share the layout country / party / instance / check digit and
//! differ in instance length, an optional marker before the instance and
//! the check digit algorithm (see [`ContractScheme`]).
//!
//! # Example
//!
//! ```
//! use mobilityid::contract::{ContractId, ContractScheme, din_to_emi3};
//!
//! let din = ContractId::parse(ContractScheme::Din, "NL-TNM-012204-5").unwrap();
//! let emi3 = din_to_emi3(&din).unwrap();
//! assert_eq!(emi3.to_string(), "NL-TNM-C00122045-K");
//!
//! let iso = emi3.convert(ContractScheme::Iso).unwrap();
//! assert_eq!(iso.instance(), "C00122045");
//! ```

mod convert;
mod id;
mod parse;
mod scheme;

pub use convert::{din_to_emi3, emi3_to_din, emi3_to_iso, iso_to_emi3};
pub use id::{ContractId, ContractIdBuilder};
pub use parse::ContractIdParts;
pub use scheme::ContractScheme;
