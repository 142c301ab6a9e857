//! EVSE IDs: DIN SPEC 91286 and ISO 15118-1.
//!
//! # Example
//!
//! ```
//! use mobilityid::evse::{EvseId, EvseScheme};
//!
//! let din = EvseId::parse(EvseScheme::Din, "49*810*000*438").unwrap();
//! assert_eq!(din.to_string(), "+49*810*000*438");
//!
//! let iso = EvseId::parse(EvseScheme::Iso, "DEAB7E8406487").unwrap();
//! assert_eq!(iso.power_outlet_id(), "8406487");
//! ```

mod id;
mod parse;
mod scheme;

pub use id::{EvseId, EvseIdBuilder};
pub use scheme::EvseScheme;
