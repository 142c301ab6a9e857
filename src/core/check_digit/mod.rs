//! Check digit algorithms.
//!
//! DIN SPEC 91286 contract IDs use a weighted positional checksum
//! ([`din_check_digit`]); ISO 15118-1 and eMI3 contract IDs share a
//! matrix-based checksum over 14 characters ([`iso_check_digit`]).

mod din;
mod iso;

pub use din::din_check_digit;
pub use iso::{ISO_CODE_LEN, iso_check_digit};
