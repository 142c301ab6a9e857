//! Conversions between the contract ID schemes.
//!
//! ```text
//!   DIN  <-->  EMI3  <-->  ISO
//! ```
//!
//! A DIN instance and check digit fit into an EMI3 instance behind a
//! leading `0`; an EMI3 instance becomes an ISO instance by keeping its `C`
//! marker. DIN and ISO are only connected through EMI3.

use tracing::debug;

use super::id::ContractId;
use super::scheme::ContractScheme;
use crate::core::IdError;

fn refuse(from: ContractScheme, to: ContractScheme, reason: impl Into<String>) -> IdError {
    let reason = reason.into();
    debug!(from = %from.format(), to = %to.format(), %reason, "refused contract ID conversion");
    IdError::Conversion {
        from: from.format(),
        to: to.format(),
        reason,
    }
}

fn expect_scheme(id: &ContractId, from: ContractScheme, to: ContractScheme) -> Result<(), IdError> {
    if id.scheme() == from {
        Ok(())
    } else {
        Err(refuse(
            id.scheme(),
            to,
            format!("expected a {from} contract ID"),
        ))
    }
}

/// DIN → EMI3: the EMI3 instance is `0` + DIN instance + DIN check digit.
///
/// The EMI3 check digit is computed afresh.
pub fn din_to_emi3(id: &ContractId) -> Result<ContractId, IdError> {
    expect_scheme(id, ContractScheme::Din, ContractScheme::Emi3)?;

    ContractId::assemble(
        ContractScheme::Emi3,
        id.country_code().to_owned(),
        id.party_code().to_owned(),
        format!("0{}{}", id.instance(), id.check_digit()),
        None,
    )
}

/// EMI3 → DIN, possible only for EMI3 instances with a leading `0`.
///
/// The remaining seven characters are the DIN instance followed by the DIN
/// check digit, which must be correct.
pub fn emi3_to_din(id: &ContractId) -> Result<ContractId, IdError> {
    expect_scheme(id, ContractScheme::Emi3, ContractScheme::Din)?;

    let Some(rest) = id.instance().strip_prefix('0') else {
        return Err(refuse(
            ContractScheme::Emi3,
            ContractScheme::Din,
            "instance value is too long",
        ));
    };
    let (instance, check) = rest.split_at(ContractScheme::Din.instance_len());

    ContractId::assemble(
        ContractScheme::Din,
        id.country_code().to_owned(),
        id.party_code().to_owned(),
        instance.to_owned(),
        check.chars().next(),
    )
}

/// EMI3 → ISO: the ISO instance is `C` + EMI3 instance, check digit unchanged.
pub fn emi3_to_iso(id: &ContractId) -> Result<ContractId, IdError> {
    expect_scheme(id, ContractScheme::Emi3, ContractScheme::Iso)?;

    ContractId::assemble(
        ContractScheme::Iso,
        id.country_code().to_owned(),
        id.party_code().to_owned(),
        format!("C{}", id.instance()),
        Some(id.check_digit()),
    )
}

/// ISO → EMI3, possible only for ISO instances starting with `C`.
pub fn iso_to_emi3(id: &ContractId) -> Result<ContractId, IdError> {
    expect_scheme(id, ContractScheme::Iso, ContractScheme::Emi3)?;

    let Some(instance) = id.instance().strip_prefix('C') else {
        return Err(refuse(
            ContractScheme::Iso,
            ContractScheme::Emi3,
            "instance value doesn't start with 'C'",
        ));
    };

    ContractId::assemble(
        ContractScheme::Emi3,
        id.country_code().to_owned(),
        id.party_code().to_owned(),
        instance.to_owned(),
        Some(id.check_digit()),
    )
}

impl ContractId {
    /// Convert into `target`, routing DIN ↔ ISO through EMI3.
    pub fn convert(&self, target: ContractScheme) -> Result<ContractId, IdError> {
        use ContractScheme::*;

        match (self.scheme(), target) {
            (Din, Din) | (Emi3, Emi3) | (Iso, Iso) => Ok(self.clone()),
            (Din, Emi3) => din_to_emi3(self),
            (Emi3, Din) => emi3_to_din(self),
            (Emi3, Iso) => emi3_to_iso(self),
            (Iso, Emi3) => iso_to_emi3(self),
            (Din, Iso) => emi3_to_iso(&din_to_emi3(self)?),
            (Iso, Din) => emi3_to_din(&iso_to_emi3(self)?),
        }
    }
}
