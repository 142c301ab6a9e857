use std::fmt;

use thiserror::Error;

use super::format::IdFormat;

/// Errors that can occur while constructing, parsing or converting an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdError {
    /// The input does not match the grammar of the format at all.
    #[error("not a valid {format}: {input}")]
    Format {
        /// Format the input was parsed against.
        format: IdFormat,
        /// The original, unmodified input.
        input: String,
    },

    /// A single field has the wrong length or character class, or the
    /// country code was rejected by the registry.
    #[error("invalid {field} '{value}': {reason}")]
    Field {
        /// The offending field.
        field: Field,
        /// The (normalized) field value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A supplied check digit differs from the recomputed one.
    #[error("provided check digit '{provided}' doesn't match computed one '{computed}'")]
    CheckDigitMismatch { provided: char, computed: char },

    /// The ISO/EMI3 check digit could not be computed.
    #[error("unable to compute check digit: {0}")]
    CheckDigit(#[from] CheckDigitError),

    /// The identifier cannot be expressed in the target format.
    #[error("cannot convert {from} to {to}: {reason}")]
    Conversion {
        from: IdFormat,
        to: IdFormat,
        reason: String,
    },
}

impl IdError {
    pub(crate) fn field(field: Field, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Field {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the input did not match the format's grammar.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdError::Format { .. })
    }

    /// Returns true if a field failed length, charset or registry validation.
    pub fn is_field_error(&self) -> bool {
        matches!(self, IdError::Field { .. })
    }

    /// Returns true for both check digit mismatches and computation failures.
    pub fn is_check_digit_error(&self) -> bool {
        matches!(
            self,
            IdError::CheckDigitMismatch { .. } | IdError::CheckDigit(_)
        )
    }

    /// Returns true if a conversion between formats was refused.
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, IdError::Conversion { .. })
    }
}

/// Input errors of the ISO 15118 / EMI3 check digit algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CheckDigitError {
    /// The code does not have exactly the expected number of bytes.
    #[error("code must have a length of {expected}, got {actual}")]
    Length { expected: usize, actual: usize },

    /// The code contains something other than uppercase ASCII letters and digits.
    #[error("code must consist of uppercase ASCII letters and digits only, found '{0}'")]
    InvalidCharacter(char),

    /// The resulting matrix has no entry in the cipher table.
    #[error("undecodable check matrix")]
    Undecodable,
}

/// Identifier field names, used to report which field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CountryCode,
    PartyCode,
    OperatorCode,
    Instance,
    PowerOutletId,
    CheckDigit,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CountryCode => "country code",
            Field::PartyCode => "party code",
            Field::OperatorCode => "operator code",
            Field::Instance => "instance value",
            Field::PowerOutletId => "power outlet id",
            Field::CheckDigit => "check digit",
        };
        f.write_str(name)
    }
}
