//! Error types for personnummer parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating a personnummer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonnummerError {
    /// The input is shorter than the century-less short form.
    #[error("input too short: {length} characters, expected at least 10")]
    TooShort { length: usize },

    /// The input is longer than the long separated form.
    #[error("input too long: {length} characters, expected at most 13")]
    TooLong { length: usize },

    /// The input does not match the `[CC]YYMMDD[+-]XXXC` layout.
    #[error("input does not match the personnummer layout")]
    StructuralMismatch,

    /// The serial holds an interim letter but interim numbers are disabled.
    #[error("interim numbers are not allowed")]
    InterimNotAllowed,

    /// Neither the day nor the coordination-adjusted day is a calendar date.
    #[error("invalid date")]
    InvalidDate,

    /// The day is coordination-encoded but coordination numbers are disabled.
    #[error("coordination numbers are not allowed")]
    CoordinationNotAllowed,

    /// The control digit does not match the Luhn check digit.
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl PersonnummerError {
    /// Returns true if the input was rejected on length alone.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            PersonnummerError::TooShort { .. } | PersonnummerError::TooLong { .. }
        )
    }

    /// Returns true if the date portion was rejected.
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            PersonnummerError::InvalidDate | PersonnummerError::CoordinationNotAllowed
        )
    }

    /// Short stable name for the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PersonnummerError::TooShort { .. } => "too_short",
            PersonnummerError::TooLong { .. } => "too_long",
            PersonnummerError::StructuralMismatch => "structural_mismatch",
            PersonnummerError::InterimNotAllowed => "interim_not_allowed",
            PersonnummerError::InvalidDate => "invalid_date",
            PersonnummerError::CoordinationNotAllowed => "coordination_not_allowed",
            PersonnummerError::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}
