//! Lexical matcher: length gate and field split.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PersonnummerError;

/// Shortest accepted input, `YYMMDDXXXC`.
pub const MIN_LENGTH: usize = 10;

/// Longest accepted input, `CCYYMMDD-XXXC`.
pub const MAX_LENGTH: usize = 13;

/// Letters that may stand in for the first serial digit of an interim number.
pub const INTERIM_LETTERS: &str = "TRSUWXJKLMN";

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<century>[0-9]{2})?(?P<year>[0-9]{2})(?P<month>[0-9]{2})(?P<day>[0-9]{2})(?P<separator>[+-])?(?P<serial>[0-9]{3}|[TRSUWXJKLMN][0-9]{2})(?P<control>[0-9])$",
    )
    .expect("personnummer pattern compiles")
});

/// Raw fields of a structurally valid input, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    pub century: Option<&'a str>,
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub separator: Option<char>,
    pub serial: &'a str,
    pub control: u8,
}

impl Fields<'_> {
    /// True if the serial carries an interim placeholder letter.
    pub fn is_interim(&self) -> bool {
        !self.serial.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Length of `input` in characters, as reported by the length errors.
pub(crate) fn input_length(input: &str) -> usize {
    input.chars().count()
}

/// Splits `input` into its fields.
///
/// Length is checked first so that too-short and too-long inputs get their
/// own error instead of a generic mismatch.
pub(crate) fn split(input: &str) -> Result<Fields<'_>, PersonnummerError> {
    let length = input_length(input);
    if length < MIN_LENGTH {
        return Err(PersonnummerError::TooShort { length });
    }
    if length > MAX_LENGTH {
        return Err(PersonnummerError::TooLong { length });
    }

    let caps = PATTERN
        .captures(input)
        .ok_or(PersonnummerError::StructuralMismatch)?;

    // All named groups except century and separator are mandatory, so a
    // successful match always has them.
    let group = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str())
            .ok_or(PersonnummerError::StructuralMismatch)
    };

    let serial = group("serial")?;
    if serial == "000" {
        return Err(PersonnummerError::StructuralMismatch);
    }

    let control = group("control")?
        .bytes()
        .next()
        .map(|b| b - b'0')
        .ok_or(PersonnummerError::StructuralMismatch)?;

    Ok(Fields {
        century: caps.name("century").map(|m| m.as_str()),
        year: group("year")?,
        month: group("month")?,
        day: group("day")?,
        separator: caps.name("separator").and_then(|m| m.as_str().chars().next()),
        serial,
        control,
    })
}
