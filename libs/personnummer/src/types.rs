//! The validated personnummer value and its parse pipeline.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::century;
use crate::clock::Clock;
use crate::error::PersonnummerError;
use crate::luhn;
use crate::matcher;
use crate::options::Options;

/// Day offset that marks a coordination number.
pub const COORDINATION_DAY_OFFSET: u32 = 60;

/// Digit substituted for interim letters when computing the checksum.
const INTERIM_CHECKSUM_DIGIT: char = '1';

// =============================================================================
// Input
// =============================================================================

/// Raw input accepted by [`Personnummer::parse`].
///
/// Integers are handled as their decimal representation, so leading zeros
/// are lost and a negative value never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Text(Cow<'a, str>),
    Number(i64),
}

impl Input<'_> {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Input::Text(s) => Cow::Borrowed(s.as_ref()),
            Input::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Input<'static> {
    fn from(s: String) -> Self {
        Input::Text(Cow::Owned(s))
    }
}

impl From<i64> for Input<'static> {
    fn from(n: i64) -> Self {
        Input::Number(n)
    }
}

impl From<u64> for Input<'static> {
    fn from(n: u64) -> Self {
        Input::Text(Cow::Owned(n.to_string()))
    }
}

// =============================================================================
// Personnummer
// =============================================================================

/// A validated Swedish personal identity number.
///
/// Values are only produced by parsing and never change afterwards. Age and
/// separator are computed on demand against the clock the number was parsed
/// with.
#[derive(Clone)]
pub struct Personnummer {
    century: String,
    year: String,
    month: String,
    day: String,
    serial: String,
    control: u8,
    date: NaiveDate,
    coordination: bool,
    clock: Arc<dyn Clock>,
}

impl Personnummer {
    /// Parses and validates `input`.
    pub fn parse<'a>(
        input: impl Into<Input<'a>>,
        options: &Options,
    ) -> Result<Self, PersonnummerError> {
        let input = input.into();
        let text = input.as_text();

        match Self::parse_str(&text, options) {
            Ok(pnr) => {
                trace!(
                    coordination = pnr.coordination,
                    interim = pnr.is_interim_number(),
                    "parsed personnummer"
                );
                Ok(pnr)
            }
            Err(e) => {
                // Never log the input itself.
                debug!(
                    kind = e.kind(),
                    length = matcher::input_length(&text),
                    "rejected personnummer"
                );
                Err(e)
            }
        }
    }

    fn parse_str(input: &str, options: &Options) -> Result<Self, PersonnummerError> {
        let fields = matcher::split(input)?;

        if fields.is_interim() && !options.allow_interim_number() {
            return Err(PersonnummerError::InterimNotAllowed);
        }

        let century = match fields.century {
            Some(c) => c.to_string(),
            None => century::resolve(two_digits(fields.year)?, fields.separator, options.today()),
        };

        let full_year = two_digits(&century)? as i32 * 100 + two_digits(fields.year)? as i32;
        let month = two_digits(fields.month)?;
        let day = two_digits(fields.day)?;

        let (date, coordination) = if day > COORDINATION_DAY_OFFSET {
            if !options.allow_coordination_number() {
                return Err(PersonnummerError::CoordinationNotAllowed);
            }
            let date = NaiveDate::from_ymd_opt(full_year, month, day - COORDINATION_DAY_OFFSET)
                .ok_or(PersonnummerError::InvalidDate)?;
            (date, true)
        } else {
            let date =
                NaiveDate::from_ymd_opt(full_year, month, day).ok_or(PersonnummerError::InvalidDate)?;
            (date, false)
        };

        let payload: String = [fields.year, fields.month, fields.day, fields.serial]
            .concat()
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    c
                } else {
                    INTERIM_CHECKSUM_DIGIT
                }
            })
            .collect();
        let expected = luhn::check_digit(&payload).ok_or(PersonnummerError::StructuralMismatch)?;
        if expected != fields.control {
            return Err(PersonnummerError::ChecksumMismatch {
                expected,
                actual: fields.control,
            });
        }

        Ok(Self {
            century,
            year: fields.year.to_string(),
            month: fields.month.to_string(),
            day: fields.day.to_string(),
            serial: fields.serial.to_string(),
            control: fields.control,
            date,
            coordination,
            clock: options.clock(),
        })
    }

    /// Renders the number.
    ///
    /// `include_century` gives the twelve-digit form, `ignore_separator`
    /// drops the `-`/`+`. Coordination numbers keep their +60 day.
    #[must_use]
    pub fn format(&self, include_century: bool, ignore_separator: bool) -> String {
        let mut out = String::with_capacity(matcher::MAX_LENGTH);
        if include_century {
            out.push_str(&self.century);
        }
        out.push_str(&self.year);
        out.push_str(&self.month);
        out.push_str(&self.day);
        if !ignore_separator {
            out.push(self.separator());
        }
        out.push_str(&self.serial);
        out.push(char::from(b'0' + self.control));
        out
    }

    /// Age in whole years as of the clock's today.
    ///
    /// Negative when the date lies in the future, which can happen for short
    /// numbers whose century was inferred.
    pub fn age(&self) -> i32 {
        let today = self.clock.today();
        let mut years = today.year() - self.date.year();
        if (today.month(), today.day()) < (self.date.month(), self.date.day()) {
            years -= 1;
        }
        years
    }

    /// `+` for people aged 100 or more, `-` otherwise.
    pub fn separator(&self) -> char {
        if self.age() >= 100 {
            '+'
        } else {
            '-'
        }
    }

    /// Date of birth, with the coordination offset removed.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of month with the coordination offset removed.
    pub fn real_day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_coordination_number(&self) -> bool {
        self.coordination
    }

    pub fn is_interim_number(&self) -> bool {
        !self.serial.bytes().all(|b| b.is_ascii_digit())
    }

    /// Odd third serial digit.
    pub fn is_male(&self) -> bool {
        self.gender_digit() % 2 == 1
    }

    pub fn is_female(&self) -> bool {
        !self.is_male()
    }

    pub fn century(&self) -> &str {
        &self.century
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    /// Day as encoded, including the coordination offset.
    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn control(&self) -> u8 {
        self.control
    }

    fn gender_digit(&self) -> u8 {
        // Interim letters only ever occupy the first serial position.
        self.serial
            .bytes()
            .nth(2)
            .filter(u8::is_ascii_digit)
            .map_or(0, |b| b - b'0')
    }
}

fn two_digits(s: &str) -> Result<u32, PersonnummerError> {
    s.parse().map_err(|_| PersonnummerError::StructuralMismatch)
}

impl fmt::Debug for Personnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Personnummer")
            .field("century", &self.century)
            .field("year", &self.year)
            .field("month", &self.month)
            .field("day", &self.day)
            .field("serial", &self.serial)
            .field("control", &self.control)
            .field("date", &self.date)
            .field("coordination", &self.coordination)
            .finish_non_exhaustive()
    }
}

/// Equality ignores the clock.
impl PartialEq for Personnummer {
    fn eq(&self, other: &Self) -> bool {
        self.century == other.century
            && self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.serial == other.serial
            && self.control == other.control
    }
}

impl Eq for Personnummer {}

impl std::hash::Hash for Personnummer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.format(true, true).hash(state);
    }
}

impl fmt::Display for Personnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false, false))
    }
}

impl FromStr for Personnummer {
    type Err = PersonnummerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Options::default())
    }
}

impl TryFrom<i64> for Personnummer {
    type Error = PersonnummerError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::parse(n, &Options::default())
    }
}

impl TryFrom<u64> for Personnummer {
    type Error = PersonnummerError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::parse(n, &Options::default())
    }
}

impl serde::Serialize for Personnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format(true, true))
    }
}

impl<'de> serde::Deserialize<'de> for Personnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let options = Options::default()
            .with_coordination_numbers(true)
            .with_interim_numbers(true);
        Self::parse(s.as_str(), &options).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
