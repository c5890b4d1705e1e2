//! Time sources for century inference and age.

use std::fmt;

use chrono::NaiveDate;

/// Source of "today".
///
/// Century inference, age and the `+`/`-` separator all depend on the current
/// date. Every read goes through this trait so results stay reproducible.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a clock pinned to the given year, month and day.
    ///
    /// Returns `None` if the triple is not a calendar date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
