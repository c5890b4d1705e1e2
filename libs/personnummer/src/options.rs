//! Parse options.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};

/// Options controlling which number variants are accepted.
///
/// Coordination numbers are accepted by default, interim numbers are not.
#[derive(Debug, Clone)]
pub struct Options {
    allow_coordination_number: bool,
    allow_interim_number: bool,
    clock: Arc<dyn Clock>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_coordination_number: true,
            allow_interim_number: false,
            clock: Arc::new(SystemClock),
        }
    }
}

impl Options {
    /// Default options backed by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject coordination numbers (day + 60).
    #[must_use]
    pub fn with_coordination_numbers(mut self, allow: bool) -> Self {
        self.allow_coordination_number = allow;
        self
    }

    /// Accept or reject interim numbers (letter in the serial).
    #[must_use]
    pub fn with_interim_numbers(mut self, allow: bool) -> Self {
        self.allow_interim_number = allow;
        self
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn allow_coordination_number(&self) -> bool {
        self.allow_coordination_number
    }

    pub fn allow_interim_number(&self) -> bool {
        self.allow_interim_number
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
