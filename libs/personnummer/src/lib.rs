//! # personnummer
//!
//! Validation, parsing, and formatting of Swedish personal identity numbers.
//!
//! ## Accepted Layouts
//!
//! - `YYMMDDXXXC` and `YYMMDD-XXXC` (century inferred from today)
//! - `YYYYMMDDXXXC` and `YYYYMMDD-XXXC`
//! - `+` instead of `-` marks someone aged 100 or more
//!
//! Integers are treated like their decimal string.
//!
//! ## Variants
//!
//! - Coordination numbers store the day of birth plus 60 (accepted by default)
//! - Interim numbers put one of `TRSUWXJKLMN` in the first serial position
//!   (rejected unless enabled)
//!
//! ## Example
//!
//! ```
//! use personnummer::{FixedClock, Options, Personnummer};
//!
//! let opts = Options::default().with_clock(FixedClock::from_ymd(2025, 1, 1).unwrap());
//! let pnr = Personnummer::parse("19900101-0017", &opts)?;
//!
//! assert_eq!(pnr.format(false, false), "900101-0017");
//! assert_eq!(pnr.age(), 35);
//! assert!(pnr.is_male());
//! # Ok::<(), personnummer::PersonnummerError>(())
//! ```

mod century;
mod clock;
mod error;
pub mod luhn;
mod matcher;
mod options;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::PersonnummerError;
pub use matcher::{INTERIM_LETTERS, MAX_LENGTH, MIN_LENGTH};
pub use options::Options;
pub use types::*;

/// Parses and validates `input`.
pub fn parse<'a>(
    input: impl Into<Input<'a>>,
    options: &Options,
) -> Result<Personnummer, PersonnummerError> {
    Personnummer::parse(input, options)
}

/// Returns true if `input` parses under `options`.
pub fn is_valid<'a>(input: impl Into<Input<'a>>, options: &Options) -> bool {
    Personnummer::parse(input, options).is_ok()
}

/// Returns true if `input` is valid and already written in the canonical
/// form selected by `include_century` and `ignore_separator`.
pub fn is_valid_format(
    input: &str,
    include_century: bool,
    ignore_separator: bool,
    options: &Options,
) -> bool {
    Personnummer::parse(input, options)
        .map(|pnr| pnr.format(include_century, ignore_separator) == input)
        .unwrap_or(false)
}
