//! Property tests for parsing, formatting and the checksum.

use personnummer::{luhn, FixedClock, Options, Personnummer};
use proptest::prelude::*;

fn opts() -> Options {
    Options::default().with_clock(FixedClock::from_ymd(2025, 1, 1).unwrap())
}

/// Builds a long separated number with a correct control digit.
fn build(year: i32, month: u32, day: u32, serial: u32) -> String {
    let payload = format!("{:02}{:02}{:02}{:03}", year % 100, month, day, serial);
    let control = luhn::check_digit(&payload).unwrap();
    format!("{:02}{}-{:03}{}", year / 100, &payload[..6], serial, control)
}

const ALL_LAYOUTS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

proptest! {
    /// Within the last 99 years every layout reparses to the same number.
    #[test]
    fn reparse_after_format_is_stable(
        year in 1926i32..=2024,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 1u32..=999,
        coordination in any::<bool>(),
    ) {
        let day = if coordination { day + 60 } else { day };
        let input = build(year, month, day, serial);
        let pnr = Personnummer::parse(input.as_str(), &opts()).unwrap();

        for (century, no_sep) in ALL_LAYOUTS {
            let text = pnr.format(century, no_sep);
            let again = Personnummer::parse(text.as_str(), &opts()).unwrap();
            prop_assert_eq!(&again, &pnr, "{}", text);
        }
    }

    /// Centenarians survive every layout that keeps either century or `+`.
    #[test]
    fn reparse_centenarian_keeps_century(
        year in 1900i32..=1924,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 1u32..=999,
    ) {
        let input = build(year, month, day, serial);
        let pnr = Personnummer::parse(input.as_str(), &opts()).unwrap();
        prop_assert_eq!(pnr.separator(), '+');

        for (century, no_sep) in [(false, false), (true, false), (true, true)] {
            let text = pnr.format(century, no_sep);
            let again = Personnummer::parse(text.as_str(), &opts()).unwrap();
            prop_assert_eq!(&again, &pnr, "{}", text);
        }
    }

    #[test]
    fn is_valid_agrees_with_parse(input in "[0-9TX+-]{8,14}") {
        let o = opts().with_interim_numbers(true);
        prop_assert_eq!(
            personnummer::is_valid(input.as_str(), &o),
            Personnummer::parse(input.as_str(), &o).is_ok()
        );
    }

    #[test]
    fn check_digit_is_a_digit(payload in "[0-9]{1,24}") {
        let first = luhn::check_digit(&payload).unwrap();
        prop_assert!(first <= 9);
        prop_assert_eq!(luhn::check_digit(&payload), Some(first));
    }

    /// Appending the check digit makes the whole string sum to zero mod 10.
    #[test]
    fn check_digit_closes_the_sum(payload in "[0-9]{1,24}") {
        let control = luhn::check_digit(&payload).unwrap();
        let full = format!("{payload}{control}");
        let sum: u32 = full
            .bytes()
            .rev()
            .enumerate()
            .map(|(i, b)| {
                let d = u32::from(b - b'0');
                match (i % 2, d * 2) {
                    (1, doubled) if doubled > 9 => doubled - 9,
                    (1, doubled) => doubled,
                    _ => d,
                }
            })
            .sum();
        prop_assert_eq!(sum % 10, 0);
    }

    #[test]
    fn coordination_day_maps_back(
        year in 1900i32..=2024,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 1u32..=999,
    ) {
        let input = build(year, month, day + 60, serial);
        let pnr = Personnummer::parse(input.as_str(), &opts()).unwrap();
        prop_assert!(pnr.is_coordination_number());
        prop_assert_eq!(pnr.real_day(), day);
        prop_assert_eq!(pnr.day(), format!("{:02}", day + 60));

        let strict = opts().with_coordination_numbers(false);
        prop_assert!(Personnummer::parse(input.as_str(), &strict).is_err());
    }

    #[test]
    fn wrong_control_digit_is_rejected(
        year in 1900i32..=2024,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 1u32..=999,
        offset in 1u8..=9,
    ) {
        let input = build(year, month, day, serial);
        let (head, control) = input.split_at(input.len() - 1);
        let control: u8 = control.parse().unwrap();
        let wrong = format!("{head}{}", (control + offset) % 10);
        prop_assert!(!personnummer::is_valid(wrong.as_str(), &opts()));
    }
}
