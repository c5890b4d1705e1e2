//! Century inference for century-less input.

use chrono::{Datelike, NaiveDate};

/// Resolves the two century digits for a number written without them.
///
/// The birth year is taken to be the latest year not after `today` that ends
/// in `year`. A `+` separator marks someone who has turned 100 and pushes the
/// guess back one more century.
///
/// Only the current year is consulted, so a given short number resolves
/// differently once the calendar has moved on by enough years.
pub(crate) fn resolve(year: u32, separator: Option<char>, today: NaiveDate) -> String {
    let current = today.year();
    let mut full = current - (current - year as i32).rem_euclid(100);
    if separator == Some('+') {
        full -= 100;
    }
    format!("{:02}", full.div_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn test_previous_century() {
        assert_eq!(resolve(93, None, jan_first(2025)), "19");
        assert_eq!(resolve(93, Some('-'), jan_first(2025)), "19");
    }

    #[test]
    fn test_current_century() {
        assert_eq!(resolve(0, None, jan_first(2025)), "20");
        assert_eq!(resolve(24, None, jan_first(2025)), "20");
    }

    #[test]
    fn test_same_two_digits_as_current_year() {
        assert_eq!(resolve(25, None, jan_first(2025)), "20");
    }

    #[test]
    fn test_plus_separator_goes_back_a_century() {
        assert_eq!(resolve(13, Some('+'), jan_first(2025)), "19");
        assert_eq!(resolve(93, Some('+'), jan_first(2025)), "18");
    }

    #[test]
    fn test_guess_moves_with_the_calendar() {
        assert_eq!(resolve(30, None, jan_first(2025)), "19");
        assert_eq!(resolve(30, None, jan_first(2031)), "20");
    }
}
