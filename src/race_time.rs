//! Race time formatting

/// Normalize a string-encoded race time to two decimal places.
///
/// Parses `time` as a decimal number and renders it with exactly two digits
/// after the decimal point. Strings that do not parse as a finite number
/// (`"DNF"`, `""`) are returned verbatim; display code shows whatever the
/// backend sent rather than erroring.
///
/// Rounding follows the standard formatter: the exact binary value is
/// rounded to the nearest representable two-decimal string, ties to even.
/// `"12.345"` therefore renders as `"12.35"`, since its nearest `f64` lies
/// just above the midpoint.
///
/// # Example
///
/// ```rust
/// use flightline::race_time::format_race_time;
///
/// assert_eq!(format_race_time("12.3"), "12.30");
/// assert_eq!(format_race_time("DNF"), "DNF");
/// ```
pub fn format_race_time(time: &str) -> String {
    match time.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => format!("{seconds:.2}"),
        _ => time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pads_short_fractions() {
        assert_eq!(format_race_time("12.3"), "12.30");
        assert_eq!(format_race_time("7"), "7.00");
        assert_eq!(format_race_time("0"), "0.00");
    }

    #[test]
    fn truncates_long_fractions_with_formatter_rounding() {
        assert_eq!(format_race_time("14.828"), "14.83");
        // 12.345 as f64 is just above the midpoint
        assert_eq!(format_race_time("12.345"), "12.35");
    }

    #[test]
    fn non_numeric_input_passes_through_verbatim() {
        assert_eq!(format_race_time("DNF"), "DNF");
        assert_eq!(format_race_time(""), "");
        assert_eq!(format_race_time("--"), "--");
    }

    #[test]
    fn non_finite_values_pass_through_verbatim() {
        assert_eq!(format_race_time("NaN"), "NaN");
        assert_eq!(format_race_time("inf"), "inf");
    }

    proptest! {
        #[test]
        fn prop_numeric_input_always_gets_two_decimals(seconds in 0.0f64..10_000.0) {
            let formatted = format_race_time(&seconds.to_string());
            let (_, fraction) = formatted.split_once('.').expect("decimal point present");
            prop_assert_eq!(fraction.len(), 2);
        }

        #[test]
        fn prop_non_numeric_input_is_unchanged(input in "[a-zA-Z ]*") {
            prop_assert_eq!(format_race_time(&input), input);
        }
    }
}
