//! Number formatting for the display and the history log.

/// Decimal exponents at or past these bounds switch to `1.5e+21` notation
const EXPONENT_ABOVE: i32 = 21;
const EXPONENT_BELOW: i32 = -7;

/// Format a value the way the display shows it.
///
/// Whole numbers drop the fractional part (`8`, not `8.0`), other finite
/// values use the shortest decimal that round-trips. Very large or very
/// small magnitudes use exponent notation with an explicit sign
/// (`2.9512665430652752e+94`, `1e-7`). Non-finite values are spelled out
/// so they can be shown as computed results. Every output parses back with
/// `str::parse::<f64>`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    // -0 reads as 0
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent >= EXPONENT_ABOVE || exponent <= EXPONENT_BELOW {
        let sign = if exponent >= 0 { "+" } else { "" };
        return format!("{}e{}{}", mantissa, sign, exponent);
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_fractions_round_trip() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 4.0), "0.25");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_large_values_use_exponent() {
        assert_eq!(format_number(9f64.powf(99.0)), "2.9512665430652752e+94");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_tiny_values_use_exponent() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-10), "-2.5e-10");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_output_parses_back() {
        for value in [9f64.powf(99.0), 1e-7, 0.1 + 0.2, -42.0, f64::INFINITY] {
            let parsed: f64 = format_number(value).parse().unwrap();
            assert_eq!(parsed, value);
        }
        assert!(format_number(f64::NAN).parse::<f64>().unwrap().is_nan());
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
