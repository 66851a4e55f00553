//! Result formatting for the numeric display

/// Significant digits shown for non-integral results
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Integral values below this magnitude are printed in full
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Formats a result value for display.
///
/// Integral values print as plain integers; everything else uses general
/// notation with [`SIGNIFICANT_DIGITS`] significant digits, trailing zeros
/// trimmed, switching to exponent form for very small or very large values.
///
/// ```
/// use sci_calc::core::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.5e20), "1.5e+20");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        return format!("{value:.0}");
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// `%g`-style formatting with `precision` significant digits
fn format_general(value: f64, precision: usize) -> String {
    let scientific = format!("{:.*e}", precision.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_result(42.0), "42");
        assert_eq!(format_result(-42.0), "-42");
    }

    #[test]
    fn test_format_zero_has_no_sign() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_result(3.14), "3.14");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-0.75), "-0.75");
    }

    #[test]
    fn test_format_twelve_significant_digits() {
        assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666666666667");
        assert_eq!(format_result(std::f64::consts::PI), "3.14159265359");
    }

    #[test]
    fn test_format_hides_float_noise() {
        assert_eq!(format_result(0.49999999999999994), "0.5");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_small_values_use_exponent() {
        assert_eq!(format_result(0.0001), "0.0001");
        assert_eq!(format_result(0.00001), "1e-05");
        assert_eq!(format_result(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_format_large_integer() {
        assert_eq!(format_result(1e14), "100000000000000");
    }

    #[test]
    fn test_format_very_large_uses_exponent() {
        assert_eq!(format_result(1e15), "1e+15");
        assert_eq!(format_result(1.5e20), "1.5e+20");
        assert_eq!(format_result(6.02214076e23), "6.02214076e+23");
    }

    #[test]
    fn test_format_large_non_integral() {
        assert_eq!(format_result(12345.678), "12345.678");
        assert_eq!(format_result(1234567.891234567), "1234567.89123");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.500"), "1.5");
        assert_eq!(trim_fraction("2.000"), "2");
        assert_eq!(trim_fraction("100"), "100");
    }
}
