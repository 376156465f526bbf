//! Display formatting for conversion results

/// Render a value for display at the given decimal precision.
///
/// Zero renders as `"0"` exactly. Magnitudes at or above 1e6, or below
/// 1e-3, switch to exponential notation with `precision - 1` mantissa
/// digits. Everything else is rounded to `precision` decimals and
/// stripped of trailing zeros.
pub fn format_number(value: f64, precision: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e6 || abs < 0.001 {
        return format!("{:.*e}", precision.saturating_sub(1) as usize, value);
    }

    let fixed = format!("{:.*}", precision as usize, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    // Rounding can leave "-0"; normalize it
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_exact() {
        assert_eq!(format_number(0.0, 6), "0");
        assert_eq!(format_number(-0.0, 6), "0");
    }

    #[test]
    fn test_large_values_use_exponential() {
        let s = format_number(1_234_567.0, 6);
        assert!(s.contains('e'), "expected exponential, got {}", s);
        assert_eq!(s, "1.23457e6");
    }

    #[test]
    fn test_small_values_use_exponential() {
        let s = format_number(0.0001, 6);
        assert!(s.contains('e'), "expected exponential, got {}", s);
    }

    #[test]
    fn test_boundary_stays_plain() {
        assert_eq!(format_number(0.01, 6), "0.01");
        assert_eq!(format_number(0.001, 6), "0.001");
        assert!(!format_number(999_999.0, 6).contains('e'));
    }

    #[test]
    fn test_strips_trailing_zeros() {
        assert_eq!(format_number(1000.0, 6), "1000");
        assert_eq!(format_number(2.5, 6), "2.5");
        assert_eq!(format_number(1.0 / 3.0, 6), "0.333333");
    }

    #[test]
    fn test_rounds_at_precision() {
        assert_eq!(format_number(1.23456789, 4), "1.2346");
        assert_eq!(format_number(2.0000004, 6), "2");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-2.5, 6), "-2.5");
        assert_eq!(format_number(-0.0000001, 6), "-1.00000e-7");
    }
}
