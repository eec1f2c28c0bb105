//! Centralized number formatting utilities.
//!
//! All numeric display formatting goes through this module so the table and
//! chart renderers stay consistent, and to support European-style number
//! formatting (swapping `.` and `,`).

/// Apply European number format by swapping `.` and `,` in a formatted string.
fn europeanize(s: &str) -> String {
    // Our formatted strings are purely numeric (with optional % suffix),
    // so a global swap is safe.
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '.' => result.push(','),
            ',' => result.push('.'),
            _ => result.push(c),
        }
    }
    result
}

/// Apply European formatting conditionally.
#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european {
        europeanize(&s)
    } else {
        s
    }
}

/// Format a count with thousands separators.
///
/// - Standard: `1,234,567`
/// - European: `1.234.567`
///
/// # Examples
/// ```
/// use armory_types::formatting::format_thousands;
/// assert_eq!(format_thousands(500, false), "500");
/// assert_eq!(format_thousands(1_500, false), "1,500");
/// assert_eq!(format_thousands(1_500_000, true), "1.500.000");
/// ```
pub fn format_thousands(n: usize, european: bool) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    maybe_eu(result, european)
}

/// Format a decimal f64 number with the specified precision.
///
/// # Examples
/// ```
/// use armory_types::formatting::format_decimal_f64;
/// assert_eq!(format_decimal_f64(3.5, 1, false), "3.5");
/// assert_eq!(format_decimal_f64(42.25, 2, true), "42,25");
/// ```
pub fn format_decimal_f64(n: f64, precision: usize, european: bool) -> String {
    maybe_eu(format!("{:.prec$}", n, prec = precision), european)
}

/// Format a percentage from count/total with 1 decimal place.
///
/// Returns `"0%"` if total is zero.
///
/// # Examples
/// ```
/// use armory_types::formatting::format_pct_ratio;
/// assert_eq!(format_pct_ratio(3, 10, false), "30.0%");
/// assert_eq!(format_pct_ratio(3, 10, true), "30,0%");
/// assert_eq!(format_pct_ratio(0, 0, false), "0%");
/// ```
pub fn format_pct_ratio(count: usize, total: usize, european: bool) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    maybe_eu(
        format!("{:.1}%", count as f64 / total as f64 * 100.0),
        european,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0, false), "0");
        assert_eq!(format_thousands(500, false), "500");
        assert_eq!(format_thousands(1_500, false), "1,500");
        assert_eq!(format_thousands(1_500_000, false), "1,500,000");
    }

    #[test]
    fn test_format_thousands_european() {
        assert_eq!(format_thousands(500, true), "500");
        assert_eq!(format_thousands(1_500, true), "1.500");
        assert_eq!(format_thousands(1_500_000, true), "1.500.000");
    }

    #[test]
    fn test_format_decimal_f64() {
        assert_eq!(format_decimal_f64(3.5, 1, false), "3.5");
        assert_eq!(format_decimal_f64(3.5, 1, true), "3,5");
        assert_eq!(format_decimal_f64(1.234, 3, false), "1.234");
    }

    #[test]
    fn test_format_pct_ratio() {
        assert_eq!(format_pct_ratio(3, 10, false), "30.0%");
        assert_eq!(format_pct_ratio(3, 10, true), "30,0%");
        assert_eq!(format_pct_ratio(0, 0, false), "0%");
        assert_eq!(format_pct_ratio(10, 10, false), "100.0%");
    }

    #[test]
    fn test_europeanize() {
        assert_eq!(europeanize("42.7%"), "42,7%");
        assert_eq!(europeanize("1,500,000"), "1.500.000");
        assert_eq!(europeanize("500"), "500");
    }
}
