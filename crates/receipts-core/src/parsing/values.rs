use rust_decimal::Decimal;
use std::str::FromStr;

/// Marker that distinguishes a price line from arbitrary text.
pub const CURRENCY_MARKER: char = '$';

/// Parse a price line into a decimal amount.
///
/// A line qualifies only if it carries the currency marker; the marker and
/// thousands-separator commas are stripped before parsing. Lines without the
/// marker, and marked lines that still fail to parse, yield None — the
/// record is kept with an absent price either way.
///
/// - "$10.00"    -> Some(10.00)
/// - "$1,234.50" -> Some(1234.50)
/// - "1234.50"   -> None (no marker)
/// - "N/A"       -> None
pub fn parse_price(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if !s.contains(CURRENCY_MARKER) {
        return None;
    }
    let cleaned: String = s
        .chars()
        .filter(|c| *c != CURRENCY_MARKER && *c != ',')
        .collect();
    Decimal::from_str(cleaned.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_simple_price() {
        assert_eq!(parse_price("$10.00"), Some(dec!(10.00)));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_price("$1,234.50"), Some(dec!(1234.50)));
    }

    #[test]
    fn test_marker_with_space() {
        assert_eq!(parse_price("$ 7.25"), Some(dec!(7.25)));
    }

    #[test]
    fn test_no_marker_is_none() {
        assert_eq!(parse_price("1234.50"), None);
    }

    #[test]
    fn test_non_numeric_is_none() {
        assert_eq!(parse_price("N/A"), None);
        assert_eq!(parse_price("$N/A"), None);
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
    }
}
