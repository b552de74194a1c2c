use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parses a free-text amount or rate, treating anything unparseable or
/// negative as zero.
///
/// This is the single place where the lenient input policy lives: the UI
/// hands over whatever the user typed, and a blank field, stray text, a
/// partial number, or a negative amount all become `0` rather than an error.
/// Amounts and rates are non-negative by definition here, so the calculation
/// engines only ever see a `Decimal` that is at least zero.
pub fn parse_or_default(text: &str) -> Decimal {
    text.trim()
        .parse::<Decimal>()
        .map(|d| d.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Parses a free-text whole-year count with the same coerce-to-zero policy.
///
/// A fractional value like "2.9" truncates to 2; negative values have no
/// meaning for a year count and become 0.
pub fn parse_years_or_default(text: &str) -> u32 {
    text.trim()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_or_default("10000"), dec!(10000));
        assert_eq!(parse_or_default(" 7.5 "), dec!(7.5));
        assert_eq!(parse_or_default("0"), Decimal::ZERO);
    }

    #[test]
    fn coerces_junk_to_zero() {
        assert_eq!(parse_or_default(""), Decimal::ZERO);
        assert_eq!(parse_or_default("   "), Decimal::ZERO);
        assert_eq!(parse_or_default("abc"), Decimal::ZERO);
        assert_eq!(parse_or_default("12,5"), Decimal::ZERO);
    }

    #[test]
    fn coerces_negatives_to_zero() {
        // Amounts and rates are non-negative fields; a typed minus sign is
        // treated like any other invalid input.
        assert_eq!(parse_or_default("-250"), Decimal::ZERO);
        assert_eq!(parse_or_default("-7"), Decimal::ZERO);
        assert_eq!(parse_or_default("-0.4"), Decimal::ZERO);
    }

    #[test]
    fn parses_year_counts() {
        assert_eq!(parse_years_or_default("10"), 10);
        assert_eq!(parse_years_or_default(" 3 "), 3);
        assert_eq!(parse_years_or_default("2.9"), 2);
        assert_eq!(parse_years_or_default(""), 0);
        assert_eq!(parse_years_or_default("many"), 0);
        assert_eq!(parse_years_or_default("-4"), 0);
    }
}
