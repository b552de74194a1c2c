//! # Currency Formatter
//!
//! Renders decimal amounts as localized currency strings. Everything the
//! formatter needs — locale conventions, the currency symbol, how many
//! fraction digits to keep — comes from an explicit [`DisplayProfile`];
//! nothing is read from the process environment or an ambient locale.

pub mod profile;

pub use profile::DisplayProfile;

use rust_decimal::{Decimal, RoundingStrategy};

/// A pure, stateless currency renderer built from a [`DisplayProfile`].
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    symbol_after: bool,
    group_separator: char,
    decimal_separator: char,
    fraction_digits: u32,
}

impl CurrencyFormatter {
    pub fn new(profile: &DisplayProfile) -> Self {
        let conventions = profile.conventions();
        Self {
            symbol: profile.currency_symbol(),
            symbol_after: conventions.symbol_after,
            group_separator: conventions.group_separator,
            decimal_separator: conventions.decimal_separator,
            fraction_digits: profile.fraction_digits,
        }
    }

    /// Renders an amount with thousands grouping, the profile's separators,
    /// and the currency symbol. Rounds half-away-from-zero to the profile's
    /// fraction digits.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(
            self.fraction_digits,
            RoundingStrategy::MidpointAwayFromZero,
        );

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", self.fraction_digits as usize, rounded.abs());

        let (integer_part, fraction_part) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut rendered = String::new();
        if negative {
            rendered.push('-');
        }
        rendered.push_str(&group_thousands(integer_part, self.group_separator));
        if let Some(fraction) = fraction_part {
            rendered.push(self.decimal_separator);
            rendered.push_str(fraction);
        }

        if self.symbol_after {
            rendered.push(' ');
            rendered.push_str(&self.symbol);
        } else {
            rendered.insert_str(if negative { 1 } else { 0 }, &self.symbol);
        }

        rendered
    }

    /// Renders a missing amount as the zero string. This is the no-panic path
    /// for "nothing to show yet" displays.
    pub fn format_or_zero(&self, amount: Option<Decimal>) -> String {
        self.format(amount.unwrap_or(Decimal::ZERO))
    }
}

/// Inserts a separator every three digits, counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
