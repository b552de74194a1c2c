use serde::Deserialize;

/// The explicit formatting configuration: which locale's conventions to use,
/// which currency to label amounts with, and how many fraction digits to keep.
///
/// This struct replaces any reliance on the process locale; two machines with
/// the same profile render the same string.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayProfile {
    /// BCP 47-style tag, e.g. "ru-RU" or "en-US". Only the language prefix is
    /// significant for separator selection.
    pub locale: String,
    /// ISO 4217 code, e.g. "RUB". Unknown codes are rendered verbatim.
    pub currency_code: String,
    pub fraction_digits: u32,
}

/// Separator and symbol-placement conventions derived from a locale tag.
#[derive(Debug, Clone, Copy)]
pub struct LocaleConventions {
    pub group_separator: char,
    pub decimal_separator: char,
    /// Whether the currency symbol trails the amount ("1 234 ₽") instead of
    /// leading it ("$1,234").
    pub symbol_after: bool,
}

impl DisplayProfile {
    /// The conventions for this profile's locale. Locales follow their
    /// language prefix; anything unrecognized gets the en-style default.
    pub fn conventions(&self) -> LocaleConventions {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match language.as_str() {
            "ru" | "de" | "fr" => LocaleConventions {
                group_separator: ' ',
                decimal_separator: ',',
                symbol_after: true,
            },
            _ => LocaleConventions {
                group_separator: ',',
                decimal_separator: '.',
                symbol_after: false,
            },
        }
    }

    /// The display symbol for this profile's currency, falling back to the
    /// code itself for currencies without a conventional symbol.
    pub fn currency_symbol(&self) -> String {
        match self.currency_code.to_ascii_uppercase().as_str() {
            "RUB" => "₽".to_string(),
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            other => other.to_string(),
        }
    }
}
