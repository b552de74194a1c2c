use formatter::DisplayProfile;
use serde::Deserialize;

/// The root configuration structure for the application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How amounts are rendered: locale conventions, currency, precision.
    pub display: DisplayProfile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Whole rubles, ru-RU separators.
            display: DisplayProfile {
                locale: "ru-RU".to_string(),
                currency_code: "RUB".to_string(),
                fraction_digits: 0,
            },
        }
    }
}
