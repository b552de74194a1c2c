use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs for a compound interest projection.
///
/// All monetary fields are non-negative by convention: the parsing boundary
/// coerces blank, unparseable, and negative text to zero, so a projection is
/// always computable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// The starting balance before any contributions.
    pub initial_amount: Decimal,
    /// The amount deposited every month.
    pub monthly_contribution: Decimal,
    /// The annual interest rate as a percentage (7.5 means 7.5%).
    pub annual_rate_percent: Decimal,
    /// How many whole years to project. Zero yields an empty projection.
    pub years: u32,
}

/// The inputs for a mortgage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// The full price of the property.
    pub property_price: Decimal,
    /// The up-front payment. May exceed `property_price`; the engine does not
    /// reject it and the resulting principal goes negative.
    pub down_payment: Decimal,
    /// The annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// The loan term in years. Fractional terms are accepted; the payment
    /// count is `term_years * 12`.
    pub term_years: Decimal,
}

impl MortgageInput {
    /// The borrowed amount: property price minus the down payment.
    pub fn principal(&self) -> Decimal {
        self.property_price - self.down_payment
    }
}
