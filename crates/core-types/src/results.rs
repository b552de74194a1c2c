use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One year of a compound interest projection.
///
/// `contributions` is cumulative (initial amount plus every deposit made so
/// far); `interest` is the difference between the balance and the
/// contributions, so the three fields always reconcile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// 1-based year index.
    pub year: u32,
    /// Initial amount plus all deposits through the end of this year.
    pub contributions: Decimal,
    /// Accumulated interest: `balance - contributions`.
    pub interest: Decimal,
    /// The balance at the end of this year.
    pub balance: Decimal,
}

/// The headline numbers of a projection: the figures of its final year, or
/// zeros when the projection is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_balance: Decimal,
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
}

impl ProjectionSummary {
    pub fn zero() -> Self {
        Self {
            final_balance: Decimal::ZERO,
            total_contributions: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        }
    }
}

/// The aggregate outcome of a mortgage calculation.
///
/// Invariants: `total_payment = monthly_payment * number of payments` and
/// `total_interest = total_payment - principal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// The borrowed amount. Negative when the down payment exceeds the price.
    pub principal: Decimal,
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
}

impl MortgageResult {
    /// A result where nothing is borrowed and nothing is paid, used for
    /// degenerate inputs such as a zero-month term.
    pub fn zero_with_principal(principal: Decimal) -> Self {
        Self {
            principal,
            monthly_payment: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        }
    }
}

/// One month of an amortization schedule: the fixed payment split into its
/// interest and principal portions, with the balance that remains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month index.
    pub month: u32,
    pub payment: Decimal,
    pub principal_payment: Decimal,
    pub interest_payment: Decimal,
    pub remaining_principal: Decimal,
}

/// A 12-month block of the schedule summed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAmortization {
    /// 1-based year index.
    pub year: u32,
    pub principal_paid: Decimal,
    pub interest_paid: Decimal,
    pub total_paid: Decimal,
    /// The principal still outstanding after the last month of this year.
    pub remaining_principal: Decimal,
    /// Share of the original principal repaid so far, as a percentage.
    /// Zero when nothing was borrowed.
    pub principal_repaid_pct: Decimal,
}
