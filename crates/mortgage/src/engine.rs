use crate::error::MortgageError;
use crate::schedule::AmortizationSchedule;
use core_types::{AmortizationEntry, MortgageInput, MortgageResult};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// A stateless calculator for fixed-rate annuity loans.
#[derive(Debug, Default)]
pub struct MortgageEngine {}

impl MortgageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the fixed monthly payment and the aggregate cost of the loan.
    ///
    /// Uses the standard annuity formula `p * f * r / (f - 1)` with
    /// `f = (1 + r)^n`, where `r` is the monthly rate and `n` the number of
    /// payments.
    ///
    /// Boundary rules:
    /// - A zero rate would make the denominator vanish; the payment falls back
    ///   to straight-line `principal / n`, which is the limit of the formula
    ///   as the rate approaches zero.
    /// - A zero-month term yields an all-zero result.
    /// - A down payment above the property price is not rejected: the
    ///   principal and the payment simply go negative. Validating that
    ///   combination is the caller's decision.
    pub fn calculate(&self, input: &MortgageInput) -> Result<MortgageResult, MortgageError> {
        let principal = input.principal();
        let num_payments = input.term_years * Decimal::from(12);

        if num_payments <= Decimal::ZERO {
            return Ok(MortgageResult::zero_with_principal(principal));
        }

        let monthly_rate = monthly_rate(input);
        let monthly_payment = if monthly_rate.is_zero() {
            principal / num_payments
        } else {
            let factor = annuity_factor(monthly_rate, num_payments)?;
            principal * factor * monthly_rate / (factor - Decimal::ONE)
        };

        let total_payment = monthly_payment * num_payments;

        Ok(MortgageResult {
            principal,
            monthly_payment,
            total_payment,
            total_interest: total_payment - principal,
        })
    }

    /// Splits the fixed payment of each month into its interest and principal
    /// portions, tracking the outstanding balance down to zero.
    ///
    /// Each month pays `remaining * monthly_rate` in interest; the rest of the
    /// payment retires principal. A fractional term truncates to whole months.
    pub fn amortize(&self, input: &MortgageInput) -> Result<AmortizationSchedule, MortgageError> {
        let result = self.calculate(input)?;
        let monthly_rate = monthly_rate(input);
        let months = (input.term_years * Decimal::from(12))
            .trunc()
            .to_u32()
            .unwrap_or(0);

        let mut entries = Vec::with_capacity(months as usize);
        let mut remaining = result.principal;

        for month in 1..=months {
            let interest_payment = remaining * monthly_rate;
            let principal_payment = result.monthly_payment - interest_payment;
            remaining -= principal_payment;

            entries.push(AmortizationEntry {
                month,
                payment: result.monthly_payment,
                principal_payment,
                interest_payment,
                remaining_principal: remaining,
            });
        }

        tracing::debug!(months, principal = %result.principal, "amortization schedule built");

        Ok(AmortizationSchedule::new(result.principal, entries))
    }
}

/// The periodic rate: annual percentage divided by 100, then by 12.
fn monthly_rate(input: &MortgageInput) -> Decimal {
    input.annual_rate_percent / Decimal::from(100) / Decimal::from(12)
}

/// `(1 + rate)^num_payments`, using the exact integer power when the payment
/// count is whole and the decimal power (exp/ln based) for fractional terms.
fn annuity_factor(monthly_rate: Decimal, num_payments: Decimal) -> Result<Decimal, MortgageError> {
    let base = Decimal::ONE + monthly_rate;
    let factor = if num_payments.fract().is_zero() {
        num_payments
            .to_i64()
            .and_then(|n| base.checked_powi(n))
    } else {
        base.checked_powd(num_payments)
    };
    factor.ok_or_else(|| MortgageError::Overflow("annuity factor".to_string()))
}
