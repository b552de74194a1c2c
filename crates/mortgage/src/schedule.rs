use core_types::{AmortizationEntry, YearlyAmortization};
use rust_decimal::Decimal;
use serde::Serialize;

/// The month-by-month repayment plan for a loan, plus the original principal
/// needed to express repayment progress as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationSchedule {
    principal: Decimal,
    entries: Vec<AmortizationEntry>,
}

impl AmortizationSchedule {
    pub(crate) fn new(principal: Decimal, entries: Vec<AmortizationEntry>) -> Self {
        Self { principal, entries }
    }

    pub fn entries(&self) -> &[AmortizationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups the schedule into 12-month blocks for display: principal and
    /// interest paid per year, the balance at year end, and how much of the
    /// original principal has been retired.
    ///
    /// The final block of a fractional term may hold fewer than 12 months.
    pub fn yearly(&self) -> Vec<YearlyAmortization> {
        let mut years = Vec::with_capacity(self.entries.len().div_ceil(12));

        for (index, chunk) in self.entries.chunks(12).enumerate() {
            let Some(last) = chunk.last() else { continue };

            let principal_paid: Decimal = chunk.iter().map(|e| e.principal_payment).sum();
            let interest_paid: Decimal = chunk.iter().map(|e| e.interest_payment).sum();

            let principal_repaid_pct = if self.principal.is_zero() {
                Decimal::ZERO
            } else {
                (self.principal - last.remaining_principal) / self.principal
                    * Decimal::from(100)
            };

            years.push(YearlyAmortization {
                year: index as u32 + 1,
                principal_paid,
                interest_paid,
                total_paid: principal_paid + interest_paid,
                remaining_principal: last.remaining_principal,
                principal_repaid_pct,
            });
        }

        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MortgageEngine;
    use core_types::MortgageInput;
    use rust_decimal_macros::dec;

    fn schedule() -> AmortizationSchedule {
        MortgageEngine::new()
            .amortize(&MortgageInput {
                property_price: dec!(5000000),
                down_payment: dec!(1000000),
                annual_rate_percent: dec!(7.5),
                term_years: dec!(20),
            })
            .unwrap()
    }

    #[test]
    fn yearly_blocks_cover_the_whole_term() {
        let yearly = schedule().yearly();
        assert_eq!(yearly.len(), 20);
        assert_eq!(yearly[0].year, 1);
        assert_eq!(yearly[19].year, 20);
    }

    #[test]
    fn yearly_sums_equal_monthly_sums() {
        let schedule = schedule();
        let yearly = schedule.yearly();

        let monthly_interest: Decimal =
            schedule.entries().iter().map(|e| e.interest_payment).sum();
        let yearly_interest: Decimal = yearly.iter().map(|y| y.interest_paid).sum();
        assert_eq!(monthly_interest, yearly_interest);

        let monthly_principal: Decimal =
            schedule.entries().iter().map(|e| e.principal_payment).sum();
        let yearly_principal: Decimal = yearly.iter().map(|y| y.principal_paid).sum();
        assert_eq!(monthly_principal, yearly_principal);
    }

    #[test]
    fn repaid_percentage_climbs_to_one_hundred() {
        let yearly = schedule().yearly();
        for window in yearly.windows(2) {
            assert!(window[1].principal_repaid_pct > window[0].principal_repaid_pct);
        }
        let final_pct = yearly.last().unwrap().principal_repaid_pct;
        assert!((final_pct - dec!(100)).abs() < dec!(0.0000001));
    }

    #[test]
    fn zero_principal_reports_zero_progress() {
        let schedule = MortgageEngine::new()
            .amortize(&MortgageInput {
                property_price: dec!(1000000),
                down_payment: dec!(1000000),
                annual_rate_percent: dec!(5),
                term_years: dec!(1),
            })
            .unwrap();

        let yearly = schedule.yearly();
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].principal_repaid_pct, Decimal::ZERO);
        assert_eq!(yearly[0].total_paid, Decimal::ZERO);
    }

    #[test]
    fn empty_schedule_has_no_years() {
        let schedule = MortgageEngine::new()
            .amortize(&MortgageInput {
                property_price: dec!(1000000),
                down_payment: dec!(0),
                annual_rate_percent: dec!(5),
                term_years: dec!(0),
            })
            .unwrap();

        assert!(schedule.is_empty());
        assert!(schedule.yearly().is_empty());
    }
}
