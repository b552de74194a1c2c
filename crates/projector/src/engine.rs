use core_types::{CompoundInterestInput, ProjectionSummary, YearlyProjection};
use rust_decimal::Decimal;

/// A stateless calculator that turns a savings plan into a year-by-year
/// ledger of contributions, interest, and balance.
#[derive(Debug, Default)]
pub struct ProjectionEngine {}

impl ProjectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the balance forward one year at a time.
    ///
    /// Deposits land throughout the year, so each year's interest accrues on
    /// the running balance plus half of that year's contributions. This is the
    /// standard mid-year approximation for periodic deposits.
    ///
    /// `years = 0` produces an empty ledger; the caller decides how to present
    /// "nothing to show". Negative rates and contributions are not rejected
    /// here — the parsing boundary coerces both invalid text and negative
    /// values to zero before an input reaches this engine.
    pub fn project(&self, input: &CompoundInterestInput) -> Vec<YearlyProjection> {
        // The rate arrives as a percentage; convert once per call.
        let rate = input.annual_rate_percent / Decimal::from(100);
        let yearly_contribution = input.monthly_contribution * Decimal::from(12);

        let mut ledger = Vec::with_capacity(input.years as usize);
        let mut balance = input.initial_amount;

        for year in 1..=input.years {
            let interest_for_year = (balance + yearly_contribution / Decimal::from(2)) * rate;
            balance += yearly_contribution + interest_for_year;

            let contributions =
                input.initial_amount + yearly_contribution * Decimal::from(year);

            ledger.push(YearlyProjection {
                year,
                contributions,
                interest: balance - contributions,
                balance,
            });
        }

        tracing::debug!(
            years = input.years,
            final_balance = ?ledger.last().map(|p| p.balance),
            "projection complete"
        );

        ledger
    }

    /// Collapses a ledger into its headline figures: the final year's balance,
    /// contributions, and interest. An empty ledger summarizes to zeros.
    pub fn summarize(&self, ledger: &[YearlyProjection]) -> ProjectionSummary {
        match ledger.last() {
            Some(last) => ProjectionSummary {
                final_balance: last.balance,
                total_contributions: last.contributions,
                total_interest: last.interest,
            },
            None => ProjectionSummary::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(
        initial: Decimal,
        monthly: Decimal,
        rate_pct: Decimal,
        years: u32,
    ) -> CompoundInterestInput {
        CompoundInterestInput {
            initial_amount: initial,
            monthly_contribution: monthly,
            annual_rate_percent: rate_pct,
            years,
        }
    }

    #[test]
    fn single_year_matches_hand_calculation() {
        // 10_000 start, 500/month at 7%: interest accrues on
        // 10_000 + 6_000/2 = 13_000, i.e. 910 for the year.
        let ledger = ProjectionEngine::new().project(&input(dec!(10000), dec!(500), dec!(7), 1));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].year, 1);
        assert_eq!(ledger[0].contributions, dec!(16000));
        assert_eq!(ledger[0].interest, dec!(910));
        assert_eq!(ledger[0].balance, dec!(16910));
    }

    #[test]
    fn ledger_length_equals_years() {
        let engine = ProjectionEngine::new();
        for years in [0u32, 1, 5, 40] {
            let ledger = engine.project(&input(dec!(1000), dec!(100), dec!(5), years));
            assert_eq!(ledger.len(), years as usize);
        }
    }

    #[test]
    fn contributions_are_exactly_cumulative() {
        let ledger = ProjectionEngine::new().project(&input(dec!(2500), dec!(300), dec!(6), 15));
        for projection in &ledger {
            let expected = dec!(2500) + dec!(300) * dec!(12) * Decimal::from(projection.year);
            assert_eq!(projection.contributions, expected);
        }
    }

    #[test]
    fn interest_reconciles_with_balance() {
        let ledger = ProjectionEngine::new().project(&input(dec!(10000), dec!(500), dec!(7), 10));
        for projection in &ledger {
            assert_eq!(projection.interest, projection.balance - projection.contributions);
        }
    }

    #[test]
    fn balance_is_non_decreasing_for_non_negative_inputs() {
        let ledger = ProjectionEngine::new().project(&input(dec!(10000), dec!(500), dec!(7), 30));
        for window in ledger.windows(2) {
            assert!(window[1].balance >= window[0].balance);
        }
    }

    #[test]
    fn ten_year_default_plan() {
        // The plan the CLI defaults to.
        let ledger = ProjectionEngine::new().project(&input(dec!(10000), dec!(500), dec!(7), 10));
        assert_eq!(ledger[9].contributions, dec!(70000));
        assert_eq!(ledger[9].balance, dec!(105471.65541244137683437));
    }

    #[test]
    fn zero_amounts_stay_zero() {
        let ledger = ProjectionEngine::new().project(&input(dec!(0), dec!(0), dec!(5), 5));
        assert_eq!(ledger.len(), 5);
        for projection in &ledger {
            assert_eq!(projection.balance, Decimal::ZERO);
            assert_eq!(projection.interest, Decimal::ZERO);
            assert_eq!(projection.contributions, Decimal::ZERO);
        }
    }

    #[test]
    fn zero_rate_accumulates_contributions_only() {
        let ledger = ProjectionEngine::new().project(&input(dec!(1000), dec!(100), dec!(0), 3));
        assert_eq!(ledger[2].balance, dec!(1000) + dec!(100) * dec!(12) * dec!(3));
        assert_eq!(ledger[2].interest, Decimal::ZERO);
    }

    #[test]
    fn projection_is_deterministic() {
        let engine = ProjectionEngine::new();
        let plan = input(dec!(12345.67), dec!(89.01), dec!(4.25), 20);
        assert_eq!(engine.project(&plan), engine.project(&plan));
    }

    #[test]
    fn summary_takes_the_final_year() {
        let engine = ProjectionEngine::new();
        let ledger = engine.project(&input(dec!(10000), dec!(500), dec!(7), 10));
        let summary = engine.summarize(&ledger);
        assert_eq!(summary.final_balance, ledger[9].balance);
        assert_eq!(summary.total_contributions, dec!(70000));
        assert_eq!(summary.total_interest, ledger[9].interest);
    }

    #[test]
    fn empty_ledger_summarizes_to_zero() {
        let engine = ProjectionEngine::new();
        let summary = engine.summarize(&[]);
        assert_eq!(summary, ProjectionSummary::zero());
    }
}
