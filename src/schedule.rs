use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanParameters;

/// single scheduled payment, figures rounded to whole rupees for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub sequence_number: u32,
    pub due_date: NaiveDate,
    pub payment_amount: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub ending_balance: Money,
}

/// full amortization schedule with derived aggregates
///
/// The running balance is carried at full decimal precision across periods;
/// only the emitted record fields are rounded. The five figures in each
/// record are rounded independently, so summed principal components may
/// drift from the principal by a few rupees over a long term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub first_due_date: NaiveDate,
    pub monthly_payment: Money,
    pub payments: Vec<PaymentRecord>,
    pub total_interest: Money,
    pub total_cost: Money,
}

impl AmortizationSchedule {
    /// generate the payment schedule for validated loan parameters
    pub fn generate(params: &LoanParameters) -> Result<Self> {
        params.validate()?;

        let monthly_rate = params.annual_rate.monthly_rate().as_decimal();
        let term_months = params.number_of_payments();
        let principal = params.principal.as_decimal();
        let payment = periodic_payment(principal, monthly_rate, term_months);

        let mut payments = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for i in 1..=term_months {
            let interest = balance * monthly_rate;
            let principal_paid = payment - interest;
            balance -= principal_paid;

            payments.push(PaymentRecord {
                sequence_number: i,
                due_date: add_months(params.start_date, i)?,
                payment_amount: Money::from_decimal_whole(payment),
                principal_component: Money::from_decimal_whole(principal_paid),
                interest_component: Money::from_decimal_whole(interest),
                ending_balance: Money::from_decimal_whole(balance),
            });
        }

        // totals fold the rounded components so the displayed figures add up
        let total_interest = payments
            .iter()
            .map(|p| p.interest_component)
            .fold(Money::ZERO, |acc, x| acc + x);
        let total_cost = params.principal + total_interest;

        Ok(Self {
            principal: params.principal,
            annual_rate: params.annual_rate,
            term_months,
            start_date: params.start_date,
            first_due_date: add_months(params.start_date, 1)?,
            monthly_payment: Money::from_decimal_whole(payment),
            payments,
            total_interest,
            total_cost,
        })
    }

    /// get payment for a 1-based sequence number
    pub fn get_payment(&self, sequence_number: u32) -> Option<&PaymentRecord> {
        if sequence_number == 0 {
            return None;
        }
        self.payments.get((sequence_number - 1) as usize)
    }

    /// number of scheduled payments
    pub fn number_of_payments(&self) -> u32 {
        self.payments.len() as u32
    }

    /// schedule as pretty-printed json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// fixed periodic payment for the annuity
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1); a zero rate degenerates to
/// straight division of the principal across the term.
fn periodic_payment(principal: Decimal, monthly_rate: Decimal, term_months: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let compound = compound_factor(monthly_rate, term_months);
    principal * monthly_rate * compound / (compound - Decimal::ONE)
}

/// (1 + r)^n by iterated multiplication
fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

/// advance a date by calendar months, clamping to the end of short months
fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LoanError::InvalidDate {
            message: format!("{date} + {months} months overflows the calendar"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::LoanParameters;
    use rust_decimal_macros::dec;

    fn params(principal: i64, rate_pct: Decimal, term_years: u32, start: (i32, u32, u32)) -> LoanParameters {
        LoanParameters::new(
            Money::from_major(principal),
            Rate::from_percentage(rate_pct),
            term_years,
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        )
    }

    #[test]
    fn test_record_count_and_ordering() {
        let schedule =
            AmortizationSchedule::generate(&params(100_000, dec!(4), 1, (2024, 1, 1))).unwrap();

        assert_eq!(schedule.payments.len(), 12);
        assert_eq!(schedule.number_of_payments(), 12);
        for (i, record) in schedule.payments.iter().enumerate() {
            assert_eq!(record.sequence_number, i as u32 + 1);
        }
        for pair in schedule.payments.windows(2) {
            assert!(pair[1].due_date > pair[0].due_date);
        }
    }

    #[test]
    fn test_due_dates_advance_by_months() {
        let schedule =
            AmortizationSchedule::generate(&params(100_000, dec!(4), 1, (2024, 1, 1))).unwrap();

        assert_eq!(
            schedule.payments[0].due_date,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert_eq!(schedule.first_due_date, schedule.payments[0].due_date);
        assert_eq!(
            schedule.payments[11].due_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_month_end_start_date_clamps() {
        let schedule =
            AmortizationSchedule::generate(&params(50_000, dec!(6), 1, (2024, 1, 31))).unwrap();

        // 31 Jan + 1 month lands on leap-day February
        assert_eq!(
            schedule.payments[0].due_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            schedule.payments[1].due_date,
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
    }

    #[test]
    fn test_oracle_first_period() {
        // 100,000 @ 4% over 12 months: EMI from the annuity formula is
        // 8,514.99, first interest 333.33, first principal 8,181.66
        let schedule =
            AmortizationSchedule::generate(&params(100_000, dec!(4), 1, (2024, 1, 1))).unwrap();
        let first = &schedule.payments[0];

        assert_eq!(schedule.monthly_payment, Money::from_major(8_515));
        assert_eq!(first.payment_amount, Money::from_major(8_515));
        assert_eq!(first.interest_component, Money::from_major(333));
        assert_eq!(first.principal_component, Money::from_major(8_182));
        assert_eq!(first.ending_balance, Money::from_major(91_818));
    }

    #[test]
    fn test_oracle_totals() {
        let schedule =
            AmortizationSchedule::generate(&params(100_000, dec!(4), 1, (2024, 1, 1))).unwrap();

        // 12 * 8,514.99 - 100,000 puts total interest near 2,180
        assert!(schedule.total_interest >= Money::from_major(2_175));
        assert!(schedule.total_interest <= Money::from_major(2_185));
        assert_eq!(
            schedule.total_cost,
            schedule.principal + schedule.total_interest
        );
    }

    #[test]
    fn test_total_interest_is_sum_of_components() {
        let schedule =
            AmortizationSchedule::generate(&params(750_000, dec!(9.5), 20, (2024, 3, 10))).unwrap();

        let summed = schedule
            .payments
            .iter()
            .map(|p| p.interest_component)
            .fold(Money::ZERO, |acc, x| acc + x);
        assert_eq!(schedule.total_interest, summed);
        assert_eq!(schedule.total_cost, schedule.principal + summed);
    }

    #[test]
    fn test_zero_rate_degenerates_to_straight_division() {
        let schedule =
            AmortizationSchedule::generate(&params(120_000, dec!(0), 1, (2024, 1, 1))).unwrap();

        assert_eq!(schedule.monthly_payment, Money::from_major(10_000));
        for record in &schedule.payments {
            assert_eq!(record.payment_amount, Money::from_major(10_000));
            assert_eq!(record.interest_component, Money::ZERO);
        }
        assert_eq!(schedule.total_interest, Money::ZERO);
        assert_eq!(schedule.payments[11].ending_balance, Money::ZERO);
    }

    #[test]
    fn test_rounding_drift_is_bounded() {
        // displayed balances drift by at most a rupee because the running
        // balance is carried unrounded
        for (principal, rate, years) in [
            (100_000, dec!(4), 1),
            (2_500_000, dec!(8.5), 20),
            (999_999, dec!(12), 30),
            (1_000, dec!(18), 2),
        ] {
            let schedule =
                AmortizationSchedule::generate(&params(principal, rate, years, (2024, 1, 1)))
                    .unwrap();
            let last = schedule.payments.last().unwrap();
            assert!(last.ending_balance.abs() <= Money::from_major(1));
        }
    }

    #[test]
    fn test_get_payment_is_one_based() {
        let schedule =
            AmortizationSchedule::generate(&params(100_000, dec!(4), 1, (2024, 1, 1))).unwrap();

        assert!(schedule.get_payment(0).is_none());
        assert_eq!(schedule.get_payment(1).unwrap().sequence_number, 1);
        assert_eq!(schedule.get_payment(12).unwrap().sequence_number, 12);
        assert!(schedule.get_payment(13).is_none());
    }

    #[test]
    fn test_generate_rejects_invalid_parameters() {
        let result = AmortizationSchedule::generate(&params(0, dec!(4), 1, (2024, 1, 1)));
        assert!(matches!(result, Err(LoanError::InvalidPrincipal { .. })));

        let result = AmortizationSchedule::generate(&params(100_000, dec!(4), 0, (2024, 1, 1)));
        assert!(matches!(result, Err(LoanError::InvalidTerm { .. })));
    }
}
