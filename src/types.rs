use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// loan parameters, immutable per schedule computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub start_date: NaiveDate,
    /// display only, never enters the amortization math
    pub borrower_name: String,
    /// display only, never enters the amortization math
    pub processing_fee: Money,
}

impl LoanParameters {
    /// create parameters with the computation-relevant fields
    pub fn new(principal: Money, annual_rate: Rate, term_years: u32, start_date: NaiveDate) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
            start_date,
            borrower_name: String::new(),
            processing_fee: Money::ZERO,
        }
    }

    /// builder for loan parameters
    pub fn builder() -> LoanParametersBuilder {
        LoanParametersBuilder::new()
    }

    /// boundary validation, must pass before a schedule is generated
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(LoanError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        if self.term_years == 0 {
            return Err(LoanError::InvalidTerm {
                years: self.term_years,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(LoanError::InvalidRate {
                rate: self.annual_rate,
            });
        }
        if self.processing_fee.is_negative() {
            return Err(LoanError::InvalidProcessingFee {
                amount: self.processing_fee,
            });
        }
        Ok(())
    }

    /// total number of monthly payments
    pub fn number_of_payments(&self) -> u32 {
        self.term_years * 12
    }

    /// apply a typed field update, committing only if the result validates
    pub fn apply(&mut self, update: LoanUpdate) -> Result<()> {
        let mut next = self.clone();
        match update {
            LoanUpdate::Principal(amount) => next.principal = amount,
            LoanUpdate::AnnualRate(rate) => next.annual_rate = rate,
            LoanUpdate::TermYears(years) => next.term_years = years,
            LoanUpdate::StartDate(date) => next.start_date = date,
            LoanUpdate::BorrowerName(name) => next.borrower_name = name,
            LoanUpdate::ProcessingFee(amount) => next.processing_fee = amount,
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// typed update for a single loan parameter field
#[derive(Debug, Clone, PartialEq)]
pub enum LoanUpdate {
    Principal(Money),
    AnnualRate(Rate),
    TermYears(u32),
    StartDate(NaiveDate),
    BorrowerName(String),
    ProcessingFee(Money),
}

impl LoanUpdate {
    /// parse a raw form-field update by field name
    ///
    /// Accepts the form's field names and raw string values (amounts may carry
    /// Indian digit grouping, dates are ISO). Unknown field names are rejected
    /// rather than silently absorbed.
    pub fn parse(field: &str, raw: &str) -> Result<Self> {
        match field {
            "loanAmount" | "principal" => Ok(LoanUpdate::Principal(parse_amount(field, raw)?)),
            "annualInterestRate" | "annualRate" => {
                let pct = Decimal::from_str(raw.trim()).map_err(|_| invalid(field, raw))?;
                Ok(LoanUpdate::AnnualRate(Rate::from_percentage(pct)))
            }
            "loanPeriodYears" | "termYears" => {
                let years = raw.trim().parse::<u32>().map_err(|_| invalid(field, raw))?;
                Ok(LoanUpdate::TermYears(years))
            }
            "startDate" => {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| invalid(field, raw))?;
                Ok(LoanUpdate::StartDate(date))
            }
            "name" | "borrowerName" => Ok(LoanUpdate::BorrowerName(raw.to_string())),
            "processingFee" => Ok(LoanUpdate::ProcessingFee(parse_amount(field, raw)?)),
            _ => Err(LoanError::UnknownField {
                name: field.to_string(),
            }),
        }
    }
}

fn parse_amount(field: &str, raw: &str) -> Result<Money> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Money::from_str(&cleaned).map_err(|_| invalid(field, raw))
}

fn invalid(field: &str, value: &str) -> LoanError {
    LoanError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// builder for creating loan parameters
pub struct LoanParametersBuilder {
    principal: Option<Money>,
    annual_rate: Option<Rate>,
    term_years: Option<u32>,
    start_date: Option<NaiveDate>,
    borrower_name: String,
    processing_fee: Money,
}

impl LoanParametersBuilder {
    pub fn new() -> Self {
        Self {
            principal: None,
            annual_rate: None,
            term_years: None,
            start_date: None,
            borrower_name: String::new(),
            processing_fee: Money::ZERO,
        }
    }

    pub fn principal(mut self, amount: Money) -> Self {
        self.principal = Some(amount);
        self
    }

    pub fn annual_rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// originate today according to the supplied time provider
    pub fn start_today(mut self, time: &SafeTimeProvider) -> Self {
        self.start_date = Some(time.now().date_naive());
        self
    }

    pub fn borrower_name(mut self, name: impl Into<String>) -> Self {
        self.borrower_name = name.into();
        self
    }

    pub fn processing_fee(mut self, amount: Money) -> Self {
        self.processing_fee = amount;
        self
    }

    pub fn build(self) -> Result<LoanParameters> {
        let params = LoanParameters {
            principal: self.principal.unwrap_or(Money::ZERO),
            annual_rate: self.annual_rate.unwrap_or(Rate::ZERO),
            term_years: self.term_years.unwrap_or(0),
            start_date: self.start_date.ok_or_else(|| LoanError::InvalidDate {
                message: "start date not set".to_string(),
            })?,
            borrower_name: self.borrower_name,
            processing_fee: self.processing_fee,
        };
        params.validate()?;
        Ok(params)
    }
}

impl Default for LoanParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> LoanParameters {
        LoanParameters::new(
            Money::from_major(100_000),
            Rate::from_percentage(dec!(4)),
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_validate_rejects_zero_principal() {
        let mut params = sample();
        params.principal = Money::ZERO;
        assert!(matches!(
            params.validate(),
            Err(LoanError::InvalidPrincipal { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_term() {
        let mut params = sample();
        params.term_years = 0;
        assert!(matches!(params.validate(), Err(LoanError::InvalidTerm { .. })));
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let mut params = sample();
        params.annual_rate = Rate::ZERO;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = LoanParameters::builder()
            .principal(Money::from_major(250_000))
            .annual_rate(Rate::from_percentage(dec!(10.5)))
            .term_years(3)
            .start_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
            .borrower_name("Asha")
            .processing_fee(Money::from_major(1_380))
            .build()
            .unwrap();

        assert_eq!(params.number_of_payments(), 36);
        assert_eq!(params.borrower_name, "Asha");
    }

    #[test]
    fn test_builder_requires_valid_term() {
        let result = LoanParameters::builder()
            .principal(Money::from_major(10_000))
            .annual_rate(Rate::from_percentage(dec!(8)))
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build();
        assert!(matches!(result, Err(LoanError::InvalidTerm { .. })));
    }

    #[test]
    fn test_parse_grouped_amount_update() {
        let update = LoanUpdate::parse("loanAmount", "12,34,567").unwrap();
        assert_eq!(update, LoanUpdate::Principal(Money::from_major(1_234_567)));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = LoanUpdate::parse("emiAmount", "123").unwrap_err();
        assert!(matches!(err, LoanError::UnknownField { .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_value() {
        let err = LoanUpdate::parse("loanPeriodYears", "two").unwrap_err();
        assert!(matches!(err, LoanError::InvalidFieldValue { .. }));
    }

    #[test]
    fn test_apply_commits_valid_update() {
        let mut params = sample();
        params
            .apply(LoanUpdate::parse("annualInterestRate", "7.25").unwrap())
            .unwrap();
        assert_eq!(params.annual_rate.as_percentage(), dec!(7.25));
    }

    #[test]
    fn test_apply_rejects_invalidating_update_without_committing() {
        let mut params = sample();
        let err = params.apply(LoanUpdate::TermYears(0)).unwrap_err();
        assert!(matches!(err, LoanError::InvalidTerm { .. }));
        assert_eq!(params.term_years, 1);
    }
}
