use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid principal: {amount}, must be positive")]
    InvalidPrincipal { amount: Money },

    #[error("invalid term: {years} years, must be at least 1")]
    InvalidTerm { years: u32 },

    #[error("invalid interest rate: {rate}, must not be negative")]
    InvalidRate { rate: Rate },

    #[error("invalid processing fee: {amount}, must not be negative")]
    InvalidProcessingFee { amount: Money },

    #[error("invalid date: {message}")]
    InvalidDate { message: String },

    #[error("unknown field: {name}")]
    UnknownField { name: String },

    #[error("invalid value for field {field}: {value}")]
    InvalidFieldValue { field: String, value: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("storage error: {message}")]
    Storage { message: String },
}

pub type Result<T> = std::result::Result<T, LoanError>;
