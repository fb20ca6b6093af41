use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::LoanParameters;

/// download-log wire payload, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadEvent {
    pub name: String,
    pub loan_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_period: Option<u32>,
}

impl DownloadEvent {
    /// payload for a download of the given loan's document
    pub fn from_loan(params: &LoanParameters) -> Self {
        Self {
            name: params.borrower_name.clone(),
            loan_amount: params.principal,
            loan_period: Some(params.term_years),
        }
    }

    /// reject payloads the endpoint would answer with a 400
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoanError::MissingField {
                field: "name".to_string(),
            });
        }
        if !self.loan_amount.is_positive() {
            return Err(LoanError::MissingField {
                field: "loanAmount".to_string(),
            });
        }
        Ok(())
    }
}

/// persisted row echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: Uuid,
    pub user_name: String,
    pub loan_amount: Money,
    pub loan_period: Option<u32>,
    pub logged_at: DateTime<Utc>,
}

/// persistence boundary for download events
///
/// Implementations are passed in explicitly per call site; the sink is never
/// held as process-wide state.
pub trait DownloadSink {
    fn record(&mut self, event: &DownloadEvent, time: &SafeTimeProvider) -> Result<DownloadRecord>;
}

/// in-memory sink, the reference implementation and test double
#[derive(Debug, Default)]
pub struct InMemoryDownloadLog {
    records: Vec<DownloadRecord>,
}

impl InMemoryDownloadLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DownloadSink for InMemoryDownloadLog {
    fn record(&mut self, event: &DownloadEvent, time: &SafeTimeProvider) -> Result<DownloadRecord> {
        event.validate()?;

        let record = DownloadRecord {
            id: Uuid::new_v4(),
            user_name: event.name.clone(),
            loan_amount: event.loan_amount,
            loan_period: event.loan_period,
            logged_at: time.now(),
        };
        self.records.push(record.clone());
        Ok(record)
    }
}

/// HTTP status for a log outcome: 201 created, 400 rejected, 500 storage fault
pub fn http_status(outcome: &Result<DownloadRecord>) -> u16 {
    match outcome {
        Ok(_) => 201,
        Err(LoanError::Storage { .. }) => 500,
        Err(_) => 400,
    }
}
