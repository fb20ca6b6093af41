use serde::{Deserialize, Serialize};

use crate::format::{format_local_date, number_to_words, rupees};
use crate::schedule::AmortizationSchedule;
use crate::types::LoanParameters;

/// one display-ready row of the monthly break-up table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// zero-padded sequence number ("01", "02", ...)
    pub payment_no: String,
    pub due_date: String,
    pub payment: String,
    pub principal: String,
    pub interest: String,
    pub ending_balance: String,
}

/// display-ready loan report: summary block plus the monthly break-up
///
/// Everything a table view, PDF export, or print layout needs, with all
/// amounts already grouped and prefixed. Pure data, no rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanReport {
    pub borrower_name: String,
    pub loan_amount: String,
    pub loan_amount_in_words: String,
    pub annual_rate: String,
    pub start_date: String,
    pub monthly_payment: String,
    pub number_of_payments: u32,
    pub total_interest: String,
    pub total_cost: String,
    pub rows: Vec<ScheduleRow>,
}

impl LoanReport {
    /// build the report from parameters and their generated schedule
    pub fn build(params: &LoanParameters, schedule: &AmortizationSchedule) -> Self {
        let rows = schedule
            .payments
            .iter()
            .map(|record| ScheduleRow {
                payment_no: format!("{:02}", record.sequence_number),
                due_date: format_local_date(record.due_date),
                payment: rupees(record.payment_amount),
                principal: rupees(record.principal_component),
                interest: rupees(record.interest_component),
                ending_balance: rupees(record.ending_balance),
            })
            .collect();

        Self {
            borrower_name: params.borrower_name.clone(),
            loan_amount: rupees(params.principal),
            loan_amount_in_words: number_to_words(params.principal.to_i64().max(0) as u64),
            annual_rate: params.annual_rate.to_string(),
            start_date: format_local_date(params.start_date),
            monthly_payment: rupees(schedule.monthly_payment),
            number_of_payments: schedule.number_of_payments(),
            total_interest: rupees(schedule.total_interest),
            total_cost: rupees(schedule.total_cost),
            rows,
        }
    }

    /// report as pretty-printed json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
