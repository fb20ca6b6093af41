use serde::{Deserialize, Serialize};

use crate::format::{format_local_date, format_short_date, rupees};
use crate::schedule::AmortizationSchedule;
use crate::types::LoanParameters;

/// issuer identity printed on the certificate, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateTemplate {
    pub issuer: String,
    pub signatory: String,
    pub reference_number: String,
}

/// one title/value card on the certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateCard {
    pub title: String,
    pub value: String,
}

/// everything the certificate renderer needs, fully formatted
///
/// The renderer owns canvas sizing, fonts, and imagery; assembling the text
/// is kept here so the same strings back every export path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateData {
    pub reference_number: String,
    pub issue_date: String,
    pub greeting: String,
    pub first_emi_date: String,
    pub cards: Vec<CertificateCard>,
    pub issuer: String,
    pub signatory: String,
}

impl CertificateData {
    /// assemble certificate text from the loan and its schedule
    pub fn prepare(
        params: &LoanParameters,
        schedule: &AmortizationSchedule,
        template: &CertificateTemplate,
    ) -> Self {
        let cards = vec![
            CertificateCard {
                title: "Approved Loan Amount".to_string(),
                value: rupees(params.principal),
            },
            CertificateCard {
                title: "Interest Rate".to_string(),
                value: params.annual_rate.to_string(),
            },
            CertificateCard {
                title: "Loan Term".to_string(),
                value: format!("{} Months", schedule.term_months),
            },
            CertificateCard {
                title: "Monthly Payment (EMI)".to_string(),
                value: rupees(schedule.monthly_payment),
            },
            CertificateCard {
                title: "Total Interest Payable".to_string(),
                value: rupees(schedule.total_interest),
            },
            CertificateCard {
                title: "One Time Processing Fees".to_string(),
                value: rupees(params.processing_fee),
            },
        ];

        Self {
            reference_number: template.reference_number.clone(),
            issue_date: format_local_date(params.start_date),
            greeting: format!("Dear, {}", params.borrower_name),
            first_emi_date: format_short_date(schedule.first_due_date),
            cards,
            issuer: template.issuer.clone(),
            signatory: template.signatory.clone(),
        }
    }

    /// certificate data as pretty-printed json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
