/// assemble the certificate data a renderer would paint
use loan_schedule::chrono::NaiveDate;
use loan_schedule::{
    AmortizationSchedule, CertificateData, CertificateTemplate, LoanParameters, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::builder()
        .principal(Money::from_major(100_000))
        .annual_rate(Rate::from_percentage(dec!(4)))
        .term_years(1)
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .borrower_name("Asha")
        .processing_fee(Money::from_major(1_380))
        .build()?;

    let schedule = AmortizationSchedule::generate(&params)?;

    let template = CertificateTemplate {
        issuer: "Example Lending".to_string(),
        signatory: "Loan Desk".to_string(),
        reference_number: "LN-2024-000123".to_string(),
    };
    let certificate = CertificateData::prepare(&params, &schedule, &template);

    println!("{}", certificate.json());

    Ok(())
}
