/// print the full monthly break-up table for a loan
use loan_schedule::chrono::{TimeZone, Utc};
use loan_schedule::{
    AmortizationSchedule, LoanParameters, LoanReport, Money, Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // fixed clock so the run is reproducible
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));

    let params = LoanParameters::builder()
        .principal(Money::from_major(250_000))
        .annual_rate(Rate::from_percentage(dec!(10.5)))
        .term_years(2)
        .start_today(&time)
        .borrower_name("Asha")
        .build()?;

    let schedule = AmortizationSchedule::generate(&params)?;
    let report = LoanReport::build(&params, &schedule);

    println!("Loan Amount    {} ({})", report.loan_amount, report.loan_amount_in_words);
    println!("Interest Rate  {}", report.annual_rate);
    println!("Start Date     {}", report.start_date);
    println!();
    println!(
        "{:<5} {:<12} {:>12} {:>12} {:>10} {:>14}",
        "No.", "Due Date", "Payment", "Principal", "Interest", "Balance"
    );
    for row in &report.rows {
        println!(
            "{:<5} {:<12} {:>12} {:>12} {:>10} {:>14}",
            row.payment_no, row.due_date, row.payment, row.principal, row.interest, row.ending_balance
        );
    }
    println!();
    println!("Total Interest      {}", report.total_interest);
    println!("Total Cost Of Loan  {}", report.total_cost);

    Ok(())
}
