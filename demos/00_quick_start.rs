/// quick start - minimal example to get started
use loan_schedule::{rupees, AmortizationSchedule, LoanParameters, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 1,00,000 rupee loan at 4% over one year
    let params = LoanParameters::builder()
        .principal(Money::from_major(100_000))
        .annual_rate(Rate::from_percentage(dec!(4)))
        .term_years(1)
        .start_date(loan_schedule::chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .borrower_name("Asha")
        .build()?;

    let schedule = AmortizationSchedule::generate(&params)?;

    println!("Monthly Payment     {}", rupees(schedule.monthly_payment));
    println!("Number Of Payments  {}", schedule.number_of_payments());
    println!("Total Interest      {}", rupees(schedule.total_interest));
    println!("Total Cost Of Loan  {}", rupees(schedule.total_cost));

    Ok(())
}
