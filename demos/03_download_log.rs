/// log a download event through the in-memory sink
use loan_schedule::chrono::{TimeZone, Utc};
use loan_schedule::{
    http_status, DownloadEvent, DownloadSink, InMemoryDownloadLog, Money, SafeTimeProvider,
    TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ));
    let mut sink = InMemoryDownloadLog::new();

    let event = DownloadEvent {
        name: "Asha".to_string(),
        loan_amount: Money::from_major(100_000),
        loan_period: Some(1),
    };
    println!("payload: {}", serde_json::to_string(&event)?);

    let outcome = sink.record(&event, &time);
    println!("status: {}", http_status(&outcome));
    println!("stored: {}", serde_json::to_string_pretty(&outcome?)?);

    // a payload the endpoint must refuse
    let bad = DownloadEvent {
        name: String::new(),
        loan_amount: Money::from_major(5_000),
        loan_period: None,
    };
    let outcome = sink.record(&bad, &time);
    println!("missing name -> status {}", http_status(&outcome));

    Ok(())
}
