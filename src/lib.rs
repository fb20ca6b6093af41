pub mod certificate;
pub mod decimal;
pub mod download;
pub mod errors;
pub mod format;
pub mod report;
pub mod schedule;
pub mod types;

// re-export key types
pub use certificate::{CertificateCard, CertificateData, CertificateTemplate};
pub use decimal::{Money, Rate};
pub use download::{
    http_status, DownloadEvent, DownloadRecord, DownloadSink, InMemoryDownloadLog,
};
pub use errors::{LoanError, Result};
pub use format::{
    format_grouped, format_grouped_f64, format_local_date, format_short_date, number_to_words,
    rupees,
};
pub use report::{LoanReport, ScheduleRow};
pub use schedule::{AmortizationSchedule, PaymentRecord};
pub use types::{LoanParameters, LoanParametersBuilder, LoanUpdate};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
