pub mod words;

use chrono::{Datelike, NaiveDate};

use crate::decimal::Money;

pub use words::number_to_words;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// format an integer with Indian digit grouping
///
/// The last three digits form one group; everything before them is grouped
/// in pairs from the right: 1234567 -> "12,34,567".
pub fn format_grouped(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_bytes = head.as_bytes();
        for (i, b) in head_bytes.iter().enumerate() {
            if i > 0 && (head_bytes.len() - i) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(*b as char);
        }
        grouped.push(',');
        grouped.push_str(tail);
    }

    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// format a float with Indian digit grouping, degrading non-finite input to "0"
pub fn format_grouped_f64(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    format_grouped(n.round() as i64)
}

/// rupee display form used across every presentation surface
pub fn rupees(amount: Money) -> String {
    format!("\u{20B9} {}", format_grouped(amount.to_i64()))
}

/// format a date as DD MMM YYYY (05 Jan 2024)
pub fn format_local_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year()
    )
}

/// format a date as DD MMM YY (05 Jan 24), used on the certificate
pub fn format_short_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {:02}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}
