//! integer-to-words conversion on the Indian numbering scale

const UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// convert a non-negative integer to English words on the crore/lakh scale
///
/// 1234 -> "One Thousand Two Hundred Thirty Four", 0 -> "Zero".
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let crore = n / 10_000_000;
    let lakh = (n % 10_000_000) / 100_000;
    let thousand = (n % 100_000) / 1_000;
    let remainder = n % 1_000;

    let mut parts: Vec<String> = Vec::new();

    if crore > 0 {
        // crore counts above 999 recurse (e.g. "One Lakh Crore")
        let crore_words = if crore < 1_000 {
            under_thousand(crore)
        } else {
            number_to_words(crore)
        };
        parts.push(format!("{crore_words} Crore"));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", under_thousand(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", under_thousand(thousand)));
    }
    if remainder > 0 {
        parts.push(under_thousand(remainder));
    }

    parts.join(" ")
}

/// words for 1..=999
fn under_thousand(n: u64) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, UNITS[(n % 10) as usize])
        };
    }
    let hundreds = format!("{} Hundred", UNITS[(n / 100) as usize]);
    if n % 100 == 0 {
        hundreds
    } else {
        format!("{} {}", hundreds, under_thousand(n % 100))
    }
}
