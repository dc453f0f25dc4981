// src/utils/format.rs

//! Display formatting helpers for terminal views.

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;

/// Relative age of a posting date ("Today", "3 days ago", ...).
///
/// Unparseable or missing dates render as "Recently"; dates in the future
/// clamp to "Today".
pub fn time_ago(posted_date: Option<&str>, today: NaiveDate) -> String {
    let Some(date) = posted_date.and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    else {
        return "Recently".to_string();
    };

    let days = (today - date).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    }
}

/// Salary range line, e.g. `$3,000 - $5,000 USD`. `None` when neither bound
/// is usable.
pub fn salary_range(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&str>,
) -> Option<String> {
    let currency = currency.unwrap_or("USD");
    let range = match (min, max) {
        (Some(min), Some(max)) => format!("${} - ${}", group_thousands(min), group_thousands(max)),
        (Some(min), None) => format!("from ${}", group_thousands(min)),
        (None, Some(max)) => format!("up to ${}", group_thousands(max)),
        (None, None) => return None,
    };
    Some(format!("{range} {currency}"))
}

/// Round and group an amount with thousands separators.
fn group_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Truncate to a maximum number of grapheme clusters, appending an ellipsis.
pub fn truncate(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        return text.to_string();
    }
    let mut cut: String = graphemes[..max_graphemes.saturating_sub(1)].concat();
    cut.push('…');
    cut
}

/// Proportional bar for terminal charts. `max` of zero renders empty.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}
