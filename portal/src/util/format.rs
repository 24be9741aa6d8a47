//! Display formatting for amounts, dates and status badges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use ledger::{FeedbackStatus, StatusKey, TxKind, TxStatus};

/// `1234567.5` → `"1,234,567.50"`.
pub fn amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

/// Amount with a leading `+`/`-` for credit/debit rows.
pub fn signed_amount(kind: TxKind, value: f64) -> String {
    match kind {
        TxKind::Credit => format!("+{}", amount(value)),
        TxKind::Debit => format!("-{}", amount(value)),
        TxKind::Unknown => amount(value),
    }
}

/// Date part of an ISO-8601 timestamp; other strings pass through.
pub fn date(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => "—".to_owned(),
        Some(value) => match value.split_once('T') {
            Some((day, _)) if day.len() == 10 => day.to_owned(),
            _ => value.to_owned(),
        },
    }
}

pub fn tx_status_class(status: TxStatus) -> String {
    format!("badge badge--{}", status.key())
}

pub fn feedback_status_class(status: FeedbackStatus) -> String {
    format!("badge badge--{}", status.key())
}

/// `3` → `"★★★☆☆"`.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
