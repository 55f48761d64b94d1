//! Money, time and card formatters for the PokerStars text format.
//!
//! These are pure functions; they hold no state across hands.

use chrono::{DateTime, Utc};

use crate::errors::ConvertError;

/// Format an amount in minor currency units as `$<major>.<minor>`.
///
/// # Example
///
/// ```rust
/// use nowstars_engine::format::format_money;
///
/// assert_eq!(format_money(12345), "$123.45");
/// assert_eq!(format_money(0), "$0.00");
/// ```
pub fn format_money(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("${}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Format epoch milliseconds as `YYYY/MM/DD HH:MM:SS <label>`.
///
/// The clock is always UTC; `tz_label` is emitted verbatim.
pub fn format_timestamp(millis: i64, tz_label: &str) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(format!("{} {}", dt.format("%Y/%m/%d %H:%M:%S"), tz_label))
}

/// Like [`format_timestamp`], tagging an out-of-range value with its hand.
pub fn hand_timestamp(hand_id: &str, millis: i64, tz_label: &str) -> Result<String, ConvertError> {
    format_timestamp(millis, tz_label).ok_or_else(|| ConvertError::InvalidTimestamp {
        hand: hand_id.to_string(),
        millis,
    })
}

pub fn format_cards(cards: &[String]) -> String {
    cards.join(" ")
}
