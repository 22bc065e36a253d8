//! Recurring-task date arithmetic.
//!
//! # Responsibility
//! - Compute the next occurrence instant for a repeating task.
//!
//! # Invariants
//! - Pure function of its inputs; no clock access, no side effects.
//! - Never panics: arithmetic that cannot be represented returns the input
//!   instant unchanged.

use crate::model::task::{Repeat, RepeatUnit};
use chrono::{DateTime, Duration, Months, Utc};

/// Advances `when` by exactly one period of `repeat`.
///
/// - daily: +1 day; weekly: +7 days; monthly: +1 calendar month.
/// - custom: +`every` units (`every` is clamped to at least 1).
/// - `Repeat::None`: no-op; a correct caller never advances a non-repeating
///   task.
///
/// Month arithmetic clamps to the last valid day of the target month
/// (Jan 31 + 1 month lands on Feb 29 in a leap year, Feb 28 otherwise).
pub fn next_occurrence(when: DateTime<Utc>, repeat: Repeat) -> DateTime<Utc> {
    match repeat.normalized() {
        Repeat::None => when,
        Repeat::Daily => add_days(when, 1),
        Repeat::Weekly => add_days(when, 7),
        Repeat::Monthly => add_months(when, 1),
        Repeat::Custom { every, unit } => match unit {
            RepeatUnit::Days => add_days(when, i64::from(every)),
            RepeatUnit::Weeks => add_days(when, 7 * i64::from(every)),
            RepeatUnit::Months => add_months(when, every),
        },
    }
}

fn add_days(when: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    when.checked_add_signed(Duration::days(days)).unwrap_or(when)
}

fn add_months(when: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    when.checked_add_months(Months::new(months)).unwrap_or(when)
}
