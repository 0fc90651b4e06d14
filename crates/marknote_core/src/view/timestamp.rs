//! Bucketed timestamp labels for sidebar rows.
//!
//! # Responsibility
//! - Render an entity timestamp relative to "now": time-of-day within
//!   a day, weekday name within a week, full date beyond that.
//!
//! # Invariants
//! - Buckets use true 24h/7d thresholds in milliseconds.
//! - Future timestamps render as time-of-day.
//! - Rendering is pure over `(timestamp_ms, now_ms)`; callers supply
//!   the clock.

use chrono::{DateTime, Utc};

/// Age below which a timestamp renders as time-of-day.
pub const DAY_MS: i64 = 86_400_000;
/// Age below which a timestamp renders as a weekday name.
pub const WEEK_MS: i64 = 604_800_000;

/// Renders the sidebar label for `timestamp_ms` as seen at `now_ms`.
///
/// Timestamps outside chrono's representable range fall back to the
/// raw millisecond value.
pub fn timestamp_label(timestamp_ms: i64, now_ms: i64) -> String {
    let Some(moment) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    let age_ms = now_ms - timestamp_ms;
    if age_ms < DAY_MS {
        moment.format("%I:%M %p").to_string()
    } else if age_ms < WEEK_MS {
        moment.format("%A").to_string()
    } else {
        moment.format("%B %-d, %Y").to_string()
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{timestamp_label, DAY_MS, WEEK_MS};

    // 2024-01-15 (a Monday) 14:30:00 UTC.
    const MONDAY_AFTERNOON_MS: i64 = 1_705_329_000_000;

    #[test]
    fn fresh_timestamp_renders_time_of_day() {
        let now = MONDAY_AFTERNOON_MS + 3_600_000;
        assert_eq!(timestamp_label(MONDAY_AFTERNOON_MS, now), "02:30 PM");
    }

    #[test]
    fn future_timestamp_renders_time_of_day() {
        let now = MONDAY_AFTERNOON_MS - 3_600_000;
        assert_eq!(timestamp_label(MONDAY_AFTERNOON_MS, now), "02:30 PM");
    }

    #[test]
    fn week_old_timestamp_renders_weekday() {
        let now = MONDAY_AFTERNOON_MS + 2 * DAY_MS;
        assert_eq!(timestamp_label(MONDAY_AFTERNOON_MS, now), "Monday");
    }

    #[test]
    fn old_timestamp_renders_full_date() {
        let now = MONDAY_AFTERNOON_MS + 2 * WEEK_MS;
        assert_eq!(timestamp_label(MONDAY_AFTERNOON_MS, now), "January 15, 2024");
    }

    #[test]
    fn bucket_boundaries_are_exclusive_below() {
        let just_inside_day = MONDAY_AFTERNOON_MS + DAY_MS - 1;
        assert_eq!(
            timestamp_label(MONDAY_AFTERNOON_MS, just_inside_day),
            "02:30 PM"
        );
        let exactly_one_day = MONDAY_AFTERNOON_MS + DAY_MS;
        assert_eq!(
            timestamp_label(MONDAY_AFTERNOON_MS, exactly_one_day),
            "Monday"
        );
        let exactly_one_week = MONDAY_AFTERNOON_MS + WEEK_MS;
        assert_eq!(
            timestamp_label(MONDAY_AFTERNOON_MS, exactly_one_week),
            "January 15, 2024"
        );
    }

    #[test]
    fn unrepresentable_timestamp_falls_back_to_raw_value() {
        assert_eq!(timestamp_label(i64::MAX, 0), i64::MAX.to_string());
    }
}
