use crate::types::BudgetLevel;
use chrono::{DateTime, NaiveDate};
use tracing::warn;

/// Nights assumed when either travel date cannot be read.
pub const DEFAULT_NIGHTS: u32 = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Nightly price band for a budget tier, in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRate {
    pub min: u32,
    pub max: u32,
}

impl BudgetLevel {
    pub fn daily_rate(self) -> DailyRate {
        match self {
            BudgetLevel::Budget => DailyRate { min: 160, max: 260 },
            BudgetLevel::Midrange => DailyRate { min: 280, max: 420 },
            BudgetLevel::Luxury => DailyRate { min: 520, max: 780 },
        }
    }
}

/// Number of nights between two ISO dates, never less than one.
///
/// Accepts `YYYY-MM-DD` (read as midnight UTC) or RFC 3339 date-times.
/// Unreadable input yields [`DEFAULT_NIGHTS`]; inverted ranges floor to 1.
pub fn trip_length(start: &str, end: &str) -> u32 {
    let (Some(start_ms), Some(end_ms)) = (epoch_millis(start), epoch_millis(end)) else {
        warn!(
            target: "vacation_planner::planner",
            start,
            end,
            default = DEFAULT_NIGHTS,
            "could not parse travel dates, using default trip length"
        );
        return DEFAULT_NIGHTS;
    };

    let nights = ((end_ms - start_ms) as f64 / MILLIS_PER_DAY).round();
    if nights < 1.0 {
        1
    } else {
        nights.min(u32::MAX as f64) as u32
    }
}

fn epoch_millis(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|moment| moment.timestamp_millis())
}

/// Render a dollar amount the way en-US currency formatting does with no
/// fraction digits: `$1,234`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

/// Trip-wide price range for a tier, e.g. `$1,120 – $1,680`.
pub fn estimate_price(budget: BudgetLevel, nights: u32) -> String {
    let rate = budget.daily_rate();
    let nights = f64::from(nights);

    format!(
        "{} – {}",
        format_usd(f64::from(rate.min) * nights),
        format_usd(f64::from(rate.max) * nights)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_nights_between_calendar_dates() {
        assert_eq!(trip_length("2024-03-01", "2024-03-05"), 4);
        assert_eq!(trip_length("2024-02-27", "2024-03-02"), 4);
    }

    #[test]
    fn same_day_and_inverted_ranges_floor_to_one() {
        assert_eq!(trip_length("2024-03-05", "2024-03-05"), 1);
        assert_eq!(trip_length("2024-03-05", "2024-03-01"), 1);
    }

    #[test]
    fn unreadable_dates_fall_back_to_default() {
        assert_eq!(trip_length("", ""), DEFAULT_NIGHTS);
        assert_eq!(trip_length("2024-03-01", "next friday"), DEFAULT_NIGHTS);
        assert_eq!(trip_length("2024-02-30", "2024-03-05"), DEFAULT_NIGHTS);
    }

    #[test]
    fn rounds_partial_days_from_timestamps() {
        assert_eq!(
            trip_length("2024-03-01T08:00:00Z", "2024-03-04T22:00:00Z"),
            4
        );
        assert_eq!(
            trip_length("2024-03-01T08:00:00Z", "2024-03-04T18:00:00Z"),
            3
        );
    }

    #[test]
    fn formats_whole_dollars_with_grouping() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1604.8), "$1,605");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn estimates_use_tier_bounds() {
        assert_eq!(estimate_price(BudgetLevel::Midrange, 4), "$1,120 – $1,680");
        assert_eq!(estimate_price(BudgetLevel::Luxury, 5), "$2,600 – $3,900");
    }
}
