//! Day references used to pick a day to mark or a week to show

use crate::error::{DisciplineError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A day relative to "today", or an absolute date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Next occurrence of a weekday (strictly after today)
    NextWeekday(Weekday),
    /// Same weekday one week back
    LastWeek,
    /// Same weekday one week ahead
    NextWeek,
    /// `YYYY-MM-DD`
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" | "this week" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            "last week" | "prev" | "previous week" => Ok(TimeReference::LastWeek),
            "next week" | "next" => Ok(TimeReference::NextWeek),
            _ => {
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                if let Some(rest) = normalized.strip_prefix("last ") {
                    return Self::offset_weekday(input, rest, TimeReference::LastWeekday);
                }
                if let Some(rest) = normalized.strip_prefix("next ") {
                    return Self::offset_weekday(input, rest, TimeReference::NextWeekday);
                }

                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| DisciplineError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    fn offset_weekday<F>(input: &str, day_str: &str, f: F) -> Result<Self>
    where
        F: FnOnce(Weekday) -> TimeReference,
    {
        parse_weekday(day_str)
            .map(f)
            .ok_or_else(|| DisciplineError::InvalidTimeReference(input.to_string()))
    }

    /// Resolve this time reference against `base_date` (normally today)
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::LastWeek => base_date - Duration::days(7),
            TimeReference::NextWeek => base_date + Duration::days(7),
            TimeReference::Weekday(target) => {
                let back = days_between(*target, base_date.weekday());
                base_date - Duration::days(back)
            }
            TimeReference::LastWeekday(target) => {
                let back = match days_between(*target, base_date.weekday()) {
                    0 => 7,
                    n => n,
                };
                base_date - Duration::days(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match days_between(base_date.weekday(), *target) {
                    0 => 7,
                    n => n,
                };
                base_date + Duration::days(forward)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

fn parse_weekday(day_str: &str) -> Option<Weekday> {
    match day_str {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days to walk forward from `from` to reach `to` (0..=6)
fn days_between(from: Weekday, to: Weekday) -> i64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as i64
}
