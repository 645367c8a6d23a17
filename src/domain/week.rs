//! Monday-start week windows
//!
//! Dates are calendar dates (`NaiveDate`), so "local midnight" is implicit:
//! callers derive the reference date from the local clock
//! (`Local::now().date_naive()`) and never go through UTC.

use chrono::{Datelike, Days, Duration, NaiveDate};

/// Number of days shown in a week window
pub const DAYS_PER_WEEK: usize = 7;

/// Monday of the week containing `reference`
pub fn start_of_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_monday() as i64)
}

/// The seven consecutive days starting at `week_start`, or `None` when the
/// week runs past the last representable date
pub fn days_of(week_start: NaiveDate) -> Option<[NaiveDate; DAYS_PER_WEEK]> {
    let mut days = [week_start; DAYS_PER_WEEK];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = week_start.checked_add_days(Days::new(offset as u64))?;
    }
    Some(days)
}

/// Zero-padded `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Move a week start by whole weeks. Returns `None` only when the result
/// falls outside the representable calendar.
pub fn shift_week(week_start: NaiveDate, delta_weeks: i64) -> Option<NaiveDate> {
    Duration::try_weeks(delta_weeks).and_then(|delta| week_start.checked_add_signed(delta))
}

/// A visible week: its Monday and the seven days from Monday to Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    /// Window for the week containing `reference`. `None` at the edges of
    /// the calendar, where the Monday or the Sunday has no date.
    pub fn containing(reference: NaiveDate) -> Option<Self> {
        let back = Days::new(reference.weekday().num_days_from_monday().into());
        let start = reference.checked_sub_days(back)?;
        Some(WeekWindow {
            start,
            days: days_of(start)?,
        })
    }

    /// Same-offset window `delta_weeks` away
    pub fn shifted(&self, delta_weeks: i64) -> Option<Self> {
        shift_week(self.start, delta_weeks).and_then(Self::containing)
    }

    /// ISO date keys for each day, Monday first
    pub fn iso_days(&self) -> [String; DAYS_PER_WEEK] {
        self.days.map(iso_date)
    }

    pub fn end(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    /// Short label such as `Jan 1 - Jan 7`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d"),
            self.end().format("%b %-d")
        )
    }
}
