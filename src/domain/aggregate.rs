//! Weekly totals derived from completion marks

use crate::domain::habit::{is_checked, CompletionMap, Habit, HabitId};
use crate::domain::week::{iso_date, WeekWindow, DAYS_PER_WEEK};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Days in `week` marked done for `habit_id` (0..=7). Unknown ids yield 0.
pub fn per_habit_total(checks: &CompletionMap, habit_id: &str, week: &WeekWindow) -> usize {
    week.days
        .iter()
        .filter(|day| is_checked(checks, habit_id, &iso_date(**day)))
        .count()
}

/// Habits marked done on `date` (0..=habits.len())
pub fn per_day_total(checks: &CompletionMap, date: NaiveDate, habits: &[Habit]) -> usize {
    let key = iso_date(date);
    habits
        .iter()
        .filter(|habit| is_checked(checks, &habit.id, &key))
        .count()
}

/// Both reductions for one visible week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTotals {
    pub per_habit: HashMap<HabitId, usize>,
    pub per_day: [usize; DAYS_PER_WEEK],
}

impl WeekTotals {
    pub fn compute(habits: &[Habit], checks: &CompletionMap, week: &WeekWindow) -> Self {
        let per_habit = habits
            .iter()
            .map(|habit| (habit.id.clone(), per_habit_total(checks, &habit.id, week)))
            .collect();
        let per_day = week.days.map(|day| per_day_total(checks, day, habits));

        WeekTotals { per_habit, per_day }
    }

    /// Total for a habit, 0 when it is not part of the computation
    pub fn for_habit(&self, habit_id: &str) -> usize {
        self.per_habit.get(habit_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::habit::DayMarks;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn marks(days: &[&str]) -> DayMarks {
        days.iter().map(|d| (d.to_string(), true)).collect()
    }

    fn fixture() -> (Vec<Habit>, CompletionMap, WeekWindow) {
        let habits = vec![Habit::new("A", "Alpha"), Habit::new("B", "Beta")];
        let mut checks = CompletionMap::new();
        checks.insert("A".to_string(), marks(&["2024-01-01", "2024-01-03"]));
        checks.insert("B".to_string(), marks(&["2024-01-01"]));
        (habits, checks, WeekWindow::containing(date(2024, 1, 1)).unwrap())
    }

    #[test]
    fn test_per_habit_and_per_day_totals() {
        let (habits, checks, week) = fixture();

        assert_eq!(per_habit_total(&checks, "A", &week), 2);
        assert_eq!(per_habit_total(&checks, "B", &week), 1);
        assert_eq!(per_day_total(&checks, date(2024, 1, 1), &habits), 2);
        assert_eq!(per_day_total(&checks, date(2024, 1, 2), &habits), 0);
    }

    #[test]
    fn test_marks_outside_week_are_ignored() {
        let (_, mut checks, week) = fixture();
        checks
            .get_mut("A")
            .unwrap()
            .insert("2024-01-08".to_string(), true);
        assert_eq!(per_habit_total(&checks, "A", &week), 2);
    }

    #[test]
    fn test_false_marks_do_not_count() {
        let (habits, mut checks, week) = fixture();
        checks
            .get_mut("B")
            .unwrap()
            .insert("2024-01-02".to_string(), false);
        assert_eq!(per_habit_total(&checks, "B", &week), 1);
        assert_eq!(per_day_total(&checks, date(2024, 1, 2), &habits), 0);
    }

    #[test]
    fn test_unknown_habit_totals_zero() {
        let (_, checks, week) = fixture();
        assert_eq!(per_habit_total(&checks, "removed", &week), 0);
    }

    #[test]
    fn test_orphaned_marks_do_not_count_per_day() {
        let (habits, mut checks, _) = fixture();
        checks.insert("ghost".to_string(), marks(&["2024-01-01"]));
        assert_eq!(per_day_total(&checks, date(2024, 1, 1), &habits), 2);
    }

    #[test]
    fn test_week_totals() {
        let (habits, checks, week) = fixture();
        let totals = WeekTotals::compute(&habits, &checks, &week);

        assert_eq!(totals.for_habit("A"), 2);
        assert_eq!(totals.for_habit("B"), 1);
        assert_eq!(totals.for_habit("C"), 0);
        assert_eq!(totals.per_day, [2, 0, 1, 0, 0, 0, 0]);
    }
}
