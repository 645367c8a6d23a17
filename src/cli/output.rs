//! Output formatting utilities

use crate::domain::{iso_date, AppState, Habit, WeekTotals, WeekWindow};
use chrono::Datelike;

const DAY_COLUMN_WIDTH: usize = 7;

/// Render the week grid: one row per habit with `x` for done days and the
/// weekly count, followed by per-day totals.
pub fn format_week_grid(state: &AppState, week: &WeekWindow, totals: &WeekTotals) -> String {
    let mut output = format!("Week of {} ({})\n\n", week.label(), iso_date(week.start));

    if state.habits.is_empty() {
        output.push_str("No habits yet. Add one with 'discipline add <name>'\n");
        return output;
    }

    let position_width = state.habits.len().to_string().len();
    let name_width = state
        .habits
        .iter()
        .map(|h| h.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Habit".len());

    output.push_str(&format!(
        "{:<pw$}  {:<nw$}",
        "#",
        "Habit",
        pw = position_width,
        nw = name_width
    ));
    for day in &week.days {
        let head = format!("{} {}", day.format("%a"), day.day());
        output.push_str(&format!("{:^w$}", head, w = DAY_COLUMN_WIDTH));
    }
    output.push_str("  Week\n");

    let days = week.iso_days();
    for (index, habit) in state.habits.iter().enumerate() {
        output.push_str(&format!(
            "{:<pw$}  {:<nw$}",
            index + 1,
            habit.name,
            pw = position_width,
            nw = name_width
        ));
        for day in &days {
            let cell = if state.is_checked(&habit.id, day) { "x" } else { "." };
            output.push_str(&format!("{:^w$}", cell, w = DAY_COLUMN_WIDTH));
        }
        output.push_str(&format!("  {}/7\n", totals.for_habit(&habit.id)));
    }

    output.push_str(&format!(
        "{:<pw$}  {:<nw$}",
        "",
        "Total",
        pw = position_width,
        nw = name_width
    ));
    for count in totals.per_day {
        output.push_str(&format!("{:^w$}", count, w = DAY_COLUMN_WIDTH));
    }
    output.push('\n');

    output
}

/// Format habits as `position  id  name` lines
pub fn format_habit_list(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut output = String::new();
    for (index, habit) in habits.iter().enumerate() {
        output.push_str(&format!("{}  {}  {}\n", index + 1, habit.id, habit.name));
    }
    output
}
