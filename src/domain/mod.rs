//! Domain layer - Habits, week windows, totals and interchange formats

pub mod aggregate;
pub mod codec;
pub mod habit;
pub mod id;
pub mod store;
pub mod time_ref;
pub mod week;

pub use aggregate::{per_day_total, per_habit_total, WeekTotals};
pub use habit::{AppState, CompletionMap, DayMarks, Habit, HabitId};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use store::HabitStore;
pub use time_ref::TimeReference;
pub use week::{days_of, iso_date, shift_week, start_of_week, WeekWindow};
