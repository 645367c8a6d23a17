//! Habits, completion marks and the full application state

use crate::domain::id::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque unique habit identifier
pub type HabitId = String;

/// Per-habit marks keyed by ISO date (`YYYY-MM-DD`). Only `true` counts as
/// completed; explicit `false` entries are kept as-is.
pub type DayMarks = BTreeMap<String, bool>;

/// Habit id -> day marks. May hold entries for habits that no longer exist.
pub type CompletionMap = BTreeMap<HabitId, DayMarks>;

/// Names given to the habits created on first run
pub const SEED_HABIT_NAMES: [&str; 3] = ["Wake early", "Exercise", "Deep work (2h)"];

/// Absent and `false` both mean "not done"
pub fn is_checked(checks: &CompletionMap, habit_id: &str, date: &str) -> bool {
    checks
        .get(habit_id)
        .and_then(|marks| marks.get(date))
        .copied()
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
}

impl Habit {
    pub fn new(id: impl Into<HabitId>, name: impl Into<String>) -> Self {
        Habit {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Everything that gets persisted and exported as JSON.
///
/// `habits` is in display order. Missing fields deserialize as empty so a
/// partially written snapshot still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub checks: CompletionMap,
}

impl AppState {
    /// First-run state: the example habits with fresh ids and no marks
    pub fn seeded(ids: &mut dyn IdGenerator) -> Self {
        AppState {
            habits: SEED_HABIT_NAMES
                .iter()
                .map(|name| Habit::new(ids.next_id(), *name))
                .collect(),
            checks: CompletionMap::new(),
        }
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Whether `habit_id` is marked done on `date`
    pub fn is_checked(&self, habit_id: &str, date: &str) -> bool {
        is_checked(&self.checks, habit_id, date)
    }

    /// `checks` keys with no matching habit
    pub fn orphaned_ids(&self) -> Vec<&str> {
        self.checks
            .keys()
            .filter(|id| self.habit(id).is_none())
            .map(String::as_str)
            .collect()
    }
}
