//! In-memory habit collection and completion marks

use crate::domain::habit::{AppState, CompletionMap, Habit};
use crate::domain::id::IdGenerator;
use crate::error::{DisciplineError, Result};

/// Owns the `AppState` and applies every mutation to it.
///
/// Empty names (after trimming) are never committed: `add_habit` and
/// `rename_habit` return `None` instead of failing.
pub struct HabitStore {
    state: AppState,
    ids: Box<dyn IdGenerator>,
}

impl HabitStore {
    pub fn new(state: AppState, ids: Box<dyn IdGenerator>) -> Self {
        HabitStore { state, ids }
    }

    /// Store holding the first-run example habits
    pub fn seeded(mut ids: Box<dyn IdGenerator>) -> Self {
        let state = AppState::seeded(ids.as_mut());
        HabitStore { state, ids }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn habits(&self) -> &[Habit] {
        &self.state.habits
    }

    pub fn checks(&self) -> &CompletionMap {
        &self.state.checks
    }

    /// Append a habit with a fresh id. Skipped when the trimmed name is empty.
    pub fn add_habit(&mut self, name: &str) -> Option<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let habit = Habit::new(self.ids.next_id(), name);
        self.state.habits.push(habit.clone());
        Some(habit)
    }

    /// Rename a habit. An empty trimmed name abandons the rename and keeps
    /// the current name; an unknown id is reported as `HabitNotFound`.
    pub fn rename_habit(&mut self, id: &str, new_name: &str) -> Result<Option<Habit>> {
        let name = new_name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let habit = self
            .state
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| DisciplineError::HabitNotFound(id.to_string()))?;
        habit.name = name.to_string();
        Ok(Some(habit.clone()))
    }

    /// Remove a habit and its marks. Returns whether anything was removed;
    /// unknown ids are a no-op.
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        let removed_marks = self.state.checks.remove(id).is_some();
        self.state.habits.len() != before || removed_marks
    }

    /// Flip the mark for `(id, date)` and return the new value. Works for
    /// ids with no habit too, leaving a dangling entry.
    pub fn toggle_check(&mut self, id: &str, date: &str) -> bool {
        let mark = self
            .state
            .checks
            .entry(id.to_string())
            .or_default()
            .entry(date.to_string())
            .or_insert(false);
        *mark = !*mark;
        *mark
    }

    /// Replace everything with imported data. No merging.
    pub fn replace_all(&mut self, habits: Vec<Habit>, checks: CompletionMap) {
        self.state = AppState { habits, checks };
    }

    /// Reset to no habits and no marks
    pub fn clear(&mut self) {
        self.state = AppState::default();
    }
}
