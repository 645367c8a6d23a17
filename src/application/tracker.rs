//! Tracker - the single controller over habits and their persistence

use crate::domain::{
    codec, iso_date, AppState, Habit, HabitStore, IdGenerator, WeekTotals, WeekWindow,
};
use crate::error::{DisciplineError, Result};
use crate::infrastructure::{Export, PersistenceGateway};
use chrono::NaiveDate;
use log::{debug, info, warn};

/// Filename of the full JSON snapshot export
pub const JSON_EXPORT_FILENAME: &str = "discipline-data.json";

/// Filename of the CSV export for the week starting `week_start`
pub fn csv_export_filename(week_start: NaiveDate) -> String {
    format!("discipline-{}.csv", iso_date(week_start))
}

/// Owns the in-memory state and writes it back to the gateway after every
/// mutation. Gateway failures are logged and otherwise ignored.
pub struct Tracker<G: PersistenceGateway> {
    store: HabitStore,
    gateway: G,
}

impl<G: PersistenceGateway> Tracker<G> {
    /// Load persisted state, seeding example habits when nothing is stored.
    /// An unreadable snapshot starts an empty session instead.
    pub fn open(gateway: G, ids: Box<dyn IdGenerator>) -> Self {
        match gateway.load() {
            Ok(Some(state)) => {
                debug!(
                    "event=state_loaded habits={} orphaned={}",
                    state.habits.len(),
                    state.orphaned_ids().len()
                );
                Tracker {
                    store: HabitStore::new(state, ids),
                    gateway,
                }
            }
            Ok(None) => {
                let mut tracker = Tracker {
                    store: HabitStore::seeded(ids),
                    gateway,
                };
                info!("event=state_seeded habits={}", tracker.habits().len());
                tracker.persist();
                tracker
            }
            Err(e) => {
                warn!("event=state_load_failed error={}", e);
                Tracker {
                    store: HabitStore::new(AppState::default(), ids),
                    gateway,
                }
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn habits(&self) -> &[Habit] {
        self.store.habits()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Find a habit by 1-based display position, then exact id, then exact name
    pub fn resolve_habit(&self, selector: &str) -> Result<&Habit> {
        let habits = self.habits();
        let selector = selector.trim();

        if let Ok(position) = selector.parse::<usize>() {
            if let Some(habit) = position.checked_sub(1).and_then(|i| habits.get(i)) {
                return Ok(habit);
            }
        }

        habits
            .iter()
            .find(|h| h.id == selector)
            .or_else(|| habits.iter().find(|h| h.name == selector))
            .ok_or_else(|| DisciplineError::HabitNotFound(selector.to_string()))
    }

    pub fn add_habit(&mut self, name: &str) -> Option<Habit> {
        let habit = self.store.add_habit(name)?;
        info!("event=habit_added id={}", habit.id);
        self.persist();
        Some(habit)
    }

    pub fn rename_habit(&mut self, id: &str, new_name: &str) -> Result<Option<Habit>> {
        let renamed = self.store.rename_habit(id, new_name)?;
        if let Some(habit) = &renamed {
            info!("event=habit_renamed id={}", habit.id);
            self.persist();
        }
        Ok(renamed)
    }

    /// Confirmation is the caller's job
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let removed = self.store.remove_habit(id);
        if removed {
            info!("event=habit_removed id={}", id);
            self.persist();
        }
        removed
    }

    /// Flip the mark for `id` on `date`; returns the new value
    pub fn toggle(&mut self, id: &str, date: NaiveDate) -> bool {
        let day = iso_date(date);
        let checked = self.store.toggle_check(id, &day);
        debug!("event=check_toggled id={} date={} checked={}", id, day, checked);
        self.persist();
        checked
    }

    /// Replace all state with a JSON snapshot. On error nothing changes.
    pub fn import_json(&mut self, input: impl AsRef<[u8]>) -> Result<()> {
        let imported = codec::from_json(input).map_err(|e| {
            warn!("event=import_rejected error={}", e);
            e
        })?;

        info!(
            "event=import_applied habits={} checks={}",
            imported.habits.len(),
            imported.checks.len()
        );
        self.store.replace_all(imported.habits, imported.checks);
        self.persist();
        Ok(())
    }

    /// Drop all habits and marks and erase the persisted copy. The empty
    /// state is then saved like any other mutation, so the next session
    /// starts empty instead of re-seeding.
    pub fn clear(&mut self) {
        self.store.clear();
        info!("event=state_cleared");
        if let Err(e) = self.gateway.clear() {
            warn!("event=persist_clear_failed error={}", e);
        }
        self.persist();
    }

    pub fn totals(&self, week: &WeekWindow) -> WeekTotals {
        WeekTotals::compute(self.store.habits(), self.store.checks(), week)
    }

    pub fn export_csv(&self, week: &WeekWindow) -> Export {
        let content = codec::to_csv(self.store.habits(), self.store.checks(), week);
        Export::new(csv_export_filename(week.start), content)
    }

    pub fn export_json(&self) -> Result<Export> {
        let content = codec::to_json(self.store.state())?;
        Ok(Export::new(JSON_EXPORT_FILENAME, content))
    }

    fn persist(&mut self) {
        if let Err(e) = self.gateway.save(self.store.state()) {
            warn!("event=persist_failed error={}", e);
        }
    }
}
