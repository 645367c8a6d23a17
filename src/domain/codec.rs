//! CSV export of a week and JSON snapshot import/export

use crate::domain::habit::{is_checked, AppState, CompletionMap, Habit};
use crate::domain::week::WeekWindow;
use crate::error::{DisciplineError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Quote a CSV field when it contains a comma, double quote or newline.
/// Inner quotes are doubled.
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One header row plus one row per habit in display order, `1`/`0` per day.
/// Rows are joined by `\n` with no trailing newline.
pub fn to_csv(habits: &[Habit], checks: &CompletionMap, week: &WeekWindow) -> String {
    let days = week.iso_days();

    let mut rows = Vec::with_capacity(habits.len() + 1);
    let mut header = vec!["Habit".to_string()];
    header.extend(days.iter().cloned());
    rows.push(header.join(","));

    for habit in habits {
        let mut cells = vec![escape_csv(&habit.name)];
        cells.extend(days.iter().map(|day| {
            if is_checked(checks, &habit.id, day) {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }));
        rows.push(cells.join(","));
    }

    rows.join("\n")
}

/// Pretty (2-space) JSON of the full state
pub fn to_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parse and validate an imported snapshot.
///
/// Invalid JSON yields `Json`; a document without a `habits` array and a
/// `checks` object, or whose entries don't have the expected types, yields
/// `ImportShape`. Nothing is returned partially. Input is raw bytes so that
/// invalid UTF-8 is reported as a parse failure.
pub fn from_json(input: impl AsRef<[u8]>) -> Result<AppState> {
    let document: Value = serde_json::from_slice(input.as_ref())?;
    validate_shape(document)
}

fn validate_shape(document: Value) -> Result<AppState> {
    let Value::Object(mut root) = document else {
        return Err(shape_error("top level must be an object"));
    };

    let habits = match root.remove("habits") {
        Some(value @ Value::Array(_)) => value,
        Some(_) => return Err(shape_error("'habits' must be an array")),
        None => return Err(shape_error("missing 'habits'")),
    };
    let checks = match root.remove("checks") {
        Some(value @ Value::Object(_)) => value,
        Some(_) => return Err(shape_error("'checks' must be an object")),
        None => return Err(shape_error("missing 'checks'")),
    };

    let habits: Vec<Habit> = serde_json::from_value(habits)
        .map_err(|e| shape_error(&format!("each habit needs a string 'id' and 'name' ({})", e)))?;
    let checks: CompletionMap = serde_json::from_value(checks).map_err(|e| {
        shape_error(&format!(
            "'checks' must map habit ids to {{date: true/false}} ({})",
            e
        ))
    })?;

    let mut seen = HashSet::new();
    if let Some(dup) = habits.iter().find(|h| !seen.insert(h.id.as_str())) {
        return Err(shape_error(&format!("duplicate habit id '{}'", dup.id)));
    }

    Ok(AppState { habits, checks })
}

fn shape_error(detail: &str) -> DisciplineError {
    DisciplineError::ImportShape(detail.to_string())
}
