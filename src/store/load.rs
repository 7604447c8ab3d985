//! Loading and repairing persisted state
//!
//! Stored blobs are never trusted. A blob that is not a JSON object resets its
//! map to empty; entries with a bad key or a bad value are dropped one by one.
//! Every repair is logged as a warning.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::{DATES_KEY, HISTORY_KEY, RECORDS_KEY, TrackingState};
use crate::core::models::{CompletionLog, HistoryRecord, PersonalRecord};
use crate::core::ports::KeyValueStore;

pub(super) fn load_state<S: KeyValueStore>(storage: &S) -> anyhow::Result<TrackingState> {
    let history = load_entries(storage, HISTORY_KEY, |value| {
        serde_json::from_value::<HistoryRecord>(value).map_err(|e| e.to_string())
    })?;

    let records = load_entries(storage, RECORDS_KEY, |value| {
        let record = serde_json::from_value::<PersonalRecord>(value).map_err(|e| e.to_string())?;
        if record.is_valid() {
            Ok(record)
        } else {
            Err(format!("invalid best weight {}", record.best_weight))
        }
    })?;

    let dates = load_entries(storage, DATES_KEY, |value| match value {
        Value::Array(items) => Ok(completion_log(items)),
        other => Err(format!("expected a list of dates, found {other}")),
    })?;

    Ok(TrackingState {
        history,
        records,
        dates,
    })
}

/// Load one map, dropping entries whose key or value does not parse
fn load_entries<K, V>(
    storage: &impl KeyValueStore,
    name: &str,
    convert: impl Fn(Value) -> Result<V, String>,
) -> anyhow::Result<BTreeMap<K, V>>
where
    K: FromStr + Ord,
    K::Err: Display,
{
    let Some(object) = load_object(storage, name)? else {
        return Ok(BTreeMap::new());
    };

    let mut entries = BTreeMap::new();
    for (raw_key, value) in object {
        let key = match raw_key.parse::<K>() {
            Ok(key) => key,
            Err(e) => {
                log::warn!("Dropping {name} entry with invalid key '{raw_key}': {e}");
                continue;
            },
        };
        match convert(value) {
            Ok(value) => {
                if entries.insert(key, value).is_some() {
                    log::warn!("Duplicate {name} entry '{raw_key}' replaced an earlier one");
                }
            },
            Err(e) => log::warn!("Dropping invalid {name} entry '{raw_key}': {e}"),
        }
    }
    Ok(entries)
}

/// Read a blob as a JSON object; anything else counts as empty
fn load_object(
    storage: &impl KeyValueStore,
    name: &str,
) -> anyhow::Result<Option<Map<String, Value>>> {
    let Some(raw) = storage.get(name)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => Ok(Some(object)),
        Ok(Value::Null) => Ok(None),
        Ok(other) => {
            log::warn!("Resetting {name}: expected a JSON object, found {}", kind(&other));
            Ok(None)
        },
        Err(e) => {
            log::warn!("Resetting {name}: stored data is not valid JSON ({e})");
            Ok(None)
        },
    }
}

fn completion_log(items: Vec<Value>) -> CompletionLog {
    let original = items.len();
    let dates: Vec<NaiveDate> = items
        .into_iter()
        .filter_map(|item| item.as_str().and_then(|s| s.parse().ok()))
        .collect();
    if dates.len() < original {
        log::warn!("Dropped {} invalid completion date(s)", original - dates.len());
    }
    CompletionLog::from_dates(dates)
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
