//! Recursive content merge used by article edits.
//!
//! Objects are merged key by key, arrays element by element; any other
//! incoming value (including `null`) replaces the existing one. Keys missing
//! from the incoming payload are left alone.

use serde_json::{Map, Value};

/// Merge `incoming` into `target` in place
pub fn merge_content(target: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Merge a single value in place
fn merge_value(existing: &mut Value, incoming: &Value) {
    match (existing, incoming) {
        (Value::Object(target), Value::Object(source)) => merge_content(target, source),
        (Value::Array(target), Value::Array(source)) => {
            for (position, value) in source.iter().enumerate() {
                match target.get_mut(position) {
                    Some(slot) => merge_value(slot, value),
                    None => target.push(value.clone()),
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
