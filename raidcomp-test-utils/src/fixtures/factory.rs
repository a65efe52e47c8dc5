//! Factory functions for roster entries as they appear in the raiders file.

use serde_json::{json, Value};

/// Create a roster entry without item level or invite status.
///
/// # Arguments
/// - `name` - Character name
/// - `class` - Class identifier, a key of the class table
/// - `spec_id` - Index into the class's spec list
///
/// # Returns
/// - `Value` - The entry in its stored JSON form
pub fn raider(name: &str, class: &str, spec_id: usize) -> Value {
    json!({
        "name": name,
        "class": class,
        "spec": { "id": spec_id }
    })
}

/// Create a roster entry with an item level and invite status code.
pub fn raider_with(name: &str, class: &str, spec_id: usize, ilvl: u32, status: u8) -> Value {
    json!({
        "name": name,
        "class": class,
        "spec": { "id": spec_id, "ilvl": ilvl },
        "status": status.to_string()
    })
}
