//! Plant Detail Shaping
//!
//! Flattens the nested growth conditions of a Trefle plant record into
//! top-level fields next to the record's own members.

use serde_json::{Map, Value};

/// Output key and JSON pointer (relative to `data`) for each flattened field.
pub const GROWTH_FIELDS: [(&str, &str); 4] = [
    ("min_temp", "/growth/minimum_temperature/deg_c"),
    ("max_temp", "/growth/maximum_temperature/deg_c"),
    ("min_humidity", "/growth/minimum_relative_humidity"),
    ("max_humidity", "/growth/maximum_relative_humidity"),
];

/// Reshapes a Trefle plant detail envelope.
///
/// Returns the members of `body.data` (an empty object if `data` is missing
/// or not an object) plus the `GROWTH_FIELDS`. A field whose path does not
/// resolve is left out entirely, even if `data` had a member of that name;
/// a path that resolves to `null` is kept as `null`.
pub fn shape_plant_details(mut body: Value) -> Value {
    let data = body
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);

    let extracted: Vec<(&str, Option<Value>)> = GROWTH_FIELDS
        .iter()
        .map(|(key, pointer)| (*key, data.pointer(pointer).cloned()))
        .collect();

    let mut details = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (key, value) in extracted {
        match value {
            Some(value) => {
                details.insert(key.to_string(), value);
            }
            None => {
                details.remove(key);
            }
        }
    }

    Value::Object(details)
}
