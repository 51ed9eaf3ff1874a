//!
//! Textual representation of JSON values in table cells.
//!

pub mod formatter;


use serde::Serialize;

use self::formatter::Formatter;

///
/// Returns the plain textual representation of `value`.
///
/// Strings are written without quotes, `null` and booleans with their JSON
/// spelling, arrays and objects as JSON text.
///
pub fn to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_owned(),
        serde_json::Value::Bool(value) => value.to_string(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::String(string) => string.to_owned(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => to_json(value),
    }
}

///
/// Serializes `value` to JSON text in the `json.dumps` layout.
///
pub fn to_json(value: &serde_json::Value) -> String {
    let mut buffer = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, Formatter);
    value.serialize(&mut serializer).expect("Always valid");
    String::from_utf8(buffer).expect("Always valid")
}
