//! JSON view of extracted fields.
//!
//! The enclosing pipeline stores events as JSON documents; this module is
//! the bridge. [`FieldMap`] serializes as an object that preserves parse
//! order, with text fields as strings, `status_code`/`content_length` as
//! numbers, and flag parameters as booleans.

use serde_json::Value;

use crate::types::FieldMap;

impl FieldMap {
    /// Renders the fields as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
