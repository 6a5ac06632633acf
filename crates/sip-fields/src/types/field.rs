//! # Field values and the field map
//!
//! Extracted fields are dynamically shaped: most headers are plain text, but
//! `status_code` and `content_length` are integers and flag parameters (for
//! example `gruu` on a Contact) are booleans. [`FieldValue`] is the explicit
//! sum over those shapes so consumers get exhaustiveness checking instead of
//! a stringly typed container.
//!
//! [`FieldMap`] preserves insertion order and implements last-write-wins on
//! duplicate keys: a header that appears twice in a message yields the value
//! of its last occurrence, at the position of its first.
//!
//! ## Examples
//!
//! ```rust
//! use siplog_sip_fields::types::{FieldMap, FieldValue};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("method", "INVITE");
//! fields.insert("content_length", 0i64);
//!
//! assert_eq!(fields.get("method").as_str(), Some("INVITE"));
//! assert_eq!(fields.get("content_length").as_integer(), Some(0));
//! assert!(fields.get("call_id").is_absent());
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The value of a single extracted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A textual value (the common case for header values).
    Text(String),
    /// An integer value (`status_code`, `content_length`).
    Integer(i64),
    /// A boolean value (flag parameters such as `;lr` or `;gruu`).
    Boolean(bool),
    /// No value. Returned by [`FieldMap::get`] for missing keys; never
    /// stored in a map by the parser.
    Absent,
}

impl FieldValue {
    /// Returns the text if this is a [`FieldValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`FieldValue::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`FieldValue::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// True when the value is [`FieldValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Boolean(v) => write!(f, "{}", v),
            FieldValue::Absent => Ok(()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(v) => serializer.serialize_i64(*v),
            FieldValue::Boolean(v) => serializer.serialize_bool(*v),
            FieldValue::Absent => serializer.serialize_unit(),
        }
    }
}

static ABSENT: FieldValue = FieldValue::Absent;

/// An insertion-ordered mapping from field name to [`FieldValue`].
///
/// Field names are lowercase with words separated by underscores (see
/// [`normalize_header_name`](crate::parser::normalize_header_name)).
/// Messages hold a couple of dozen fields at most, so lookups scan the
/// backing vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap(Vec<(String, FieldValue)>);

impl FieldMap {
    pub fn new() -> Self {
        FieldMap(Vec::new())
    }

    /// Inserts a field, overwriting the value in place if the key already
    /// exists. The key keeps the position of its first insertion.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Looks a field up by name. Missing keys yield [`FieldValue::Absent`]
    /// rather than an `Option` so callers can match exhaustively.
    pub fn get(&self, key: &str) -> &FieldValue {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or(&ABSENT)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut fields = FieldMap::new();
        fields.insert("method", "REGISTER");
        fields.insert("status_code", 200i64);
        fields.insert("lr", true);

        assert_eq!(fields.get("method").as_str(), Some("REGISTER"));
        assert_eq!(fields.get("status_code").as_integer(), Some(200));
        assert_eq!(fields.get("lr").as_bool(), Some(true));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_missing_key_is_absent() {
        let fields = FieldMap::new();
        assert!(fields.get("nope").is_absent());
        assert_eq!(fields.get("nope").as_str(), None);
        assert!(!fields.contains_key("nope"));
    }

    #[test]
    fn test_duplicate_insert_overwrites_in_place() {
        let mut fields = FieldMap::new();
        fields.insert("via", "first hop");
        fields.insert("call_id", "abc");
        fields.insert("via", "second hop");

        // Last write wins, position of the first insertion is kept.
        assert_eq!(fields.get("via").as_str(), Some("second hop"));
        assert_eq!(fields.len(), 2);
        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["via", "call_id"]);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut fields = FieldMap::new();
        fields.insert("b", "2");
        fields.insert("a", "1");
        fields.insert("c", "3");
        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
        assert_eq!(FieldValue::from(7i64), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(true), FieldValue::Boolean(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Text("OK".into()).to_string(), "OK");
        assert_eq!(FieldValue::Integer(404).to_string(), "404");
        assert_eq!(FieldValue::Boolean(true).to_string(), "true");
        assert_eq!(FieldValue::Absent.to_string(), "");
    }
}
