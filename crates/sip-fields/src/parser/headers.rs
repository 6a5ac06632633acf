//! Header line splitting and name normalization.
//!
//! A header line is `Name: value`; the split is on the first colon only, so
//! values containing colons (Call-ID, Date, URIs) survive intact. Lines
//! without a colon are malformed and yield `None` — the message parser logs
//! and skips them, they are never fatal.

/// Header names whose values carry the address sub-grammar and spawn
/// `<name>_uri` / `<name>_display_name` / `<name>_<param>` subfields.
pub const ADDRESS_HEADERS: &[&str] = &["to", "from", "contact"];

/// A Contact value of exactly `*` (unregister-everything) has no address to
/// parse.
pub const WILDCARD: &str = "*";

/// A normalized header line: lowercase underscore-separated name plus the
/// trimmed raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    /// True when this header's value should additionally be parsed as an
    /// address (and is not the wildcard Contact).
    pub fn is_address(&self) -> bool {
        ADDRESS_HEADERS.contains(&self.name.as_str()) && self.value != WILDCARD
    }
}

/// Normalizes a header name to its field-map key: trimmed, lowercased, with
/// hyphens replaced by underscores. Idempotent.
pub fn normalize_header_name(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

/// Splits a single header line into a normalized entry, or `None` when the
/// line has no colon.
pub fn parse_header_line(line: &str) -> Option<HeaderEntry> {
    let (name, value) = line.split_once(':')?;
    Some(HeaderEntry {
        name: normalize_header_name(name),
        value: value.trim().to_string(),
    })
}
