//! # SIP Address Values
//!
//! An [`Address`] is the parsed form of a To/From/Contact header value:
//! an optional display name, a URI, and an ordered list of header
//! parameters. It covers the two on-the-wire shapes of
//! [RFC 3261 Section 20.10](https://datatracker.ietf.org/doc/html/rfc3261#section-20.10):
//!
//! ```text
//! name-addr  =  [ display-name ] LAQUOT addr-spec RAQUOT
//! addr-spec  =  SIP-URI / SIPS-URI / absoluteURI
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use siplog_sip_fields::types::{Address, ParamValue};
//!
//! let mut address = Address::new("sip:alice@example.com");
//! address.display_name = Some("Alice".to_string());
//! address.set_param("tag", ParamValue::Value("1928301774".to_string()));
//! address.set_param("lr", ParamValue::Flag);
//!
//! assert_eq!(address.tag(), Some("1928301774"));
//! assert!(matches!(address.param("lr"), Some(ParamValue::Flag)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a single header parameter.
///
/// A parameter with no `=` (e.g. `;gruu`) is a flag and folds into the
/// field map as boolean `true`; `key=value` folds in as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Value(String),
    Flag,
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Value(s) => Some(s.as_str()),
            ParamValue::Flag => None,
        }
    }
}

/// A parsed address header value: display name, URI and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Display name, present only when non-empty after trimming.
    pub display_name: Option<String>,
    /// The URI, scheme included, trimmed. For a name-addr form this is the
    /// text between the angle brackets, embedded URI parameters and all.
    pub uri: String,
    /// Header parameters in insertion order. Duplicate names overwrite.
    pub params: Vec<(String, ParamValue)>,
}

impl Address {
    pub fn new(uri: impl Into<String>) -> Self {
        Address {
            display_name: None,
            uri: uri.into(),
            params: Vec::new(),
        }
    }

    /// Sets a parameter, overwriting any previous value under the same name.
    pub fn set_param(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Convenience accessor for the `tag` parameter used in dialog
    /// identification.
    pub fn tag(&self) -> Option<&str> {
        self.param("tag").and_then(|v| v.as_str())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.display_name {
            write!(f, "\"{}\" ", name)?;
        }
        write!(f, "<{}>", self.uri)?;
        for (name, value) in &self.params {
            match value {
                ParamValue::Value(v) => write!(f, ";{}={}", name, v)?,
                ParamValue::Flag => write!(f, ";{}", name)?,
            }
        }
        Ok(())
    }
}
