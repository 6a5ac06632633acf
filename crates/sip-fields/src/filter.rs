//! Caller-side field selection and prefixing.
//!
//! The parser always returns every field it discovered; which of them end up
//! on the enclosing log event, and under what names, is the caller's
//! decision. [`SipFilter`] packages that decision the way the surrounding
//! pipeline consumes it: an include list (empty means everything), an
//! exclude list that always wins, and a prefix prepended to the surviving
//! keys.
//!
//! ## Examples
//!
//! ```rust
//! use siplog_sip_fields::filter::SipFilter;
//!
//! let filter = SipFilter::new();
//! let fields = filter
//!     .extract("REGISTER sip:rd.pexip.com SIP/2.0^MCSeq: 7 REGISTER^M^M")
//!     .unwrap();
//!
//! assert!(fields.iter().any(|(k, v)| k == "sip_method" && v.as_str() == Some("REGISTER")));
//! // cseq is in the default include list, via is not.
//! assert!(fields.iter().any(|(k, _)| k == "sip_cseq"));
//! assert!(!fields.iter().any(|(k, _)| k == "sip_via"));
//! ```

use crate::error::Result;
use crate::parser::{parse_message, ParserConfig};
use crate::types::FieldValue;

/// Fields forwarded to the event when no include list is configured
/// explicitly. Matches the headers operators actually query on.
pub const DEFAULT_INCLUDE_KEYS: &[&str] = &[
    "method",
    "request_uri",
    "status_code",
    "status_reason",
    "call_id",
    "contact",
    "contact_uri",
    "contact_expires",
    "cseq",
    "from_uri",
    "from_display_name",
    "from_tag",
    "from_epid",
    "to_uri",
    "to_display_name",
    "to_tag",
    "to_epid",
    "user_agent",
];

/// Default prefix prepended to every forwarded field name.
pub const DEFAULT_PREFIX: &str = "sip_";

/// Parses SIP blobs and selects/prefixes the fields to forward.
#[derive(Debug, Clone)]
pub struct SipFilter {
    prefix: String,
    include_keys: Vec<String>,
    exclude_keys: Vec<String>,
    config: ParserConfig,
}

impl Default for SipFilter {
    fn default() -> Self {
        SipFilter {
            prefix: DEFAULT_PREFIX.to_string(),
            include_keys: DEFAULT_INCLUDE_KEYS.iter().map(|k| k.to_string()).collect(),
            exclude_keys: Vec::new(),
            config: ParserConfig::default(),
        }
    }
}

impl SipFilter {
    pub fn new() -> Self {
        SipFilter::default()
    }

    /// Replaces the key prefix (default `sip_`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the include list. An empty list admits every field.
    pub fn with_include_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the exclude list. Exclusion wins over inclusion.
    pub fn with_exclude_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the parser configuration (line marker, URI failure policy).
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether a field (by its unprefixed name) is forwarded.
    pub fn want_key(&self, key: &str) -> bool {
        if !self.include_keys.is_empty() && !self.include_keys.iter().any(|k| k == key) {
            return false;
        }
        !self.exclude_keys.iter().any(|k| k == key)
    }

    /// Parses a raw blob and returns the prefixed fields that survive the
    /// include/exclude configuration, in parse order.
    pub fn extract(&self, raw: &str) -> Result<Vec<(String, FieldValue)>> {
        let fields = parse_message(raw, &self.config)?;
        Ok(fields
            .into_iter()
            .filter(|(key, _)| self.want_key(key))
            .map(|(key, value)| (format!("{}{}", self.prefix, key), value))
            .collect())
    }
}
