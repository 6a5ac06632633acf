//! Error types for SIP field extraction

use thiserror::Error;

/// Errors produced while decoding a SIP message blob into fields.
///
/// Only two failures are fatal to a parse call: an unclassifiable start line
/// and, under [`UriFailurePolicy::Abort`](crate::parser::UriFailurePolicy),
/// an address header value that matches neither the name-addr nor the bare
/// addr-spec shape. Everything else (a header line without a colon, a
/// non-numeric status code) degrades without aborting the call.
///
/// Both variants carry the offending raw text so callers can log a useful
/// diagnostic without re-parsing the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The first line of the message is neither a well-formed request line
    /// nor a well-formed status line (fewer than two whitespace-separated
    /// tokens).
    #[error("invalid start line: {line:?}")]
    InvalidStartLine { line: String },

    /// A To/From/Contact value could not be matched against the supported
    /// address shapes.
    #[error("failed to parse {header} header as an address: {text:?}")]
    InvalidUri { header: String, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;
