//! # SIP Start Line
//!
//! The first line of a SIP message distinguishes a request
//! (`METHOD URI SIP/2.0`) from a response (`SIP/2.0 CODE REASON`), per
//! [RFC 3261 Section 7](https://datatracker.ietf.org/doc/html/rfc3261#section-7).
//! Exactly one variant is produced per message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A classified SIP start line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartLine {
    /// A request line, e.g. `REGISTER sip:rd.example.com SIP/2.0`.
    /// The trailing SIP version token is discarded.
    Request {
        method: String,
        request_uri: String,
    },
    /// A status line, e.g. `SIP/2.0 200 OK`. A missing reason phrase is
    /// `None`, never an empty string.
    Response {
        status_code: i64,
        status_reason: Option<String>,
    },
}

impl StartLine {
    pub fn is_request(&self) -> bool {
        matches!(self, StartLine::Request { .. })
    }

    pub fn is_response(&self) -> bool {
        matches!(self, StartLine::Response { .. })
    }
}

impl fmt::Display for StartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartLine::Request {
                method,
                request_uri,
            } => write!(f, "{} {}", method, request_uri),
            StartLine::Response {
                status_code,
                status_reason: Some(reason),
            } => write!(f, "{} {}", status_code, reason),
            StartLine::Response { status_code, .. } => write!(f, "{}", status_code),
        }
    }
}
