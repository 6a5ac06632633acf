//! Parser for the SIP start line (RFC 3261 Section 7).
//!
//! ABNF Grammar:
//!   Request-Line = Method SP Request-URI SP SIP-Version
//!   Status-Line  = SIP-Version SP Status-Code SP Reason-Phrase
//!
//! Classification is by prefix: a line starting with `SIP/2.0` is a status
//! line, anything else is treated as a request line. This is the only stage
//! whose failure aborts a whole message parse.

use crate::error::{Error, Result};
use crate::parser::utils::lenient_int;
use crate::types::StartLine;

const SIP_VERSION: &str = "SIP/2.0";

/// Splits off the next whitespace-delimited token, returning it together
/// with the unconsumed remainder.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest)),
        None => Some((input, "")),
    }
}

/// Classifies a start line into a request or response.
///
/// Responses take at most three parts: the version token, the status code
/// and the reason remainder. The status code uses the shared lenient
/// coercion, so a non-numeric token yields `0` rather than a failure. A
/// missing reason phrase is absent, not empty.
///
/// Requests take the first two tokens as method and request URI; a trailing
/// SIP version token is discarded.
///
/// Fewer than two tokens of either shape is a malformed start line.
pub fn parse_start_line(line: &str) -> Result<StartLine> {
    let invalid = || Error::InvalidStartLine {
        line: line.to_string(),
    };

    if line.starts_with(SIP_VERSION) {
        let (_version, rest) = next_token(line).ok_or_else(invalid)?;
        let (code, rest) = next_token(rest).ok_or_else(invalid)?;
        let reason = rest.trim();
        Ok(StartLine::Response {
            status_code: lenient_int(code),
            status_reason: (!reason.is_empty()).then(|| reason.to_string()),
        })
    } else {
        let (method, rest) = next_token(line).ok_or_else(invalid)?;
        let (request_uri, _version) = next_token(rest).ok_or_else(invalid)?;
        Ok(StartLine::Request {
            method: method.to_string(),
            request_uri: request_uri.to_string(),
        })
    }
}
