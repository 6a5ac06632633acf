//! Whole-message parsing: line-ending normalization, head/body split,
//! content length accounting, and field folding.
//!
//! Raw blobs come out of log records where the original CRLF line endings
//! were replaced by a literal marker token (historically `^M`). The parser
//! first rewrites both real CRLF sequences and that marker to `\n`, then
//! splits the message into start line, header block and optional body.

use tracing::{debug, warn};

use crate::error::Result;
use crate::parser::address::parse_address;
use crate::parser::headers::parse_header_line;
use crate::parser::start_line::parse_start_line;
use crate::parser::utils::lenient_int;
use crate::types::{Address, FieldMap, ParamValue, StartLine};

/// The marker the legacy logging path substitutes for message line endings.
pub const DEFAULT_LINE_MARKER: &str = "^M";

/// What to do when a To/From/Contact value matches neither address shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriFailurePolicy {
    /// Keep the raw header field, skip its subfields, continue with the
    /// rest of the message. The default.
    #[default]
    Skip,
    /// Abort the whole message parse with
    /// [`Error::InvalidUri`](crate::error::Error::InvalidUri).
    Abort,
}

/// Immutable per-process configuration for [`parse_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Literal token to rewrite to `\n`, in addition to real CRLF pairs.
    pub line_marker: String,
    /// Failure granularity for bad address headers.
    pub uri_failures: UriFailurePolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            line_marker: DEFAULT_LINE_MARKER.to_string(),
            uri_failures: UriFailurePolicy::default(),
        }
    }
}

/// Rewrites CRLF pairs and the configured marker to `\n`, then strips any
/// leading blank lines (some upstream loggers prefix the message with a
/// spurious terminator).
fn normalize_line_endings(raw: &str, marker: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = if marker.is_empty() {
        text
    } else {
        text.replace(marker, "\n")
    };
    text.trim_start_matches('\n').to_string()
}

/// Byte length of the body as it would appear on the wire, i.e. with every
/// normalized `\n` expanded back to a two-byte CRLF.
fn wire_length(body: &str) -> i64 {
    (body.len() + body.matches('\n').count()) as i64
}

fn fold_start_line(fields: &mut FieldMap, start_line: StartLine) {
    match start_line {
        StartLine::Request {
            method,
            request_uri,
        } => {
            fields.insert("method", method);
            fields.insert("request_uri", request_uri);
        }
        StartLine::Response {
            status_code,
            status_reason,
        } => {
            fields.insert("status_code", status_code);
            if let Some(reason) = status_reason {
                fields.insert("status_reason", reason);
            }
        }
    }
}

fn fold_address(fields: &mut FieldMap, header_name: &str, address: Address) {
    fields.insert(format!("{}_uri", header_name), address.uri);
    if let Some(display_name) = address.display_name {
        fields.insert(format!("{}_display_name", header_name), display_name);
    }
    for (name, value) in address.params {
        let key = format!("{}_{}", header_name, name);
        match value {
            ParamValue::Value(text) => fields.insert(key, text),
            ParamValue::Flag => fields.insert(key, true),
        }
    }
}

/// Parses a raw SIP message blob into an ordered [`FieldMap`].
///
/// Fails only when the start line cannot be classified (and, under
/// [`UriFailurePolicy::Abort`], when an address header value is
/// unparseable). Individual malformed header lines are skipped.
///
/// Emitted fields: `method`/`request_uri` or `status_code`
/// (+`status_reason`), `content_length` (always), `body` and `headers` when
/// present, one field per header under its normalized name, and
/// `<name>_uri` / `<name>_display_name` / `<name>_<param>` subfields for
/// non-wildcard To/From/Contact headers. Later duplicates overwrite earlier
/// ones; an explicit `Content-Length` header overrides the body-derived
/// value.
pub fn parse_message(raw: &str, config: &ParserConfig) -> Result<FieldMap> {
    let text = normalize_line_endings(raw, &config.line_marker);
    let mut fields = FieldMap::new();

    // Body is everything after the first blank line.
    let (head, body) = match text.split_once("\n\n") {
        Some((head, body)) => (head, body),
        None => (text.as_str(), ""),
    };
    if body.is_empty() {
        fields.insert("content_length", 0i64);
    } else {
        fields.insert("body", body);
        fields.insert("content_length", wire_length(body));
    }

    let (start_line, header_block) = match head.split_once('\n') {
        Some((start_line, header_block)) => (start_line, header_block),
        None => (head, ""),
    };
    if !header_block.is_empty() {
        fields.insert("headers", header_block);
    }

    fold_start_line(&mut fields, parse_start_line(start_line)?);

    for line in header_block.split('\n') {
        let Some(entry) = parse_header_line(line) else {
            if !line.is_empty() {
                debug!(line, "skipping header line without a colon");
            }
            continue;
        };

        if entry.name == "content_length" {
            fields.insert("content_length", lenient_int(&entry.value));
            continue;
        }

        let wants_address = entry.is_address();
        let name = entry.name;
        fields.insert(name.clone(), entry.value.clone());
        if wants_address {
            match parse_address(&name, &entry.value) {
                Ok(address) => fold_address(&mut fields, &name, address),
                Err(error) => match config.uri_failures {
                    UriFailurePolicy::Skip => {
                        warn!(%error, header = %name, "keeping raw header, skipping address subfields");
                    }
                    UriFailurePolicy::Abort => return Err(error),
                },
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::FieldValue;

    fn parse(raw: &str) -> FieldMap {
        parse_message(raw, &ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_request_without_body() {
        let fields = parse("REGISTER sip:rd.pexip.com SIP/2.0^MCSeq: 1 REGISTER^M^M");
        assert_eq!(fields.get("method").as_str(), Some("REGISTER"));
        assert_eq!(fields.get("request_uri").as_str(), Some("sip:rd.pexip.com"));
        assert_eq!(fields.get("cseq").as_str(), Some("1 REGISTER"));
        assert_eq!(fields.get("content_length").as_integer(), Some(0));
        assert!(fields.get("body").is_absent());
    }

    #[test]
    fn test_response_start_line() {
        let fields = parse("SIP/2.0 200 OK^MCall-ID: x@y^M^M");
        assert_eq!(fields.get("status_code").as_integer(), Some(200));
        assert_eq!(fields.get("status_reason").as_str(), Some("OK"));
        assert!(fields.get("method").is_absent());
        assert!(fields.get("request_uri").is_absent());
    }

    #[test]
    fn test_real_crlf_terminators() {
        let fields = parse("SIP/2.0 180 Ringing\r\nCall-ID: z\r\n\r\n");
        assert_eq!(fields.get("status_code").as_integer(), Some(180));
        assert_eq!(fields.get("call_id").as_str(), Some("z"));
    }

    #[test]
    fn test_leading_blank_lines_are_stripped() {
        let fields = parse("^M^MINVITE sip:a@b SIP/2.0^MCall-ID: q^M^M");
        assert_eq!(fields.get("method").as_str(), Some("INVITE"));
        assert_eq!(fields.get("call_id").as_str(), Some("q"));
    }

    #[test]
    fn test_body_and_derived_content_length() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MContent-Type: text/plain^M^Mhello^Mworld");
        assert_eq!(fields.get("body").as_str(), Some("hello\nworld"));
        // "hello\r\nworld" on the wire.
        assert_eq!(fields.get("content_length").as_integer(), Some(12));
    }

    #[test]
    fn test_explicit_content_length_overrides_body() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MContent-Length: 3305^M^Mshort body");
        assert_eq!(fields.get("content_length").as_integer(), Some(3305));
        // The header folds into content_length only, not a text field.
        assert_eq!(fields.get("body").as_str(), Some("short body"));
    }

    #[test]
    fn test_empty_body_after_blank_line_counts_as_absent() {
        let fields = parse("REGISTER sip:a@b SIP/2.0^MContent-Length: 0^M^M");
        assert!(fields.get("body").is_absent());
        assert_eq!(fields.get("content_length").as_integer(), Some(0));
    }

    #[test]
    fn test_headers_block_stored_verbatim() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MVia: one^MVia: two^M^M");
        assert_eq!(fields.get("headers").as_str(), Some("Via: one\nVia: two"));
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MVia: one^MVia: two^M^M");
        assert_eq!(fields.get("via").as_str(), Some("two"));
    }

    #[test]
    fn test_malformed_header_line_is_skipped() {
        let fields = parse("INVITE sip:a@b SIP/2.0^Mgarbage without colon^MCall-ID: ok^M^M");
        assert!(fields.get("garbage without colon").is_absent());
        assert_eq!(fields.get("call_id").as_str(), Some("ok"));
    }

    #[test]
    fn test_address_header_subfields() {
        let fields = parse(
            "INVITE sip:a@b SIP/2.0^MFrom: \"TE002\" <sip:TE002-sip@rd.pexip.com>;tag=81b7df65ad9d40db^M^M",
        );
        assert_eq!(
            fields.get("from").as_str(),
            Some("\"TE002\" <sip:TE002-sip@rd.pexip.com>;tag=81b7df65ad9d40db")
        );
        assert_eq!(fields.get("from_display_name").as_str(), Some("TE002"));
        assert_eq!(fields.get("from_uri").as_str(), Some("sip:TE002-sip@rd.pexip.com"));
        assert_eq!(fields.get("from_tag").as_str(), Some("81b7df65ad9d40db"));
    }

    #[test]
    fn test_flag_parameter_folds_as_boolean() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MContact: <sip:c@d>;gruu^M^M");
        assert_eq!(fields.get("contact_gruu"), &FieldValue::Boolean(true));
    }

    #[test]
    fn test_wildcard_contact_has_no_subfields() {
        let fields = parse("REGISTER sip:a@b SIP/2.0^MContact: *^M^M");
        assert_eq!(fields.get("contact").as_str(), Some("*"));
        assert!(fields.get("contact_uri").is_absent());
        assert!(fields.get("contact_display_name").is_absent());
    }

    #[test]
    fn test_bad_uri_skip_policy_keeps_raw_header() {
        let fields = parse("INVITE sip:a@b SIP/2.0^MTo: not an address^MCall-ID: kept^M^M");
        assert_eq!(fields.get("to").as_str(), Some("not an address"));
        assert!(fields.get("to_uri").is_absent());
        // Later headers still processed.
        assert_eq!(fields.get("call_id").as_str(), Some("kept"));
    }

    #[test]
    fn test_bad_uri_abort_policy_fails_the_call() {
        let config = ParserConfig {
            uri_failures: UriFailurePolicy::Abort,
            ..ParserConfig::default()
        };
        let err = parse_message("INVITE sip:a@b SIP/2.0^MTo: not an address^M^M", &config)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidUri {
                header: "to".to_string(),
                text: "not an address".to_string(),
            }
        );
    }

    #[test]
    fn test_unclassifiable_start_line_fails() {
        let err = parse_message("JUNK^M^M", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidStartLine { .. }));
    }

    #[test]
    fn test_custom_line_marker() {
        let config = ParserConfig {
            line_marker: "|".to_string(),
            ..ParserConfig::default()
        };
        let fields = parse_message("SIP/2.0 486 Busy Here|CSeq: 2 INVITE||", &config).unwrap();
        assert_eq!(fields.get("status_code").as_integer(), Some(486));
        assert_eq!(fields.get("cseq").as_str(), Some("2 INVITE"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "SIP/2.0 200 OK^MFrom: <sip:a@b>;tag=1^MContact: <sip:c@d>;expires=60^M^Mv=0^M";
        assert_eq!(parse(raw), parse(raw));
    }

    #[test]
    fn test_request_response_exclusivity() {
        let request = parse("INVITE sip:a@b SIP/2.0^M^M");
        assert!(request.contains_key("method") && request.contains_key("request_uri"));
        assert!(!request.contains_key("status_code"));

        let response = parse("SIP/2.0 404 Not Found^M^M");
        assert!(response.contains_key("status_code"));
        assert!(!response.contains_key("method"));
    }
}
