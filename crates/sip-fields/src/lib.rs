//! # siplog-sip-fields
//!
//! Extraction of structured fields from raw SIP message blobs found in log
//! records, so downstream tooling can query on `method`, `call_id`,
//! `from_tag` and friends instead of grepping opaque text.
//!
//! The engine is a stateless text-to-fields decoder: one blob in, one
//! ordered [`FieldMap`](types::FieldMap) out. It understands the shapes SIP
//! messages actually take in logs — CRLF or a literal `^M` marker standing
//! in for line endings, requests and responses, the name-addr/addr-spec
//! address sub-grammar on To/From/Contact (quoted display names, bare URIs,
//! wildcard Contact, flag parameters), and wire-accurate content length
//! recomputation for bodies stored with normalized newlines.
//!
//! It is deliberately **not** an RFC 3261 implementation: no transactions,
//! no network I/O, no message generation. For that, reach for a full SIP
//! stack.
//!
//! ## Examples
//!
//! ```rust
//! use siplog_sip_fields::prelude::*;
//!
//! let raw = "REGISTER sip:rd.pexip.com SIP/2.0^M\
//!            From: \"TE002\" <sip:TE002-sip@rd.pexip.com>;tag=81b7df65ad9d40db^M\
//!            CSeq: 1533475445 REGISTER^M^M";
//!
//! let fields = parse(raw)?;
//! assert_eq!(fields.get("method").as_str(), Some("REGISTER"));
//! assert_eq!(fields.get("from_display_name").as_str(), Some("TE002"));
//! assert_eq!(fields.get("from_tag").as_str(), Some("81b7df65ad9d40db"));
//! assert_eq!(fields.get("content_length").as_integer(), Some(0));
//! # Ok::<(), siplog_sip_fields::error::Error>(())
//! ```
//!
//! For the pipeline-facing include/exclude/prefix behavior, see
//! [`filter::SipFilter`]; for the JSON event view, see [`json`].

pub mod error;
pub mod filter;
pub mod json;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_message, ParserConfig, UriFailurePolicy};
pub use types::{Address, FieldMap, FieldValue, ParamValue, StartLine};

/// Parses a raw SIP blob with the default configuration (`^M` line marker,
/// skip-on-bad-URI policy).
pub fn parse(raw: &str) -> Result<FieldMap> {
    parser::parse_message(raw, &ParserConfig::default())
}

/// Common imports for working with the parser.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::filter::SipFilter;
    pub use crate::parse;
    pub use crate::parser::{
        normalize_header_name, parse_address, parse_header_line, parse_message, parse_start_line,
        ParserConfig, UriFailurePolicy,
    };
    pub use crate::types::{Address, FieldMap, FieldValue, ParamValue, StartLine};
}
