//! Parsers for SIP message blobs.
//!
//! The engine is layered leaf-first: [`address`] handles a single
//! To/From/Contact value, [`headers`] splits and normalizes header lines,
//! [`start_line`] classifies the first line, and [`message`] composes all
//! three into one [`FieldMap`](crate::types::FieldMap).
//!
//! Every parser is a pure function over `&str`; there is no state held
//! across calls and no I/O.

pub mod address;
pub mod headers;
pub mod message;
pub mod start_line;
pub mod utils;

pub use address::parse_address;
pub use headers::{normalize_header_name, parse_header_line, HeaderEntry};
pub use message::{parse_message, ParserConfig, UriFailurePolicy, DEFAULT_LINE_MARKER};
pub use start_line::parse_start_line;
