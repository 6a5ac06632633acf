//! Data model for extracted SIP fields.
//!
//! The parser's sole output is a [`FieldMap`], an insertion-ordered mapping
//! from normalized field names to [`FieldValue`]s. The intermediate
//! structures ([`StartLine`], [`Address`]) are exposed for callers that want
//! to work with a single header value rather than a whole message.

pub mod address;
pub mod field;
pub mod start_line;

pub use address::{Address, ParamValue};
pub use field::{FieldMap, FieldValue};
pub use start_line::StartLine;
