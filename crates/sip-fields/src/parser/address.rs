//! Parser for address header values (To/From/Contact).
//!
//! RFC 3261 ABNF (approximated, matching the forms seen on the wire):
//!   contact-param  =  (name-addr / addr-spec) *(SEMI contact-params)
//!   name-addr      =  [ display-name ] LAQUOT addr-spec RAQUOT
//!   addr-spec      =  SIP-URI / SIPS-URI / absoluteURI
//!   display-name   =  *(token LWS) / quoted-string
//!
//! The grammar is matched in two attempts: the name-addr form first, then a
//! bare addr-spec limited to the `sip:` / `sips:` / `tel:` schemes. Whatever
//! trails the URI is the parameter list, split on `;`. There is no retry
//! beyond that — a value matching neither shape fails with
//! [`Error::InvalidUri`].

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    error::{Error as NomError, ErrorKind},
    sequence::{delimited, pair},
    IResult,
};

use crate::error::{Error, Result};
use crate::types::{Address, ParamValue};

/// Quoted display name: `"…"` with backslash escapes. The inner text is
/// captured verbatim, escapes included, minus the surrounding quotes.
fn quoted_string(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)));
    }
    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Ok((&input[idx + 1..], &input[1..idx])),
            _ => {}
        }
    }
    // Unterminated quote
    Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)))
}

/// Unquoted display name: a run of characters containing neither `"` nor
/// the opening angle bracket.
fn unquoted_display_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c| c != '<' && c != '"')(input)
}

/// name-addr: optional display name, then `<` URI `>`.
fn name_addr(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, display_name) = opt(alt((quoted_string, unquoted_display_name)))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, uri) = delimited(char('<'), take_while1(|c| c != '>'), char('>'))(input)?;
    Ok((input, (display_name, uri)))
}

/// Bare addr-spec: a supported scheme followed by anything up to a `;` or
/// space. The scheme is part of the captured URI.
fn bare_addr_spec(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((tag("sips:"), tag("sip:"), tag("tel:"))),
        take_while1(|c: char| c != ';' && c != ' '),
    ))(input)
}

/// Parses the trailing parameter list into the address. Segments are split
/// on `;`; a trimmed empty segment is skipped, `key=value` splits on the
/// first `=` with no further trimming, and a bare token is a flag.
fn parse_params(address: &mut Address, rest: &str) {
    for segment in rest.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((key, value)) => {
                address.set_param(key, ParamValue::Value(value.to_string()));
            }
            None => address.set_param(segment, ParamValue::Flag),
        }
    }
}

/// Parses one address header value into an [`Address`].
///
/// `header_name` is only used to label the error when neither shape
/// matches; policy for that error (skip vs. abort) belongs to the caller.
pub fn parse_address(header_name: &str, text: &str) -> Result<Address> {
    let shapes = alt((
        name_addr,
        map(bare_addr_spec, |uri| (None::<&str>, uri)),
    ))(text);

    let (rest, (display_name, uri)) = shapes.map_err(|_| Error::InvalidUri {
        header: header_name.to_string(),
        text: text.to_string(),
    })?;

    let mut address = Address::new(uri.trim());
    if let Some(name) = display_name {
        let name = name.trim();
        if !name.is_empty() {
            address.display_name = Some(name.to_string());
        }
    }
    parse_params(&mut address, rest);
    Ok(address)
}
