//! Utility functions shared by the parsers.

/// Lenient integer coercion for numeric fields.
///
/// Skips leading whitespace, honors an optional sign, and parses the run of
/// leading ASCII digits; anything else (including an empty or fully
/// non-numeric token) yields `0`. The same coercion applies to every integer
/// field the parser emits, i.e. the status code and the `Content-Length`
/// header override.
pub fn lenient_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}
