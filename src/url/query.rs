//! Query string encoding.
//!
//! Two schemes are in use:
//!
//! | Function        | Used by           | Encodes       | Space | `/ = &`        |
//! |-----------------|-------------------|---------------|-------|----------------|
//! | `encode_query`  | relative resolve  | whole string  | `+`   | literal        |
//! | `encode_pairs`  | absolute resolve  | values only   | `%20` | encoded        |

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::QueryParams;

/// Unreserved characters (`A-Z a-z 0-9 _ . - ~`) are never encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Joined-query scheme: separators stay literal, space is swapped for `+` afterwards.
const QUERY_SAFE: &AsciiSet = &UNRESERVED
    .remove(b'/')
    .remove(b'=')
    .remove(b'&')
    .remove(b' ');


/// Encode parameters as `key=value` pairs joined by `&`, sorted by key.
///
/// Returns an empty string for no parameters; callers must not append `?` then.
///
/// # Examples
/// ```
/// use dzlink::{params, url::encode_query};
/// assert_eq!(encode_query(&params! { q = "test one", age = 15 }), "age=15&q=test+one");
/// ```
pub fn encode_query(params: &QueryParams) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    utf8_percent_encode(&joined, QUERY_SAFE)
        .to_string()
        .replace(' ', "+")
}

/// Percent-encode a single value; only unreserved characters stay literal.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Encode parameters as `key=encode_value(value)` pairs joined by `&`, sorted by key.
///
/// Keys are written verbatim.
pub fn encode_pairs(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_value(&value.to_string())))
        .collect::<Vec<_>>()
        .join("&")
}
