//! Reading markers back into tags.

use std::sync::OnceLock;

use regex::Regex;

use super::Tag;
use crate::core::Scalar;

/// Matches one marker: name in group 1, raw argument text in group 2.
///
/// Quoted argument values may contain `<` and `>`.
pub(crate) fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"<dz:([A-Za-z_][A-Za-z0-9_]*)((?:[^<>'"]|'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*")*)>"#,
        )
        .unwrap()
    })
}

/// Matches one argument: `key=value` (groups 1, 2) or a bare token (group 3).
fn arg_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"([A-Za-z_][A-Za-z0-9_]*)=('(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|[^ \t\r\n]+)|([^ \t\r\n]+)"#,
        )
        .unwrap()
    })
}

impl Tag {
    /// Parse a single marker such as `<dz:name a 2 key='v'>`.
    ///
    /// Inverse of `Display` for tags whose positional args contain no
    /// whitespace. Returns `None` unless the whole input is one marker.
    pub fn parse(marker: &str) -> Option<Self> {
        let caps = marker_regex().captures(marker)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != marker.len() {
            return None;
        }
        Some(Self::from_parts(&caps[1], caps.get(2).map_or("", |m| m.as_str())))
    }

    /// Build a tag from a marker's name and raw argument text.
    pub(crate) fn from_parts(name: &str, raw_args: &str) -> Self {
        let mut tag = Self::new(name);
        for caps in arg_regex().captures_iter(raw_args) {
            if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
                tag = tag.with_kwarg(key.as_str(), parse_literal(value.as_str()));
            } else if let Some(token) = caps.get(3) {
                tag = tag.with_arg(Scalar::from_token(token.as_str()));
            }
        }
        tag
    }
}

/// Parse a keyword value written by [`Scalar::repr`].
fn parse_literal(text: &str) -> Scalar {
    if let Some(inner) = strip_quotes(text) {
        return Scalar::Str(unescape(inner));
    }
    match text {
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }
    match Scalar::from_token(text) {
        Scalar::Str(s) => s.parse::<f64>().map(Scalar::Float).unwrap_or(Scalar::Str(s)),
        other => other,
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|q| {
        text.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|_| text.len() >= 2)
    })
}

/// Undo [`Scalar::repr`] escaping: `\n`, `\t`, `\r`, `\xNN`, and `\` before any other char.
fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 2 => out.push(decoded),
                    _ => {
                        out.push_str("\\x");
                        out.push_str(&hex);
                    }
                }
            }
            Some(next) => out.push(next),
            None => out.push('\\'),
        }
    }
    out
}
