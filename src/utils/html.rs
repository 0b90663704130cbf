//! HTML element construction.
//!
//! Content and attribute values are written verbatim. Callers pass trusted
//! or already-sanitized input; placeholder markers must survive untouched.

/// Build `<name attr="value"...>content</name>`.
///
/// # Example
/// ```ignore
/// assert_eq!(element("a", "Home", &[("href", "/")]), r#"<a href="/">Home</a>"#);
/// ```
pub fn element(name: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(name.len() * 2 + content.len() + 5);
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Build an anchor element.
#[inline]
pub fn anchor(href: &str, text: &str) -> String {
    element("a", text, &[("href", href)])
}
