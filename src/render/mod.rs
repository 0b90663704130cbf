//! Placeholder substitution (phase two).
//!
//! Phase one (`url`, `tag`) leaves `<dz:...>` markers wherever context was
//! missing. Once the full context of a request is known, [`substitute`]
//! replaces each marker with the value a [`TagSource`] supplies.
//!
//! # Example
//!
//! ```
//! use dzlink::{RequestContext, SiteContext, render::{RenderContext, substitute}};
//!
//! let site = SiteContext::new("").with_abs_url("https://example.com");
//! let request = RequestContext::new(["posts", "hello"]);
//! let ctx = RenderContext::new(&site).with_request(&request);
//!
//! let html = r#"<a href="<dz:abs_site_url><dz:request_path>">here</a>"#;
//! assert_eq!(
//!     substitute(html, &ctx),
//!     r#"<a href="https://example.com/posts/hello">here</a>"#
//! );
//! ```

mod context;

pub use context::RenderContext;

use regex::Captures;

use crate::debug;
use crate::tag::{Tag, TagSource};

/// Replace every marker `source` can supply; leave the rest verbatim.
///
/// Single pass: substituted values are never rescanned for markers.
pub fn substitute<S: TagSource + ?Sized>(text: &str, source: &S) -> String {
    let re = crate::tag::marker_regex();
    let mut total = 0usize;
    let mut replaced = 0usize;

    let out = re.replace_all(text, |caps: &Captures<'_>| {
        total += 1;
        let tag = Tag::from_parts(&caps[1], caps.get(2).map_or("", |m| m.as_str()));
        match source.lookup(&tag) {
            Some(value) => {
                replaced += 1;
                value
            }
            None => caps[0].to_string(),
        }
    });

    debug!("render"; "substituted {} of {} markers", replaced, total);
    out.into_owned()
}

/// Every marker in `text`, in order of appearance.
pub fn markers(text: &str) -> Vec<Tag> {
    crate::tag::marker_regex()
        .captures_iter(text)
        .map(|caps| Tag::from_parts(&caps[1], caps.get(2).map_or("", |m| m.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Owner, RequestContext, SiteContext};
    use crate::tag::Placeholder;

    #[test]
    fn test_substitute_known_and_unknown() {
        let source = |tag: &Tag| (tag.name() == "x").then(|| "X".to_string());
        assert_eq!(substitute("a<dz:x>b<dz:y>c", &source), "aXb<dz:y>c");
    }

    #[test]
    fn test_substitute_single_pass() {
        let source = |tag: &Tag| (tag.name() == "x").then(|| "<dz:x>".to_string());
        assert_eq!(substitute("<dz:x>", &source), "<dz:x>");
    }

    #[test]
    fn test_substitute_sees_args() {
        let source = |tag: &Tag| {
            tag.kwargs()
                .get("default")
                .filter(|_| tag.name() == "missing")
                .map(ToString::to_string)
        };
        assert_eq!(substitute("[<dz:missing default='n/a'>]", &source), "[n/a]");
    }

    #[test]
    fn test_substitute_no_markers() {
        let source = |_: &Tag| Some(String::new());
        assert_eq!(substitute("<b>plain</b>", &source), "<b>plain</b>");
    }

    #[test]
    fn test_substitute_all_known_leaves_none() {
        let site = SiteContext::new("")
            .with_abs_url("https://example.com")
            .with_owner(Owner::new("Acme").with_email("a@acme.test").with_url("https://acme.test"));
        let request = RequestContext::new(["app", "page"]);
        let ctx = RenderContext::new(&site)
            .with_request(&request)
            .with_username("guest");

        let text: String = Placeholder::ALL.iter().map(|p| p.marker()).collect();
        let out = substitute(&text, &ctx);
        assert!(markers(&out).is_empty(), "unresolved markers in {out}");
    }

    #[test]
    fn test_markers() {
        let found = markers("<dz:a> and <dz:b k=1> and <p>");
        let names: Vec<_> = found.iter().map(Tag::name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
