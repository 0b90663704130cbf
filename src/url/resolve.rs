//! Relative and absolute URL resolution.
//!
//! Neither form can fail: every argument list maps to some string, falling
//! back to placeholders for whatever the caller's context cannot supply.

use super::path::{PathShape, build_path, stringify};
use super::query::{encode_pairs, encode_query};
use crate::core::{QueryParams, RequestContext, Scalar, SiteContext};
use crate::debug;
use crate::tag::{Deferred, Placeholder};

// =============================================================================
// Relative Form
// =============================================================================

/// Resolve `args` and `params` into a site path or URL.
///
/// # Examples
/// ```
/// use dzlink::{SiteContext, params, segments, url::resolve};
/// let site = SiteContext::default();
/// assert_eq!(resolve(&site, &segments!["/", "home"], &params! {}), "/home");
/// assert_eq!(
///     resolve(&site, &segments!["/user", 1234], &params! { q = "test one", age = 15 }),
///     "/user/1234?age=15&q=test+one"
/// );
/// ```
pub fn resolve(site: &SiteContext, args: &[Scalar], params: &QueryParams) -> String {
    resolve_deferred(site, args, params).to_string()
}

/// [`resolve`], keeping placeholders typed.
pub fn resolve_deferred(site: &SiteContext, args: &[Scalar], params: &QueryParams) -> Deferred {
    with_query(build_path(site.root(), args), params)
}

/// Append `?` and the encoded query when there are parameters.
fn with_query(mut path: Deferred, params: &QueryParams) -> Deferred {
    if !params.is_empty() {
        path.push_str("?");
        path.push_str(&encode_query(params));
    }
    path
}

// =============================================================================
// Absolute Form
// =============================================================================

/// Shape of an argument list for absolute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsoluteShape {
    /// First argument starts with `http`: it is the root itself.
    External,
    /// No arguments: the current request path.
    Current,
    /// Exactly `["/"]`: the site URL alone.
    SiteRoot,
    /// First argument is `/`, followed by more: root gains a trailing `/`.
    RootPrefixed,
    /// First argument starts with `/`: all arguments form the path.
    Absolute,
    /// Anything else: appended to the current request path.
    Relative,
}

impl AbsoluteShape {
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first().map(AsRef::as_ref) else {
            return Self::Current;
        };
        if first.starts_with("http") {
            Self::External
        } else if first == "/" && args.len() == 1 {
            Self::SiteRoot
        } else if first == "/" {
            Self::RootPrefixed
        } else if first.starts_with('/') {
            Self::Absolute
        } else {
            Self::Relative
        }
    }
}

/// Resolve `args` and `params` into an absolute URL.
///
/// The site URL and current request path are left as placeholders unless
/// the first argument is already an `http` URL.
///
/// # Examples
/// ```
/// use dzlink::{params, segments, url::resolve_absolute};
/// assert_eq!(resolve_absolute(&segments![], &params! {}), "<dz:abs_site_url><dz:request_path>");
/// assert_eq!(resolve_absolute(&segments!["/"], &params! {}), "<dz:abs_site_url>");
/// assert_eq!(
///     resolve_absolute(&segments!["/user", 1234], &params! {}),
///     "<dz:abs_site_url>/user/1234"
/// );
/// ```
pub fn resolve_absolute(args: &[Scalar], params: &QueryParams) -> String {
    resolve_absolute_deferred(args, params).to_string()
}

/// [`resolve_absolute`], keeping placeholders typed.
pub fn resolve_absolute_deferred(args: &[Scalar], params: &QueryParams) -> Deferred {
    let parts = stringify(args);
    let shape = AbsoluteShape::classify(&parts);
    debug!("resolve"; "absolute {:?} for {:?}", shape, parts);

    let texts = |parts: &[String]| -> Vec<Deferred> {
        parts.iter().map(|p| Deferred::text(p.as_str())).collect()
    };

    let (mut root, components) = match shape {
        AbsoluteShape::External => (Deferred::text(parts[0].as_str()), texts(&parts[1..])),
        AbsoluteShape::Current => (
            Deferred::tag(Placeholder::AbsSiteUrl),
            vec![Deferred::tag(Placeholder::RequestPath)],
        ),
        AbsoluteShape::SiteRoot => (Deferred::tag(Placeholder::AbsSiteUrl), Vec::new()),
        AbsoluteShape::RootPrefixed => {
            let mut root = Deferred::tag(Placeholder::AbsSiteUrl);
            root.push_str("/");
            (root, texts(&parts[1..]))
        }
        AbsoluteShape::Absolute => (Deferred::tag(Placeholder::AbsSiteUrl), texts(&parts)),
        AbsoluteShape::Relative => {
            let mut components = vec![Deferred::tag(Placeholder::RequestPath)];
            components.extend(texts(&parts));
            (Deferred::tag(Placeholder::AbsSiteUrl), components)
        }
    };

    root.append(Deferred::join(
        components.into_iter().filter(|c| !c.is_empty()),
        "/",
    ));

    if !params.is_empty() {
        root.push_str("?");
        root.push_str(&encode_pairs(params));
    }
    root
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolution entry points bound to an explicit site and request context.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    site: &'a SiteContext,
    request: Option<&'a RequestContext>,
}

impl<'a> Resolver<'a> {
    pub fn new(site: &'a SiteContext) -> Self {
        Self { site, request: None }
    }

    pub fn with_request(mut self, request: &'a RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    #[inline]
    pub fn site(&self) -> &'a SiteContext {
        self.site
    }

    #[inline]
    pub fn request(&self) -> Option<&'a RequestContext> {
        self.request
    }

    /// Relative form. See [`resolve`].
    pub fn url_for(&self, args: &[Scalar], params: &QueryParams) -> String {
        self.deferred_url(args, params).to_string()
    }

    /// Absolute form. See [`resolve_absolute`].
    pub fn abs_url_for(&self, args: &[Scalar], params: &QueryParams) -> String {
        resolve_absolute(args, params)
    }

    pub fn deferred_url(&self, args: &[Scalar], params: &QueryParams) -> Deferred {
        let out = resolve_deferred(self.site, args, params);
        debug!("resolve"; "{:?} -> {}", PathShape::classify(&stringify(args)), out);
        out
    }

    pub fn deferred_abs_url(&self, args: &[Scalar], params: &QueryParams) -> Deferred {
        resolve_absolute_deferred(args, params)
    }

    /// URL of a page in the current app: `<dz:app_url>/page...`.
    pub fn url_for_page(&self, args: &[Scalar], params: &QueryParams) -> String {
        let mut out = Deferred::tag(Placeholder::AppUrl);
        for arg in args {
            out.push_str("/");
            out.push_str(&arg.to_string());
        }
        with_query(out, params).to_string()
    }

    /// URL of an item under the current route's app and page.
    ///
    /// Uses the first two route segments, so the caller never repeats its
    /// own route. Without a request context the item hangs off
    /// `<dz:request_path>`.
    pub fn url_for_item(&self, args: &[Scalar], params: &QueryParams) -> String {
        let Some(request) = self.request else {
            let mut out = Deferred::tag(Placeholder::RequestPath);
            for arg in args {
                out.push_str("/");
                out.push_str(&arg.to_string());
            }
            return with_query(out, params).to_string();
        };

        let mut route: Vec<Scalar> = Vec::with_capacity(args.len() + 3);
        route.push(Scalar::from("/"));
        route.extend(request.route().iter().take(2).map(Scalar::from));
        route.extend_from_slice(args);
        self.url_for(&route, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params, segments};

    fn site() -> SiteContext {
        SiteContext::default()
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(resolve(&site(), &segments![], &params! {}), "");
        assert_eq!(resolve(&site(), &segments![""], &params! {}), "");
    }

    #[test]
    fn test_resolve_paths() {
        let site = site();
        assert_eq!(resolve(&site, &segments!["/", "home"], &params! {}), "/home");
        assert_eq!(resolve(&site, &segments!["/home"], &params! {}), "/home");
        assert_eq!(resolve(&site, &segments!["home"], &params! {}), "home");
        assert_eq!(resolve(&site, &segments!["/user", 1234], &params! {}), "/user/1234");
    }

    #[test]
    fn test_resolve_with_query() {
        let site = site();
        let q = params! { q = "test one", age = 15 };
        assert_eq!(
            resolve(&site, &segments!["/user", 1234], &q),
            "/user/1234?age=15&q=test+one"
        );
        assert_eq!(resolve(&site, &segments!["/user"], &q), "/user?age=15&q=test+one");
        assert_eq!(resolve(&site, &segments!["/"], &q), "?age=15&q=test+one");
        assert_eq!(resolve(&site, &segments![], &q), "?age=15&q=test+one");
        assert_eq!(
            resolve(&site, &segments!["https://google.com"], &params! { q = "test one" }),
            "https://google.com?q=test+one"
        );
    }

    #[test]
    fn test_resolve_scalar_forms() {
        let site = site();
        assert_eq!(resolve(&site, &segments!["/x", true], &params! {}), "/x/true");
        assert_eq!(
            resolve(&site, &segments!["/x", 1e16], &params! { on = false }),
            "/x/1e+16?on=false"
        );
    }

    #[test]
    fn test_resolve_parent_keeps_query() {
        assert_eq!(
            resolve(&site(), &segments!["..", "ignored"], &params! { page = 2 }),
            "<dz:parent_path>?page=2"
        );
    }

    #[test]
    fn test_resolve_with_root() {
        let site = SiteContext::new("/blog");
        assert_eq!(resolve(&site, &segments!["/", "home"], &params! {}), "/blog/home");
        assert_eq!(resolve(&site, &segments!["/"], &params! {}), "/blog");
        assert_eq!(resolve(&site, &segments!["/post", 7], &params! {}), "/blog/post/7");
        assert_eq!(resolve(&site, &segments!["home"], &params! {}), "home");
    }

    #[test]
    fn test_absolute_shapes() {
        assert_eq!(AbsoluteShape::classify::<&str>(&[]), AbsoluteShape::Current);
        assert_eq!(AbsoluteShape::classify(&["/"]), AbsoluteShape::SiteRoot);
        assert_eq!(AbsoluteShape::classify(&["/", "a"]), AbsoluteShape::RootPrefixed);
        assert_eq!(AbsoluteShape::classify(&["/a"]), AbsoluteShape::Absolute);
        assert_eq!(AbsoluteShape::classify(&["a"]), AbsoluteShape::Relative);
        assert_eq!(AbsoluteShape::classify(&[""]), AbsoluteShape::Relative);
        assert_eq!(AbsoluteShape::classify(&["https://x.com"]), AbsoluteShape::External);
    }

    #[test]
    fn test_resolve_absolute() {
        let none = params! {};
        assert_eq!(resolve_absolute(&segments![], &none), "<dz:abs_site_url><dz:request_path>");
        assert_eq!(resolve_absolute(&segments![""], &none), "<dz:abs_site_url><dz:request_path>");
        assert_eq!(resolve_absolute(&segments!["/"], &none), "<dz:abs_site_url>");
        assert_eq!(resolve_absolute(&segments!["/", "home"], &none), "<dz:abs_site_url>/home");
        assert_eq!(resolve_absolute(&segments!["/home"], &none), "<dz:abs_site_url>/home");
        assert_eq!(
            resolve_absolute(&segments!["home"], &none),
            "<dz:abs_site_url><dz:request_path>/home"
        );
        assert_eq!(
            resolve_absolute(&segments!["/user", 1234], &none),
            "<dz:abs_site_url>/user/1234"
        );
    }

    #[test]
    fn test_resolve_absolute_query() {
        let q = params! { q = "test one", age = 15 };
        assert_eq!(
            resolve_absolute(&segments!["/user", 1234], &q),
            "<dz:abs_site_url>/user/1234?age=15&q=test%20one"
        );
        assert_eq!(resolve_absolute(&segments!["/"], &q), "<dz:abs_site_url>?age=15&q=test%20one");
        assert_eq!(
            resolve_absolute(&segments![], &q),
            "<dz:abs_site_url><dz:request_path>?age=15&q=test%20one"
        );
    }

    #[test]
    fn test_resolve_absolute_query_encodes_slash() {
        assert_eq!(
            resolve_absolute(&segments!["/x"], &params! { next = "/a/b", q = "x&y=z" }),
            "<dz:abs_site_url>/x?next=%2Fa%2Fb&q=x%26y%3Dz"
        );
    }

    #[test]
    fn test_resolve_absolute_external() {
        assert_eq!(
            resolve_absolute(&segments!["https://google.com"], &params! { q = "test one" }),
            "https://google.com?q=test%20one"
        );
        // Components join directly under the external root
        assert_eq!(
            resolve_absolute(&segments!["https://google.com", "", "search"], &params! {}),
            "https://google.comsearch"
        );
    }

    #[test]
    fn test_resolve_absolute_deferred_is_typed() {
        let out = resolve_absolute_deferred(&segments!["home"], &params! {});
        let names: Vec<_> = out.pending().map(|t| t.name().to_string()).collect();
        assert_eq!(names, ["abs_site_url", "request_path"]);
    }

    #[test]
    fn test_url_for_page() {
        let site = site();
        let r = Resolver::new(&site);
        assert_eq!(r.url_for_page(&segments![], &params! {}), "<dz:app_url>");
        assert_eq!(r.url_for_page(&segments!["page1"], &params! {}), "<dz:app_url>/page1");
        assert_eq!(
            r.url_for_page(&segments!["page1", 3], &params! { q = "a b" }),
            "<dz:app_url>/page1/3?q=a+b"
        );
    }

    #[test]
    fn test_url_for_item() {
        let site = site();
        let request = RequestContext::new(["myapp", "mypage", "extra"]);
        let r = Resolver::new(&site).with_request(&request);
        assert_eq!(r.url_for_item(&segments![], &params! {}), "/myapp/mypage");
        assert_eq!(r.url_for_item(&segments![100], &params! {}), "/myapp/mypage/100");
        assert_eq!(
            r.url_for_item(&segments![100, "edit"], &params! { v = 1 }),
            "/myapp/mypage/100/edit?v=1"
        );
    }

    #[test]
    fn test_url_for_item_with_root() {
        let site = SiteContext::new("/blog");
        let request = RequestContext::new(["myapp", "mypage"]);
        let r = Resolver::new(&site).with_request(&request);
        assert_eq!(r.url_for_item(&segments![5], &params! {}), "/blog/myapp/mypage/5");
    }

    #[test]
    fn test_url_for_item_without_request() {
        let site = site();
        let r = Resolver::new(&site);
        assert_eq!(r.url_for_item(&segments![], &params! {}), "<dz:request_path>");
        assert_eq!(r.url_for_item(&segments![100], &params! {}), "<dz:request_path>/100");
    }

    #[test]
    fn test_resolver_matches_free_functions() {
        let site = SiteContext::new("/root");
        let r = Resolver::new(&site);
        let args = segments!["/user", 1];
        let q = params! { x = "y z" };
        assert_eq!(r.url_for(&args, &q), resolve(&site, &args, &q));
        assert_eq!(r.abs_url_for(&args, &q), resolve_absolute(&args, &q));
        assert_eq!(r.deferred_abs_url(&args, &q).to_string(), resolve_absolute(&args, &q));
    }
}
