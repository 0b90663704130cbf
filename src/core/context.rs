//! Site and request context passed into every resolution call.
//!
//! Both contexts are read-only during resolution. [`SiteHandle`] is the
//! shared cell a request lifecycle writes once at setup and every resolver
//! snapshots afterwards.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Site owner details, used for owner placeholders and links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Site-wide context.
///
/// `url` is the root prefix for site-relative paths. It may be empty, in
/// which case paths resolve without a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    /// Root prefix (e.g. `""`, `"/blog"`, `"https://example.com"`).
    pub url: String,
    /// Fully-qualified site URL, substituted for `<dz:abs_site_url>`.
    pub abs_url: Option<String>,
    /// Owner details, if known.
    pub owner: Option<Owner>,
}

impl SiteContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_abs_url(mut self, abs_url: impl Into<String>) -> Self {
        self.abs_url = Some(abs_url.into());
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    #[inline]
    pub fn root(&self) -> &str {
        &self.url
    }
}

/// Per-request context: the current route as `(app, page, ...)` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    route: Vec<String>,
}

impl RequestContext {
    pub fn new<I, S>(route: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route: route.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a request path such as `/myapp/mypage/12`.
    pub fn from_path(path: &str) -> Self {
        Self::new(path.split('/').filter(|s| !s.is_empty()))
    }

    #[inline]
    pub fn route(&self) -> &[String] {
        &self.route
    }

    pub fn app(&self) -> Option<&str> {
        self.route.first().map(String::as_str)
    }

    pub fn page(&self) -> Option<&str> {
        self.route.get(1).map(String::as_str)
    }
}

/// Shared, atomically replaceable site context.
///
/// Writers `store` a new context at setup; readers take a `snapshot` and
/// resolve against it, unaffected by later stores.
#[derive(Debug)]
pub struct SiteHandle(ArcSwap<SiteContext>);

impl SiteHandle {
    pub fn new(site: SiteContext) -> Self {
        Self(ArcSwap::from_pointee(site))
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<SiteContext> {
        self.0.load_full()
    }

    pub fn store(&self, site: SiteContext) {
        self.0.store(Arc::new(site));
    }
}

impl Default for SiteHandle {
    fn default() -> Self {
        Self::new(SiteContext::default())
    }
}
