//! Values for the well-known placeholders.

use crate::core::{RequestContext, SiteContext};
use crate::tag::{Placeholder, Tag, TagSource};

/// Full context of one rendered request.
///
/// Anything left unset keeps its marker in the output.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    site: &'a SiteContext,
    request_path: Option<String>,
    parent_path: Option<String>,
    app_url: Option<String>,
    username: Option<String>,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteContext) -> Self {
        Self {
            site,
            request_path: None,
            parent_path: None,
            app_url: None,
            username: None,
        }
    }

    /// Derive request path and app URL from the route, under the site root.
    pub fn with_request(mut self, request: &RequestContext) -> Self {
        let root = self.site.root();
        self.request_path = Some(format!("{root}/{}", request.route().join("/")));
        if let Some(app) = request.app() {
            self.app_url = Some(format!("{root}/{app}"));
        }
        self
    }

    pub fn with_request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = Some(path.into());
        self
    }

    pub fn with_parent_path(mut self, path: impl Into<String>) -> Self {
        self.parent_path = Some(path.into());
        self
    }

    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = Some(url.into());
        self
    }

    pub fn with_username(mut self, name: impl Into<String>) -> Self {
        self.username = Some(name.into());
        self
    }

    /// Explicit parent path, else the request path minus its last segment.
    fn parent(&self) -> Option<String> {
        self.parent_path
            .clone()
            .or_else(|| self.request_path.as_deref().and_then(parent_of))
    }
}

/// `/a/b/c` -> `/a/b`, `/a` -> `/`, `/` -> `None`
fn parent_of(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind('/') {
        Some(0) | None => Some("/".to_string()),
        Some(idx) => Some(trimmed[..idx].to_string()),
    }
}

impl TagSource for RenderContext<'_> {
    fn lookup(&self, tag: &Tag) -> Option<String> {
        let owner = self.site.owner.as_ref();
        match tag.placeholder()? {
            Placeholder::SiteUrl => Some(self.site.url.clone()),
            Placeholder::AbsSiteUrl => Some(
                self.site
                    .abs_url
                    .clone()
                    .unwrap_or_else(|| self.site.url.clone()),
            ),
            Placeholder::RequestPath => self.request_path.clone(),
            Placeholder::ParentPath => self.parent(),
            Placeholder::AppUrl => self.app_url.clone(),
            Placeholder::OwnerName => owner.map(|o| o.name.clone()),
            Placeholder::OwnerEmail => owner.and_then(|o| o.email.clone()),
            Placeholder::OwnerUrl => owner.and_then(|o| o.url.clone()),
            Placeholder::Username => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Owner;
    use crate::render::substitute;

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("/a/b/c"), Some("/a/b".to_string()));
        assert_eq!(parent_of("/a/b/"), Some("/a".to_string()));
        assert_eq!(parent_of("/a"), Some("/".to_string()));
        assert_eq!(parent_of("/"), None);
        assert_eq!(parent_of(""), None);
    }

    #[test]
    fn test_with_request_under_root() {
        let site = SiteContext::new("/blog");
        let request = RequestContext::new(["notes", "list"]);
        let ctx = RenderContext::new(&site).with_request(&request);

        let get = |p: Placeholder| ctx.lookup(&Tag::from(p));
        assert_eq!(get(Placeholder::RequestPath).as_deref(), Some("/blog/notes/list"));
        assert_eq!(get(Placeholder::ParentPath).as_deref(), Some("/blog/notes"));
        assert_eq!(get(Placeholder::AppUrl).as_deref(), Some("/blog/notes"));
        assert_eq!(get(Placeholder::SiteUrl).as_deref(), Some("/blog"));
        // No absolute URL configured: falls back to the root
        assert_eq!(get(Placeholder::AbsSiteUrl).as_deref(), Some("/blog"));
    }

    #[test]
    fn test_unset_values_stay_pending() {
        let site = SiteContext::default();
        let ctx = RenderContext::new(&site);
        assert_eq!(
            substitute("<dz:request_path>|<dz:username>|<dz:owner_name>|<dz:custom>", &ctx),
            "<dz:request_path>|<dz:username>|<dz:owner_name>|<dz:custom>"
        );
    }

    #[test]
    fn test_owner_values() {
        let site = SiteContext::default().with_owner(Owner::new("Acme").with_email("a@acme.test"));
        let ctx = RenderContext::new(&site);
        assert_eq!(
            substitute("<dz:owner_name> <dz:owner_email> <dz:owner_url>", &ctx),
            "Acme a@acme.test <dz:owner_url>"
        );
    }

    #[test]
    fn test_explicit_paths_win() {
        let site = SiteContext::default();
        let request = RequestContext::new(["a", "b"]);
        let ctx = RenderContext::new(&site)
            .with_request(&request)
            .with_request_path("/x/y")
            .with_parent_path("/up")
            .with_app_url("/apps/a");
        assert_eq!(
            substitute("<dz:request_path> <dz:parent_path> <dz:app_url>", &ctx),
            "/x/y /up /apps/a"
        );
    }

    #[test]
    fn test_deferred_round_trip() {
        use crate::{Resolver, params, segments};

        let site = SiteContext::new("").with_abs_url("https://example.com");
        let request = RequestContext::new(["shop", "cart"]);
        let ctx = RenderContext::new(&site).with_request(&request);

        let deferred = Resolver::new(&site).deferred_abs_url(&segments!["item", 3], &params! {});
        let resolved = deferred.resolve_with(&ctx);
        assert_eq!(
            resolved.into_resolved().as_deref(),
            Some("https://example.com/shop/cart/item/3")
        );
    }
}
