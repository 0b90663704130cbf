//! Anchor markup around resolved URLs.

use super::resolve::Resolver;
use crate::core::{QueryParams, Scalar, SiteContext};
use crate::tag::{owner_name, owner_url};
use crate::utils::html::anchor;

/// Use the label itself as the target when no arguments are given.
fn target_args(label: &str, args: &[Scalar]) -> Vec<Scalar> {
    if args.is_empty() {
        vec![Scalar::from(label)]
    } else {
        args.to_vec()
    }
}

impl Resolver<'_> {
    /// Anchor to `args` (or to `label` itself) with `label` as its text.
    ///
    /// # Examples
    /// ```
    /// use dzlink::{Resolver, SiteContext, params, segments};
    /// let site = SiteContext::default();
    /// let r = Resolver::new(&site);
    /// assert_eq!(
    ///     r.link_to("Company", &segments!["http://company.com"], &params! {}),
    ///     r#"<a href="http://company.com">Company</a>"#
    /// );
    /// assert_eq!(
    ///     r.link_to("http://company.com", &segments![], &params! {}),
    ///     r#"<a href="http://company.com">http://company.com</a>"#
    /// );
    /// ```
    pub fn link_to(&self, label: &str, args: &[Scalar], params: &QueryParams) -> String {
        anchor(&self.url_for(&target_args(label, args), params), label)
    }

    /// Anchor to a page of the current app.
    pub fn link_to_page(&self, label: &str, args: &[Scalar], params: &QueryParams) -> String {
        anchor(&self.url_for_page(&target_args(label, args), params), label)
    }

    /// Anchor for an email contact, `name` as its text.
    ///
    /// The target resolves like [`link_to`](Self::link_to); no `mailto:`
    /// scheme is added.
    pub fn mail_to(&self, name: &str, args: &[Scalar], params: &QueryParams) -> String {
        anchor(&self.url_for(&target_args(name, args), params), name)
    }
}

/// Free-standing [`Resolver::link_to`].
pub fn link_to(site: &SiteContext, label: &str, args: &[Scalar], params: &QueryParams) -> String {
    Resolver::new(site).link_to(label, args, params)
}

/// Free-standing [`Resolver::mail_to`].
pub fn mail_to(site: &SiteContext, name: &str, args: &[Scalar], params: &QueryParams) -> String {
    Resolver::new(site).mail_to(name, args, params)
}

/// Link to the site owner.
///
/// Prefers the owner's URL, then a `mailto:` link, then the bare name.
/// A site without owner details gets the deferred form.
pub fn owner_link(site: &SiteContext) -> String {
    let Some(owner) = &site.owner else {
        return anchor(&owner_url(), &owner_name());
    };
    let non_empty = |s: &Option<String>| s.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

    if let Some(url) = non_empty(&owner.url) {
        anchor(&url, &owner.name)
    } else if let Some(email) = non_empty(&owner.email) {
        anchor(&format!("mailto:{email}"), &owner.name)
    } else {
        owner.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Owner, RequestContext};
    use crate::{params, segments};

    #[test]
    fn test_link_to() {
        let site = SiteContext::default();
        assert_eq!(
            link_to(&site, "Company", &segments!["http://company.com"], &params! {}),
            r#"<a href="http://company.com">Company</a>"#
        );
        assert_eq!(
            link_to(&site, "http://company.com", &segments![], &params! {}),
            r#"<a href="http://company.com">http://company.com</a>"#
        );
        assert_eq!(
            link_to(&site, "http://company.com", &segments![], &params! { q = "test" }),
            r#"<a href="http://company.com?q=test">http://company.com</a>"#
        );
    }

    #[test]
    fn test_link_to_site_path() {
        let site = SiteContext::new("/blog");
        assert_eq!(
            link_to(&site, "Post", &segments!["/post", 3], &params! {}),
            r#"<a href="/blog/post/3">Post</a>"#
        );
        assert_eq!(
            link_to(&site, "Up", &segments![".."], &params! {}),
            r#"<a href="<dz:parent_path>">Up</a>"#
        );
    }

    #[test]
    fn test_link_to_page() {
        let site = SiteContext::default();
        let r = Resolver::new(&site);
        assert_eq!(
            r.link_to_page("settings", &segments![], &params! {}),
            r#"<a href="<dz:app_url>/settings">settings</a>"#
        );
        assert_eq!(
            r.link_to_page("Edit", &segments!["edit", 4], &params! {}),
            r#"<a href="<dz:app_url>/edit/4">Edit</a>"#
        );
    }

    #[test]
    fn test_mail_to() {
        let site = SiteContext::default();
        assert_eq!(
            mail_to(&site, "Tester", &segments!["test@testco.com"], &params! {}),
            r#"<a href="test@testco.com">Tester</a>"#
        );
        assert_eq!(
            mail_to(&site, "test@testco.com", &segments![], &params! {}),
            r#"<a href="test@testco.com">test@testco.com</a>"#
        );
    }

    #[test]
    fn test_links_ignore_request() {
        let site = SiteContext::default();
        let request = RequestContext::new(["app", "page"]);
        let r = Resolver::new(&site).with_request(&request);
        assert_eq!(
            r.link_to("home", &segments![], &params! {}),
            r#"<a href="home">home</a>"#
        );
    }

    #[test]
    fn test_owner_link() {
        let deferred = SiteContext::default();
        assert_eq!(
            owner_link(&deferred),
            r#"<a href="<dz:owner_url>"><dz:owner_name></a>"#
        );

        let with_url = SiteContext::default()
            .with_owner(Owner::new("Acme").with_url("https://acme.test").with_email("a@acme.test"));
        assert_eq!(owner_link(&with_url), r#"<a href="https://acme.test">Acme</a>"#);

        let with_email = SiteContext::default().with_owner(Owner::new("Acme").with_email("a@acme.test"));
        assert_eq!(owner_link(&with_email), r#"<a href="mailto:a@acme.test">Acme</a>"#);

        let name_only = SiteContext::default().with_owner(Owner::new("Acme").with_url(""));
        assert_eq!(owner_link(&name_only), "Acme");
    }
}
