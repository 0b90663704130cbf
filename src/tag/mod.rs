//! Placeholder tags for values unknown at resolution time.
//!
//! A tag renders to a marker of the form `<dz:NAME ARGS>`:
//!
//! | Call                                    | Marker                    |
//! |-----------------------------------------|---------------------------|
//! | `tag_for("name", &[], &params!{})`      | `<dz:name>`               |
//! | `tag_for("name", &[], &params!{d = 1})` | `<dz:name d=1>`           |
//! | `tag_for("t", &segments!["a", 2], &params!{})` | `<dz:t a 2>`       |
//!
//! Markers are emitted verbatim into resolved output and substituted later
//! by [`crate::render`]. [`Deferred`] is the typed form of such output.

mod deferred;
mod parse;

pub use deferred::{Deferred, Piece};
pub(crate) use parse::marker_regex;

use std::fmt;

use crate::core::{QueryParams, Scalar};

/// Marker prefix shared by every placeholder.
pub const TAG_PREFIX: &str = "<dz:";

// ============================================================================
// Tag
// ============================================================================

/// A named placeholder with optional positional and keyword arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    name: String,
    args: Vec<Scalar>,
    kwargs: QueryParams,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_arg(mut self, arg: impl Into<Scalar>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.kwargs.insert(key, value);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn args(&self) -> &[Scalar] {
        &self.args
    }

    #[inline]
    pub fn kwargs(&self) -> &QueryParams {
        &self.kwargs
    }

    /// The well-known placeholder this tag names, if any.
    pub fn placeholder(&self) -> Option<Placeholder> {
        Placeholder::from_name(&self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG_PREFIX}{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        for (key, value) in self.kwargs.iter() {
            write!(f, " {key}={}", value.repr())?;
        }
        f.write_str(">")
    }
}

impl From<Placeholder> for Tag {
    fn from(p: Placeholder) -> Self {
        Self::new(p.as_str())
    }
}

/// Render a placeholder marker.
pub fn tag_for(name: &str, args: &[Scalar], kwargs: &QueryParams) -> String {
    Tag {
        name: name.to_string(),
        args: args.to_vec(),
        kwargs: kwargs.clone(),
    }
    .to_string()
}

// ============================================================================
// Well-known placeholders
// ============================================================================

/// Placeholders the resolver itself emits, plus owner and user details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    SiteUrl,
    AbsSiteUrl,
    RequestPath,
    ParentPath,
    AppUrl,
    OwnerName,
    OwnerEmail,
    OwnerUrl,
    Username,
}

impl Placeholder {
    pub const ALL: [Self; 9] = [
        Self::SiteUrl,
        Self::AbsSiteUrl,
        Self::RequestPath,
        Self::ParentPath,
        Self::AppUrl,
        Self::OwnerName,
        Self::OwnerEmail,
        Self::OwnerUrl,
        Self::Username,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteUrl => "site_url",
            Self::AbsSiteUrl => "abs_site_url",
            Self::RequestPath => "request_path",
            Self::ParentPath => "parent_path",
            Self::AppUrl => "app_url",
            Self::OwnerName => "owner_name",
            Self::OwnerEmail => "owner_email",
            Self::OwnerUrl => "owner_url",
            Self::Username => "username",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// The bare marker, e.g. `<dz:request_path>`.
    pub fn marker(self) -> String {
        Tag::from(self).to_string()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker for the current user's name.
pub fn username() -> String {
    Placeholder::Username.marker()
}

/// Marker for the site owner's name.
pub fn owner_name() -> String {
    Placeholder::OwnerName.marker()
}

/// Marker for the site owner's email address.
pub fn owner_email() -> String {
    Placeholder::OwnerEmail.marker()
}

/// Marker for the site owner's URL.
pub fn owner_url() -> String {
    Placeholder::OwnerUrl.marker()
}

// ============================================================================
// Tag Source
// ============================================================================

/// Supplies values for placeholders during substitution.
pub trait TagSource {
    /// Value for `tag`, or `None` to leave the marker in place.
    fn lookup(&self, tag: &Tag) -> Option<String>;
}

impl<F> TagSource for F
where
    F: Fn(&Tag) -> Option<String>,
{
    fn lookup(&self, tag: &Tag) -> Option<String> {
        self(tag)
    }
}
