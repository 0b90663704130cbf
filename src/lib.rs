//! dzlink - deferred URL resolution and placeholder tags.
//!
//! Resolution builds site-relative or absolute URLs from path arguments and
//! query parameters. Values unknown at resolution time (the current request
//! path, the absolute site URL, the owner) become `<dz:NAME ...>` markers that
//! a later render pass substitutes.
//!
//! # Module Structure
//!
//! | Module    | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `core`    | Scalars, query parameters, site/request context    |
//! | `tag`     | Placeholder tags, markers, `Deferred` output       |
//! | `url`     | Path building, query encoding, resolution, links   |
//! | `render`  | Marker substitution                                |
//! | `package` | Script/stylesheet bundles and composition          |
//! | `config`  | `dz.toml` loading and validation                   |
//!
//! # Example
//!
//! ```
//! use dzlink::{params, segments, RequestContext, Resolver, SiteContext};
//!
//! let site = SiteContext::new("/blog");
//! let request = RequestContext::from_path("/posts/hello");
//! let resolver = Resolver::new(&site).with_request(&request);
//!
//! assert_eq!(
//!     resolver.url_for(&segments!["/user", 1234], &params! { q = "test one" }),
//!     "/blog/user/1234?q=test+one",
//! );
//! assert_eq!(resolver.url_for(&segments![".."], &params! {}), "<dz:parent_path>");
//! ```

#[macro_use]
pub mod logger;

pub mod config;
pub mod core;
pub mod package;
pub mod render;
pub mod tag;
pub mod url;
pub mod utils;

pub use crate::core::{Owner, QueryParams, RequestContext, Scalar, SiteContext, SiteHandle};
pub use crate::tag::{Deferred, Placeholder, Tag, TagSource, tag_for};
pub use crate::url::{Resolver, resolve, resolve_absolute};
