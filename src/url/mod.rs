//! URL resolution.
//!
//! ```text
//! args ──► path::build_path ──► resolve (+ query::encode_query) ──► link
//!                                   │
//!                                   └─► placeholders for unknown context
//! ```
//!
//! | Module    | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `path`    | Classify argument shapes, assemble the path      |
//! | `query`   | Deterministic query string encoding              |
//! | `resolve` | Relative and absolute forms, `Resolver`          |
//! | `link`    | Anchor markup (`link_to`, `mail_to`)             |

mod link;
mod path;
mod query;
mod resolve;

pub use link::{link_to, mail_to, owner_link};
pub use path::{PathShape, build_path};
pub use query::{encode_pairs, encode_query, encode_value};
pub use resolve::{
    AbsoluteShape, Resolver, resolve, resolve_absolute, resolve_absolute_deferred,
    resolve_deferred,
};
