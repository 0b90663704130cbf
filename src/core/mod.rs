//! Core types - pure values shared across the crate.

mod context;
mod params;
mod scalar;

pub use context::{Owner, RequestContext, SiteContext, SiteHandle};
pub use params::QueryParams;
pub use scalar::Scalar;

/// Build a `Vec<Scalar>` of path segments.
///
/// # Usage
/// ```
/// let args = dzlink::segments!["/user", 1234];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! segments {
    () => {
        ::std::vec::Vec::<$crate::Scalar>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Scalar::from($arg)),+]
    };
}

/// Build [`QueryParams`] from `key = value` pairs.
///
/// # Usage
/// ```
/// let params = dzlink::params! { q = "test one", age = 15 };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::QueryParams::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut params = $crate::QueryParams::new();
        $( params.insert(stringify!($key), $value); )+
        params
    }};
}
