//! Named bundles of scripts and stylesheets a page can require.
//!
//! ```text
//! registry: defaults ◄── package file (JSON) ◄── [packages] in dz.toml
//!              │
//!   requires(["c3", ...]) ──► Parts { libs, styles }  or  PackageError::Missing
//! ```

mod error;
mod registry;

pub use error::PackageError;
pub use registry::PackageRegistry;

use serde::{Deserialize, Serialize};

/// A registered package: script URLs and stylesheet URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub libs: Vec<String>,
    pub styles: Vec<String>,
}

impl Package {
    pub fn new<L, S>(libs: L, styles: S) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            libs: libs.into_iter().map(Into::into).collect(),
            styles: styles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.libs.is_empty() && self.styles.is_empty()
    }
}

/// Composed requirements of a page, in first-required order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parts {
    libs: Vec<String>,
    styles: Vec<String>,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn libs(&self) -> &[String] {
        &self.libs
    }

    #[inline]
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.libs.is_empty() && self.styles.is_empty()
    }

    /// Add a package's assets after the ones already present.
    pub fn add(&mut self, package: &Package) {
        push_unique(&mut self.libs, &package.libs);
        push_unique(&mut self.styles, &package.styles);
    }

    /// Add another composition's assets after the ones already present.
    pub fn merge(&mut self, other: &Parts) {
        push_unique(&mut self.libs, &other.libs);
        push_unique(&mut self.styles, &other.styles);
    }
}

fn push_unique(into: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !into.contains(item) {
            into.push(item.clone());
        }
    }
}
