//! Package registry and composition.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Package, PackageError, Parts};
use crate::debug;

/// Packages every site knows about.
fn default_packages() -> [(&'static str, Package); 2] {
    [
        (
            "c3",
            Package::new(
                [
                    "https://cdnjs.cloudflare.com/ajax/libs/d3/3.5.17/d3.min.js",
                    "https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.15/c3.min.js",
                ],
                ["https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.15/c3.min.css"],
            ),
        ),
        (
            "fontawesome",
            Package::new(
                ["https://use.fontawesome.com/releases/v5.0.1/js/all.js"],
                Vec::<String>::new(),
            ),
        ),
    ]
}

/// Registered packages by name. Later registrations replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: FxHashMap<String, Package>,
}

impl PackageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in packages.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, package) in default_packages() {
            registry.register(name, package);
        }
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, package: Package) {
        self.packages.insert(name.into(), package);
    }

    pub fn extend<I>(&mut self, packages: I)
    where
        I: IntoIterator<Item = (String, Package)>,
    {
        self.packages.extend(packages);
    }

    /// Read a JSON package file (`{"name": {"libs": [...], "styles": [...]}}`).
    ///
    /// A missing file yields no packages.
    pub fn load(path: &Path) -> Result<BTreeMap<String, Package>, PackageError> {
        if !path.is_file() {
            debug!("package"; "no package file at {}", path.display());
            return Ok(BTreeMap::new());
        }
        let content =
            fs::read_to_string(path).map_err(|e| PackageError::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| PackageError::Json(path.to_path_buf(), e))
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Compose the named packages, in the order given.
    ///
    /// Fails if any name is unregistered, listing every unregistered name.
    pub fn requires<S: AsRef<str>>(&self, names: &[S]) -> Result<Parts, PackageError> {
        let missing: FxHashSet<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.contains(name))
            .collect();
        if !missing.is_empty() {
            let mut missing: Vec<String> = missing.into_iter().map(str::to_owned).collect();
            missing.sort_unstable();
            return Err(PackageError::Missing(missing));
        }

        let mut parts = Parts::new();
        for name in names {
            if let Some(package) = self.get(name.as_ref()) {
                parts.add(package);
            }
        }
        debug!("package"; "composed {} libs, {} styles", parts.libs().len(), parts.styles().len());
        Ok(parts)
    }
}
