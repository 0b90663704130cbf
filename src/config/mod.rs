//! Site configuration management for `dz.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # Config file discovery
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[site]`      | Root prefix, absolute URL, package file          |
//! | `[owner]`     | Owner name, email and URL for owner placeholders |
//! | `[packages]`  | Site-specific packages (`libs`, `styles`)        |

mod error;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::{find_config_file, find_config_file_from};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Owner, SiteContext};
use crate::debug;
use crate::package::{Package, PackageError, PackageRegistry};

/// Default config file name.
pub const CONFIG_FILE: &str = "dz.toml";

// ============================================================================
// sections
// ============================================================================

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Root prefix for site paths (e.g. "", "/blog", "https://example.com").
    pub url: String,

    /// Fully-qualified site URL used for `<dz:abs_site_url>`.
    pub abs_url: Option<String>,

    /// JSON package file, relative to the config file.
    pub packages_file: Option<PathBuf>,
}

/// `[owner]` section. Empty fields count as unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerSection {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl OwnerSection {
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.url.is_empty()
    }

    fn to_owner(&self) -> Option<Owner> {
        if self.is_empty() {
            return None;
        }
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Some(Owner {
            name: self.name.clone(),
            email: non_empty(&self.email),
            url: non_empty(&self.url),
        })
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dz.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory holding the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub owner: OwnerSection,

    #[serde(default)]
    pub packages: BTreeMap<String, Package>,
}

impl SiteConfig {
    /// Locate `config_name` upward from the cwd, then load and validate it.
    ///
    /// Without a config file, defaults apply.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(config_name) else {
            debug!("config"; "no {} found, using defaults", config_name.display());
            return Ok(Self::default());
        };
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file, without validation.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config = Self::parse(&content)?;
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check every section, collecting all problems before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_site(&mut diag);
        self.validate_owner(&mut diag);
        self.validate_packages(&mut diag);
        diag.into_result()
    }

    fn validate_site(&self, diag: &mut ConfigDiagnostics) {
        let root = &self.site.url;
        if root.len() > 1 && root.ends_with('/') {
            diag.error_with_hint(
                "site.url",
                "root must not end with `/`",
                format!("use \"{}\"", root.trim_end_matches('/')),
            );
        }

        if let Some(abs_url) = &self.site.abs_url {
            match url::Url::parse(abs_url) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            "site.abs_url",
                            format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            "site.abs_url",
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        "site.abs_url",
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }

    fn validate_owner(&self, diag: &mut ConfigDiagnostics) {
        let email = &self.owner.email;
        if !email.is_empty() && !email.contains('@') {
            diag.error("owner.email", format!("'{email}' is not an email address"));
        }
    }

    fn validate_packages(&self, diag: &mut ConfigDiagnostics) {
        for (name, package) in &self.packages {
            if package.is_empty() {
                diag.error_with_hint(
                    format!("packages.{name}"),
                    "package lists no libs or styles",
                    "add `libs = [...]` or `styles = [...]`",
                );
            }
        }
    }

    /// Site context for resolution and rendering.
    pub fn site_context(&self) -> SiteContext {
        SiteContext {
            url: self.site.url.clone(),
            abs_url: self.site.abs_url.clone(),
            owner: self.owner.to_owner(),
        }
    }

    /// Built-in packages, then the package file, then `[packages]`.
    pub fn registry(&self) -> Result<PackageRegistry, PackageError> {
        let mut registry = PackageRegistry::with_defaults();
        if let Some(file) = &self.site.packages_file {
            registry.extend(PackageRegistry::load(&self.root.join(file))?);
        }
        registry.extend(self.packages.clone());
        Ok(registry)
    }
}

// ============================================================================
// tests
// ============================================================================
