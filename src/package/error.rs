//! Package registry errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    /// Requested names with no registered package, sorted.
    #[error("missing required packages: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid package file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display() {
        let err = PackageError::Missing(vec!["c9".into(), "d4".into()]);
        assert_eq!(err.to_string(), "missing required packages: c9, d4");
    }
}
