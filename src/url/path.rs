//! Path classification and assembly.

use crate::core::Scalar;
use crate::tag::{Deferred, Placeholder};

/// Shape of a positional argument list, decided by its first argument.
///
/// | Shape             | First argument               | Result                               |
/// |-------------------|------------------------------|--------------------------------------|
/// | `Empty`           | none                         | `""`                                 |
/// | `Absolute`        | `/...` (longer than `/`)     | root + args joined by `/`            |
/// | `RootSingleton`   | exactly `/`                  | root and remaining args joined by `/`|
/// | `ParentMarker`    | exactly `..`                 | `<dz:parent_path>`                   |
/// | `CurrentRelative` | `./...`                      | `<dz:request_path>/` + rest          |
/// | `External`        | `http://...` or `https://...`| args joined by `/`                   |
/// | `Plain`           | anything else                | args joined by `/`                   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    Empty,
    Absolute,
    RootSingleton,
    ParentMarker,
    CurrentRelative,
    External,
    Plain,
}

impl PathShape {
    /// Classify string-converted arguments. First match wins.
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first().map(AsRef::as_ref) else {
            return Self::Empty;
        };
        if first.starts_with('/') {
            if first.len() > 1 {
                Self::Absolute
            } else {
                Self::RootSingleton
            }
        } else if first == ".." {
            Self::ParentMarker
        } else if first.starts_with("./") {
            Self::CurrentRelative
        } else if first.starts_with("http://") || first.starts_with("https://") {
            Self::External
        } else {
            Self::Plain
        }
    }
}

/// Convert every argument to its string form.
pub(crate) fn stringify(args: &[Scalar]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// Assemble the unqualified path for `args` under the site `root`.
pub fn build_path(root: &str, args: &[Scalar]) -> Deferred {
    let parts = stringify(args);
    let shape = PathShape::classify(&parts);

    match shape {
        PathShape::Empty => Deferred::new(),

        // The leading `/` of the first part doubles as the separator after root
        PathShape::Absolute => Deferred::text(format!("{root}{}", parts.join("/"))),

        PathShape::RootSingleton => {
            let joined = std::iter::once(root)
                .chain(parts[1..].iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("/");
            Deferred::text(joined)
        }

        PathShape::ParentMarker => Deferred::tag(Placeholder::ParentPath),

        PathShape::CurrentRelative => {
            let mut out = Deferred::tag(Placeholder::RequestPath);
            let rest = std::iter::once(&parts[0][2..])
                .chain(parts[1..].iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("/");
            out.push_str("/");
            out.push_str(&rest);
            out
        }

        PathShape::External | PathShape::Plain => Deferred::text(parts.join("/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments;

    fn build(root: &str, args: &[Scalar]) -> String {
        build_path(root, args).to_string()
    }

    #[test]
    fn test_classify() {
        assert_eq!(PathShape::classify::<&str>(&[]), PathShape::Empty);
        assert_eq!(PathShape::classify(&["/home"]), PathShape::Absolute);
        assert_eq!(PathShape::classify(&["/", "home"]), PathShape::RootSingleton);
        assert_eq!(PathShape::classify(&["..", "x"]), PathShape::ParentMarker);
        assert_eq!(PathShape::classify(&["./edit"]), PathShape::CurrentRelative);
        assert_eq!(PathShape::classify(&["http://a.com"]), PathShape::External);
        assert_eq!(PathShape::classify(&["https://a.com"]), PathShape::External);
        assert_eq!(PathShape::classify(&["home"]), PathShape::Plain);
        assert_eq!(PathShape::classify(&[""]), PathShape::Plain);
        assert_eq!(PathShape::classify(&["."]), PathShape::Plain);
        assert_eq!(PathShape::classify(&["httpx"]), PathShape::Plain);
    }

    #[test]
    fn test_empty() {
        assert_eq!(build("", &[]), "");
        assert_eq!(build("/site", &[]), "");
        assert_eq!(build("", &segments![""]), "");
    }

    #[test]
    fn test_absolute_prepends_root() {
        assert_eq!(build("", &segments!["/home"]), "/home");
        assert_eq!(build("", &segments!["/user", 1234]), "/user/1234");
        assert_eq!(build("/site", &segments!["/user", 1234]), "/site/user/1234");
        assert_eq!(
            build("https://example.com", &segments!["/a", "b"]),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn test_root_singleton() {
        assert_eq!(build("", &segments!["/"]), "");
        assert_eq!(build("/site", &segments!["/"]), "/site");
        assert_eq!(build("", &segments!["/", "home"]), "/home");
        assert_eq!(build("/site", &segments!["/", "home", 2]), "/site/home/2");
    }

    #[test]
    fn test_parent_marker_discards_rest() {
        assert_eq!(build("", &segments![".."]), "<dz:parent_path>");
        assert_eq!(build("/site", &segments!["..", "x", "y"]), "<dz:parent_path>");
    }

    #[test]
    fn test_current_relative() {
        assert_eq!(build("", &segments!["./edit"]), "<dz:request_path>/edit");
        assert_eq!(build("/site", &segments!["./edit", 3]), "<dz:request_path>/edit/3");
        assert_eq!(build("", &segments!["./"]), "<dz:request_path>/");
    }

    #[test]
    fn test_external_and_plain_ignore_root() {
        assert_eq!(
            build("/site", &segments!["https://google.com", "search"]),
            "https://google.com/search"
        );
        assert_eq!(build("/site", &segments!["home"]), "home");
        assert_eq!(build("/site", &segments!["a", 1, "b"]), "a/1/b");
    }

    #[test]
    fn test_pending_tags_are_typed() {
        let out = build_path("", &segments!["./edit"]);
        let pending: Vec<_> = out.pending().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].placeholder(), Some(Placeholder::RequestPath));
    }
}
