//! Typed two-phase output: text interleaved with pending tags.

use std::fmt;

use super::{Placeholder, Tag, TagSource};

/// One piece of deferred output.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Text(String),
    Tag(Tag),
}

/// Output of phase one.
///
/// Known values are kept as text, unknown ones as pending [`Tag`]s. `Display`
/// renders pending tags as their markers, so `to_string()` is exactly the
/// string form a later substitution pass consumes.
///
/// Invariant: no empty text pieces, no two adjacent text pieces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deferred {
    pieces: Vec<Piece>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(s: impl Into<String>) -> Self {
        let mut out = Self::new();
        out.push_str(&s.into());
        out
    }

    pub fn tag(tag: impl Into<Tag>) -> Self {
        let mut out = Self::new();
        out.push_tag(tag);
        out
    }

    pub fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match self.pieces.last_mut() {
            Some(Piece::Text(last)) => last.push_str(s),
            _ => self.pieces.push(Piece::Text(s.to_string())),
        }
    }

    pub fn push_tag(&mut self, tag: impl Into<Tag>) {
        self.pieces.push(Piece::Tag(tag.into()));
    }

    pub fn append(&mut self, other: Deferred) {
        for piece in other.pieces {
            match piece {
                Piece::Text(s) => self.push_str(&s),
                Piece::Tag(t) => self.pieces.push(Piece::Tag(t)),
            }
        }
    }

    /// Join parts with `sep`, like `[..].join(sep)` over strings.
    pub fn join(parts: impl IntoIterator<Item = Deferred>, sep: &str) -> Self {
        let mut out = Self::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.append(part);
        }
        out
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// True when nothing is pending.
    pub fn is_resolved(&self) -> bool {
        self.pieces.iter().all(|p| matches!(p, Piece::Text(_)))
    }

    /// Pending tags, in output order.
    pub fn pending(&self) -> impl Iterator<Item = &Tag> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Tag(t) => Some(t),
            Piece::Text(_) => None,
        })
    }

    /// Phase two: replace every tag `source` knows with its value.
    ///
    /// Tags the source cannot supply stay pending.
    pub fn resolve_with<S: TagSource + ?Sized>(&self, source: &S) -> Self {
        let mut out = Self::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(s) => out.push_str(s),
                Piece::Tag(t) => match source.lookup(t) {
                    Some(value) => out.push_str(&value),
                    None => out.push_tag(t.clone()),
                },
            }
        }
        out
    }

    /// The plain string, if nothing is pending.
    pub fn into_resolved(self) -> Option<String> {
        if !self.is_resolved() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Text(s) => f.write_str(s)?,
                Piece::Tag(t) => write!(f, "{t}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Deferred {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Deferred {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<Tag> for Deferred {
    fn from(t: Tag) -> Self {
        Self::tag(t)
    }
}

impl From<Placeholder> for Deferred {
    fn from(p: Placeholder) -> Self {
        Self::tag(p)
    }
}
