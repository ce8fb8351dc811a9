//! Key paths locating a leaf inside a parameter structure.

use std::fmt;

/// One step of a [`QueryKeyPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySegment {
    /// A named field or map key.
    Field(String),
    /// A position inside a sequence.
    ///
    /// The index keeps traversal unambiguous but is rendered as `[]`.
    Index(usize),
}

/// The ordered list of segments leading from the root of a value to a leaf.
///
/// A path renders as `seg0[seg1][seg2]...`, with [`KeySegment::Index`]
/// segments rendering as empty brackets.
///
/// # Example
///
/// ```rust
/// use restlike::query::{KeySegment, QueryKeyPath};
///
/// let path = QueryKeyPath::root()
///     .child(KeySegment::Field("filter".to_string()))
///     .child(KeySegment::Field("tags".to_string()))
///     .child(KeySegment::Index(3));
///
/// assert_eq!(path.render(), "filter[tags][]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryKeyPath {
    segments: Vec<KeySegment>,
}

impl QueryKeyPath {
    /// Returns the empty path at the root of a value.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns `true` if this path has no segments.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path extended by `segment`.
    #[must_use]
    pub fn child(&self, segment: KeySegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    /// Renders the path in bracket notation.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryKeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match (position, segment) {
                (0, KeySegment::Field(name)) => f.write_str(name)?,
                (0, KeySegment::Index(_)) => {}
                (_, KeySegment::Field(name)) => write!(f, "[{name}]")?,
                (_, KeySegment::Index(_)) => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}
