//! Structural query string encoding.
//!
//! This module flattens any [`serde::Serialize`] value into an ordered list of
//! [`QueryItem`]s suitable for a URL query string. The shape of the value is
//! discovered by walking its serde data model, so parameter types only need
//! `#[derive(Serialize)]`.
//!
//! # Naming
//!
//! Each scalar leaf produces one item named after its [`QueryKeyPath`]:
//!
//! - A top-level field renders as `name`
//! - A nested field renders as `parent[child]`
//! - Every element of a sequence renders as `parent[]` (the index is never
//!   part of the name)
//!
//! `None` and unit leaves are skipped.
//!
//! # Example
//!
//! ```rust
//! use restlike::query::{QueryItem, QueryItemEncoder};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct NestedData {
//!     is_on: bool,
//!     foo: i32,
//! }
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Search {
//!     name: String,
//!     nested_data: NestedData,
//!     array: Vec<&'static str>,
//! }
//!
//! let search = Search {
//!     name: "frank".to_string(),
//!     nested_data: NestedData { is_on: true, foo: 42 },
//!     array: vec!["one", "two"],
//! };
//!
//! let items = QueryItemEncoder::new().encode(&search).unwrap();
//! assert_eq!(
//!     items,
//!     vec![
//!         QueryItem::new("name", "frank"),
//!         QueryItem::new("nestedData[isOn]", "true"),
//!         QueryItem::new("nestedData[foo]", "42"),
//!         QueryItem::new("array[]", "one"),
//!         QueryItem::new("array[]", "two"),
//!     ]
//! );
//! ```

mod encoder;
mod errors;
mod key_path;

pub use encoder::QueryItemEncoder;
pub use errors::QueryEncodeError;
pub use key_path::{KeySegment, QueryKeyPath};

use std::fmt;

/// A single `name=value` pair destined for a URL query string.
///
/// Values are stored unescaped; percent-encoding happens when the item is
/// appended to a URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryItem {
    /// The rendered key path (e.g. `filter[tags][]`).
    pub name: String,
    /// The textual form of the leaf value.
    pub value: String,
}

impl QueryItem {
    /// Creates a new query item.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for QueryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
