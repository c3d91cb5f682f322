//! Element identifiers.
//!
//! Every view that ends up in a document carries a [`ViewId`]. Backends use it to
//! address the element when content has to be replaced, and dispatchers use it to
//! find the bindings registered for a view.

use alloc::{format, string::String};
use core::{cell::Cell, fmt};

/// Identifier of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ViewId(String);

impl ViewId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ViewId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ViewId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hands out unique element identifiers of the form `m_0`, `m_1`, ...
///
/// One generator is shared by every view of a tree. It is not thread-safe; views
/// are built and rendered on a single UI thread.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: Cell<u64>,
}

impl IdGenerator {
    /// Creates a generator starting at `m_0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: Cell::new(0),
        }
    }

    /// Returns the next unused identifier.
    ///
    /// # Panics
    ///
    /// Panics if the counter overflows, which would require `u64::MAX` views.
    pub fn next_id(&self) -> ViewId {
        let id = self.counter.get();
        self.counter
            .set(id.checked_add(1).expect("id counter should not overflow"));
        ViewId(format!("m_{id}"))
    }
}
