//! Rendered HTML fragments.

use alloc::string::String;
use core::fmt;

/// An owned fragment of HTML produced by rendering a view.
///
/// Views build `Markup` piece by piece and hand the result to a
/// [`Document`](crate::Document). [`Markup::clear`] resets it for the next render. Text passed to [`Markup::push_str`] is inserted
/// verbatim; attribute values passed to [`Markup::open_element`] are escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Creates an empty fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Appends raw markup.
    pub fn push_str(&mut self, raw: &str) {
        self.0.push_str(raw);
    }

    /// Appends another fragment.
    pub fn push_markup(&mut self, other: &Self) {
        self.0.push_str(&other.0);
    }

    /// Appends an opening tag carrying an `id` attribute, e.g. `<div id="toggle">`.
    pub fn open_element(&mut self, tag: &str, id: &str) {
        self.0.push('<');
        self.0.push_str(tag);
        self.0.push_str(" id=\"");
        escape_attribute(&mut self.0, id);
        self.0.push_str("\">");
    }

    /// Appends a closing tag, e.g. `</div>`.
    pub fn close_element(&mut self, tag: &str) {
        self.0.push_str("</");
        self.0.push_str(tag);
        self.0.push('>');
    }

    /// Returns the content of the element `id` if the whole fragment is that single
    /// element, written by [`Markup::open_element`] and [`Markup::close_element`].
    #[must_use]
    pub fn element_content(&self, id: &str) -> Option<Self> {
        let (tag, rest) = self.0.strip_prefix('<')?.split_once(' ')?;

        let mut attribute = String::from("id=\"");
        escape_attribute(&mut attribute, id);
        attribute.push_str("\">");

        let inner = rest
            .strip_prefix(attribute.as_str())?
            .strip_suffix('>')?
            .strip_suffix(tag)?
            .strip_suffix("</")?;
        Some(Self(inner.into()))
    }

    /// Empties the fragment, keeping its allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Borrows the fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if nothing has been rendered into the fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the fragment and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

fn escape_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Markup {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}
