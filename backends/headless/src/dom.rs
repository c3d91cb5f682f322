use std::{cell::RefCell, collections::BTreeMap};

use toggleui_core::{Document, Markup, ViewId};

/// A document kept entirely in memory.
///
/// Only elements registered through [`MemoryDocument::mount`],
/// [`MemoryDocument::mount_element`] or [`MemoryDocument::create_element`] are
/// addressable. Replacing the content of any
/// other id does nothing, the same way a selector that matches no element does
/// nothing in a browser.
#[derive(Debug)]
pub struct MemoryDocument {
    root: ViewId,
    page: RefCell<Markup>,
    elements: RefCell<BTreeMap<ViewId, Markup>>,
}

impl MemoryDocument {
    /// Creates an empty document whose root element is `root`.
    #[must_use]
    pub fn new(root: ViewId) -> Self {
        let mut elements = BTreeMap::new();
        elements.insert(root.clone(), Markup::new());
        Self {
            root,
            page: RefCell::new(Markup::new()),
            elements: RefCell::new(elements),
        }
    }

    /// The identifier of the root element.
    #[must_use]
    pub const fn root(&self) -> &ViewId {
        &self.root
    }

    /// Writes the initial page markup into the root element.
    pub fn mount(&self, markup: &Markup) {
        self.page.replace(markup.clone());
        self.elements
            .borrow_mut()
            .insert(self.root.clone(), markup.clone());
    }

    /// Registers `id` as an addressable element with no content.
    ///
    /// Registering an id twice keeps the existing content.
    pub fn create_element(&self, id: &ViewId) {
        self.elements.borrow_mut().entry(id.clone()).or_default();
    }

    /// Registers `id` as an addressable element holding `content`, replacing whatever
    /// it held before.
    pub fn mount_element(&self, id: &ViewId, content: Markup) {
        self.elements.borrow_mut().insert(id.clone(), content);
    }

    /// Returns the inner content of the element `id`, if the element exists.
    #[must_use]
    pub fn content(&self, id: &ViewId) -> Option<Markup> {
        self.elements.borrow().get(id).cloned()
    }

    /// Returns `true` if `id` is addressable.
    #[must_use]
    pub fn contains(&self, id: &ViewId) -> bool {
        self.elements.borrow().contains_key(id)
    }

    /// The page markup written by the last [`MemoryDocument::mount`].
    #[must_use]
    pub fn page(&self) -> Markup {
        self.page.borrow().clone()
    }

    /// Clears the whole document, keeping only an empty root element.
    pub fn clear(&self) {
        self.page.borrow_mut().clear();
        let mut elements = self.elements.borrow_mut();
        elements.clear();
        elements.insert(self.root.clone(), Markup::new());
    }
}

impl Document for MemoryDocument {
    fn replace_content(&self, id: &ViewId, markup: &Markup) {
        match self.elements.borrow_mut().get_mut(id) {
            Some(content) => {
                tracing::trace!(target: "toggleui::headless", %id, "replacing element content");
                *content = markup.clone();
            }
            None => {
                tracing::debug!(target: "toggleui::headless", %id, "no element to replace content of");
            }
        }
    }

    fn remove_children(&self, id: &ViewId) {
        if let Some(content) = self.elements.borrow_mut().get_mut(id) {
            tracing::trace!(target: "toggleui::headless", %id, "removing element children");
            content.clear();
        }
    }
}
