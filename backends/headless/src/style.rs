use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

use toggleui_core::{StyleEngine, ViewId};

/// A styling engine that applies nothing and remembers every request.
#[derive(Debug, Default)]
pub struct RecordingStyles {
    applied: RefCell<BTreeMap<ViewId, usize>>,
    pages: RefCell<BTreeMap<ViewId, usize>>,
    toolbars: Cell<usize>,
}

impl RecordingStyles {
    /// Creates an engine with no recorded requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the subtree `id` was styled.
    #[must_use]
    pub fn applied(&self, id: &ViewId) -> usize {
        self.applied.borrow().get(id).copied().unwrap_or(0)
    }

    /// How many times `id` was refreshed as a page.
    #[must_use]
    pub fn page_refreshes(&self, id: &ViewId) -> usize {
        self.pages.borrow().get(id).copied().unwrap_or(0)
    }

    /// How many page refreshes were requested in total, for any id.
    #[must_use]
    pub fn total_page_refreshes(&self) -> usize {
        self.pages.borrow().values().sum()
    }

    /// How many times fixed toolbars were re-rendered.
    #[must_use]
    pub fn toolbar_fixes(&self) -> usize {
        self.toolbars.get()
    }

    /// Forgets every recorded request.
    pub fn reset(&self) {
        self.applied.borrow_mut().clear();
        self.pages.borrow_mut().clear();
        self.toolbars.set(0);
    }
}

impl StyleEngine for RecordingStyles {
    fn apply(&self, id: &ViewId) {
        tracing::trace!(target: "toggleui::headless", %id, "styling subtree");
        *self.applied.borrow_mut().entry(id.clone()).or_insert(0) += 1;
    }

    fn refresh_page(&self, id: &ViewId) {
        tracing::trace!(target: "toggleui::headless", %id, "refreshing page");
        *self.pages.borrow_mut().entry(id.clone()).or_insert(0) += 1;
    }

    fn fix_toolbars(&self) {
        tracing::trace!(target: "toggleui::headless", "fixing toolbars");
        self.toolbars.set(self.toolbars.get() + 1);
    }
}
