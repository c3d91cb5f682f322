//! The capability set of a hostable child view.

use crate::{Environment, InteractionBinding, Markup, ViewId};

/// Distinguishes child views that need extra treatment from the styling engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ViewKind {
    /// An ordinary view.
    #[default]
    Plain,
    /// A scrollable page container. Its content has to be restyled as a page after
    /// it is swapped into a document.
    ScrollContainer,
}

impl ViewKind {
    /// Returns `true` if the styling engine must be told to refresh this view as a page.
    #[must_use]
    pub const fn needs_page_refresh(self) -> bool {
        matches!(self, Self::ScrollContainer)
    }
}

/// A view that can be hosted inside a container view.
///
/// Containers never look inside their children. They render them, clear them,
/// bind interactions to them, and ask them to style themselves, all through this
/// trait.
///
/// Bindings follow assignment semantics: [`ChildView::bind`] replaces any binding
/// already registered for the same [`Event`](crate::Event).
pub trait ChildView {
    /// The identifier of the element this view renders.
    fn id(&self) -> &ViewId;

    /// Renders the view and returns its markup.
    fn render(&mut self) -> Markup;

    /// Drops markup accumulated by earlier renders, so the next render starts fresh.
    fn clear_markup(&mut self);

    /// Attaches an interaction binding, replacing any binding for the same event.
    fn bind(&mut self, binding: InteractionBinding);

    /// Removes the bindings that toggle `target`, leaving any others in place.
    fn unbind(&mut self, target: &ViewId);

    /// The bindings currently attached to this view.
    fn bindings(&self) -> &[InteractionBinding];

    /// Registers this view's bindings with the environment's dispatcher.
    ///
    /// Called after the view's markup has been placed into a document, since freshly
    /// inserted markup has no listeners of its own.
    fn register_bindings(&mut self, env: &Environment) {
        for binding in self.bindings() {
            env.dispatcher().register(self.id(), binding);
        }
    }

    /// Asks the styling engine to style this view's subtree.
    fn apply_theme(&mut self, env: &Environment) {
        env.styles().apply(self.id());
    }

    /// The kind of this view.
    fn kind(&self) -> ViewKind {
        ViewKind::Plain
    }
}
