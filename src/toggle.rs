//! A container that shows one of two child views and switches between them.
//!
//! # Examples
//!
//! ```ignore
//! let mut view = ToggleView::new("mode")
//!     .with_children(list_button, grid_button)
//!     .toggle_on_click(true);
//!
//! let page = view.render();
//! // ... insert `page` into the document, then:
//! view.register_events(&env);
//!
//! // Later, from a dispatcher or programmatically:
//! view.toggle(&env);
//! ```

use core::fmt;

use toggleui_core::{
    ChildView, Environment, Handler, Interaction, InteractionBinding, Markup, ViewId,
};

use crate::error::ToggleError;

const CONTAINER_TAG: &str = "div";

/// One of the two positions a [`ToggleView`] child can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Index 0, shown while the view is in its first state.
    First,
    /// Index 1, shown while the view is in its second state.
    Second,
}

impl Slot {
    /// The slot shown for the given state.
    #[must_use]
    pub const fn for_state(is_in_first_state: bool) -> Self {
        if is_in_first_state {
            Self::First
        } else {
            Self::Second
        }
    }

    /// Position of the slot in the child pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

type Child = Box<dyn ChildView>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderPass {
    Initial,
    Update,
}

/// A view that owns exactly two children and displays one of them at a time.
///
/// The view starts in its first state, showing the first child. Every call to
/// [`ToggleView::toggle`] flips the state, swaps the other child into the document,
/// rebinds its interactions, restyles it, and notifies the chrome around it. There
/// is no terminal state.
///
/// With [`ToggleView::toggle_on_click`] enabled, the visible child is bound so that
/// tapping it toggles the view. The binding moves with the visible child: the hidden
/// child never keeps one.
///
/// A missing child is a configuration mistake, not a fault. It is logged as a
/// warning and the container is left empty.
pub struct ToggleView {
    id: ViewId,
    is_in_first_state: bool,
    toggle_on_click: bool,
    current: Option<Slot>,
    children: Option<[Option<Child>; 2]>,
    markup: Markup,
}

impl ToggleView {
    /// Creates a toggle view rendered into the element `id`, with no children yet.
    pub fn new(id: impl Into<ViewId>) -> Self {
        Self {
            id: id.into(),
            is_in_first_state: true,
            toggle_on_click: false,
            current: None,
            children: None,
            markup: Markup::new(),
        }
    }

    /// Supplies both children.
    #[must_use]
    pub fn with_children(
        mut self,
        first: impl ChildView + 'static,
        second: impl ChildView + 'static,
    ) -> Self {
        self.children = Some([Some(Box::new(first)), Some(Box::new(second))]);
        self
    }

    /// Supplies the first child, keeping the second slot as it is.
    #[must_use]
    pub fn with_first(self, child: impl ChildView + 'static) -> Self {
        self.with_slot(Slot::First, Box::new(child))
    }

    /// Supplies the second child, keeping the first slot as it is.
    #[must_use]
    pub fn with_second(self, child: impl ChildView + 'static) -> Self {
        self.with_slot(Slot::Second, Box::new(child))
    }

    fn with_slot(mut self, slot: Slot, child: Child) -> Self {
        let children = self.children.get_or_insert_with(|| [None, None]);
        children[slot.index()] = Some(child);
        self
    }

    /// Controls whether tapping the visible child toggles the view.
    #[must_use]
    pub const fn toggle_on_click(mut self, enabled: bool) -> Self {
        self.toggle_on_click = enabled;
        self
    }

    /// Makes the view start out showing its second child.
    #[must_use]
    pub const fn starting_in_second_state(mut self) -> Self {
        self.is_in_first_state = false;
        self
    }

    /// The element identifier of the wrapping container.
    #[must_use]
    pub const fn id(&self) -> &ViewId {
        &self.id
    }

    /// Type tag of this view.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        "toggle"
    }

    /// `true` while the first child is the selected one.
    #[must_use]
    pub const fn is_in_first_state(&self) -> bool {
        self.is_in_first_state
    }

    /// `true` if tapping the visible child toggles the view.
    #[must_use]
    pub const fn toggles_on_click(&self) -> bool {
        self.toggle_on_click
    }

    /// The slot of the child that was rendered last, if any.
    ///
    /// Unset before the first render, and after a render that found its slot empty.
    #[must_use]
    pub const fn current_slot(&self) -> Option<Slot> {
        self.current
    }

    /// The child that was rendered last, if any.
    #[must_use]
    pub fn current_view(&self) -> Option<&dyn ChildView> {
        self.current.and_then(|slot| self.child(slot))
    }

    /// The child occupying `slot`, if one was supplied.
    #[must_use]
    pub fn child(&self, slot: Slot) -> Option<&dyn ChildView> {
        self.children.as_ref()?[slot.index()].as_deref()
    }

    /// The markup produced by the last [`ToggleView::render`].
    #[must_use]
    pub const fn markup(&self) -> &Markup {
        &self.markup
    }

    fn current_view_mut(&mut self) -> Option<&mut (dyn ChildView + 'static)> {
        let slot = self.current?;
        self.children.as_mut()?[slot.index()].as_deref_mut()
    }

    /// Renders the container with the selected child inside it.
    ///
    /// This is the initial paint. Later switches go through [`ToggleView::toggle`],
    /// which replaces the container content in place.
    pub fn render(&mut self) -> Markup {
        self.markup.clear();
        self.markup.open_element(CONTAINER_TAG, self.id.as_str());
        let child = self.render_child(RenderPass::Initial);
        self.markup.push_markup(&child);
        self.markup.close_element(CONTAINER_TAG);
        self.markup.clone()
    }

    /// Registers the visible child's bindings with the dispatcher.
    ///
    /// Call this once the markup returned by [`ToggleView::render`] is in the document.
    /// Toggling re-registers on its own.
    pub fn register_events(&mut self, env: &Environment) {
        if let Some(child) = self.current_view_mut() {
            child.register_bindings(env);
        }
    }

    /// Switches to the other child.
    pub fn toggle(&mut self, env: &Environment) {
        self.switch(env);
    }

    /// Switches to the other child in response to `interaction`, then forwards
    /// `followup`, if any, through the dispatcher as an internal dispatch.
    pub fn toggle_with(
        &mut self,
        env: &Environment,
        interaction: &Interaction,
        followup: Option<&Handler>,
    ) {
        self.switch(env);
        if let Some(handler) = followup {
            tracing::trace!(target: "toggleui", view = %self.id, next = %handler.target, "forwarding follow-up handler");
            env.dispatcher().call_handler(handler, interaction, true);
        }
    }

    /// Reacts to a binding resolved by a dispatcher.
    ///
    /// Returns `true` if the binding asked this view to toggle and it did.
    pub fn handle(
        &mut self,
        env: &Environment,
        binding: &InteractionBinding,
        interaction: &Interaction,
    ) -> bool {
        if binding.event != interaction.event || !binding.toggles(&self.id) {
            return false;
        }
        self.toggle_with(env, interaction, None);
        true
    }

    /// Asks every child, visible or not, to style itself.
    pub fn apply_theme(&mut self, env: &Environment) {
        for child in self.children.iter_mut().flatten().flatten() {
            child.apply_theme(env);
        }
    }

    fn switch(&mut self, env: &Environment) {
        self.is_in_first_state = !self.is_in_first_state;
        tracing::debug!(
            target: "toggleui",
            view = %self.id,
            slot = %Slot::for_state(self.is_in_first_state),
            "toggling view"
        );

        self.remove_child_views(env);
        let markup = self.render_child(RenderPass::Update);
        env.document().replace_content(&self.id, &markup);
        self.register_events(env);
        self.apply_theme(env);

        if let Some(child) = self
            .current_view()
            .filter(|child| child.kind().needs_page_refresh())
        {
            env.styles().refresh_page(child.id());
        }

        env.styles().fix_toolbars();
    }

    fn remove_child_views(&self, env: &Environment) {
        for child in self.children.iter().flatten().flatten() {
            env.dispatcher().unregister(child.id());
        }
        env.document().remove_children(&self.id);
    }

    fn render_child(&mut self, pass: RenderPass) -> Markup {
        match self.select_and_render(pass) {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(target: "toggleui", view = %self.id, "{err}");
                Markup::new()
            }
        }
    }

    fn select_and_render(&mut self, pass: RenderPass) -> Result<Markup, ToggleError> {
        let Some(children) = self.children.as_mut() else {
            tracing::debug!(target: "toggleui", view = %self.id, "no child views configured");
            return Ok(Markup::new());
        };

        let slot = Slot::for_state(self.is_in_first_state);
        let [first, second] = children;
        let (selected, other) = match slot {
            Slot::First => (first, second),
            Slot::Second => (second, first),
        };

        if self.toggle_on_click {
            if let Some(other) = other.as_deref_mut() {
                other.unbind(&self.id);
            }
        }

        let Some(child) = selected.as_deref_mut() else {
            self.current = None;
            return Err(ToggleError::MissingChild {
                view: self.id.clone(),
                slot,
            });
        };

        if self.toggle_on_click {
            child.bind(InteractionBinding::tap_to_toggle(self.id.clone()));
        }

        if pass == RenderPass::Update {
            child.clear_markup();
        }
        self.current = Some(slot);
        Ok(child.render())
    }
}

impl fmt::Debug for ToggleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child_id = |slot: Slot| self.child(slot).map(|child| child.id().clone());
        f.debug_struct("ToggleView")
            .field("id", &self.id)
            .field("is_in_first_state", &self.is_in_first_state)
            .field("toggle_on_click", &self.toggle_on_click)
            .field("current", &self.current)
            .field("first", &child_id(Slot::First))
            .field("second", &child_id(Slot::Second))
            .finish_non_exhaustive()
    }
}
