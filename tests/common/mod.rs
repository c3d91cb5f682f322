//! Child views shared by the integration tests.
//!
//! These stand in for the button and scroll container views an application would
//! supply. They render a single element and keep whatever bindings they are given.

#![allow(dead_code)]

use toggleui::{ChildView, InteractionBinding, Markup, ViewId, ViewKind};

/// A child that renders `<a id="..">label</a>`.
pub struct Button {
    id: ViewId,
    label: String,
    kind: ViewKind,
    html: Markup,
    bindings: Vec<InteractionBinding>,
}

impl Button {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: ViewId::from(id),
            label: label.to_owned(),
            kind: ViewKind::Plain,
            html: Markup::new(),
            bindings: Vec::new(),
        }
    }

    /// A scrollable page container rendering the same way.
    pub fn scroll(id: &str, label: &str) -> Self {
        Self {
            kind: ViewKind::ScrollContainer,
            ..Self::new(id, label)
        }
    }

    /// The markup this child renders on a fresh buffer.
    pub fn expected_markup(id: &str, label: &str) -> String {
        format!("<a id=\"{id}\">{label}</a>")
    }
}

impl ChildView for Button {
    fn id(&self) -> &ViewId {
        &self.id
    }

    fn render(&mut self) -> Markup {
        self.html
            .push_str(&Self::expected_markup(self.id.as_str(), &self.label));
        self.html.clone()
    }

    fn clear_markup(&mut self) {
        self.html.clear();
    }

    fn bind(&mut self, binding: InteractionBinding) {
        self.bindings.retain(|existing| existing.event != binding.event);
        self.bindings.push(binding);
    }

    fn unbind(&mut self, target: &ViewId) {
        self.bindings.retain(|binding| !binding.toggles(target));
    }

    fn bindings(&self) -> &[InteractionBinding] {
        &self.bindings
    }

    fn kind(&self) -> ViewKind {
        self.kind
    }
}
