use std::rc::Rc;

use toggleui_core::{Environment, Markup, ViewId};

use crate::{BindingTable, HeadlessError, MemoryDocument, RecordingStyles};

const DEFAULT_ROOT_ID: &str = "toggleui-root";

/// Builder for [`HeadlessApp`].
#[derive(Debug, Default, Clone)]
pub struct HeadlessAppBuilder {
    root_id: Option<String>,
}

impl HeadlessAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { root_id: None }
    }

    /// Sets the identifier of the element that hosts the application.
    #[must_use]
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }

    /// Finalises the builder and creates a [`HeadlessApp`].
    ///
    /// # Errors
    ///
    /// Returns [`HeadlessError::EmptyRootId`] if the root id was set to an empty string.
    pub fn build(self) -> Result<HeadlessApp, HeadlessError> {
        let root = ViewId::new(self.root_id.unwrap_or_else(|| DEFAULT_ROOT_ID.to_owned()));
        if root.is_empty() {
            return Err(HeadlessError::EmptyRootId);
        }
        Ok(HeadlessApp::with_root(root))
    }
}

/// An application running against in-memory collaborators.
#[derive(Debug, Clone)]
pub struct HeadlessApp {
    document: Rc<MemoryDocument>,
    styles: Rc<RecordingStyles>,
    dispatcher: Rc<BindingTable>,
    environment: Environment,
}

impl HeadlessApp {
    /// Creates an app with the default root element.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(ViewId::from(DEFAULT_ROOT_ID))
    }

    /// Starts building an app with custom options.
    #[must_use]
    pub const fn builder() -> HeadlessAppBuilder {
        HeadlessAppBuilder::new()
    }

    fn with_root(root: ViewId) -> Self {
        let document = Rc::new(MemoryDocument::new(root));
        let styles = Rc::new(RecordingStyles::new());
        let dispatcher = Rc::new(BindingTable::new());
        let environment = Environment::new(document.clone(), styles.clone(), dispatcher.clone());
        Self {
            document,
            styles,
            dispatcher,
            environment,
        }
    }

    /// The environment wired to this app's collaborators.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The in-memory document.
    #[must_use]
    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }

    /// The recording styling engine.
    #[must_use]
    pub fn styles(&self) -> &RecordingStyles {
        &self.styles
    }

    /// The binding table acting as event dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &BindingTable {
        &self.dispatcher
    }

    /// Writes the initial page markup and makes `container` addressable, so views
    /// can later replace its content.
    ///
    /// If `markup` is the `container` element itself, the element starts out with
    /// the content rendered inside it. Otherwise it starts out empty.
    pub fn mount(&self, container: &ViewId, markup: &Markup) {
        tracing::debug!(target: "toggleui::headless", %container, "mounting page");
        self.document.mount(markup);
        match markup.element_content(container.as_str()) {
            Some(content) => self.document.mount_element(container, content),
            None => {
                tracing::debug!(
                    target: "toggleui::headless",
                    %container,
                    "page is not the container element, mounting it empty"
                );
                self.document.create_element(container);
            }
        }
    }
}

impl Default for HeadlessApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toggleui_core::Document;

    #[test]
    fn builder_rejects_empty_root() {
        let err = HeadlessApp::builder().with_root_id("").build().unwrap_err();
        assert_eq!(err, HeadlessError::EmptyRootId);
    }

    #[test]
    fn environment_reaches_app_collaborators() {
        let app = HeadlessApp::builder().with_root_id("page").build().unwrap();
        assert_eq!(app.document().root().as_str(), "page");

        let toggle = ViewId::from("toggle");
        app.mount(&toggle, &Markup::from("<div id=\"toggle\"></div>"));
        app.environment()
            .document()
            .replace_content(&toggle, &Markup::from("<a>B</a>"));
        app.environment().styles().fix_toolbars();

        assert_eq!(app.document().content(&toggle), Some(Markup::from("<a>B</a>")));
        assert_eq!(app.styles().toolbar_fixes(), 1);
    }

    #[test]
    fn mount_seeds_container_with_rendered_content() {
        let app = HeadlessApp::new();
        let toggle = ViewId::from("toggle");

        app.mount(&toggle, &Markup::from("<div id=\"toggle\"><a>A</a></div>"));
        assert_eq!(app.document().content(&toggle), Some(Markup::from("<a>A</a>")));

        let other = ViewId::from("other");
        app.mount(&other, &Markup::from("<section><a>A</a></section>"));
        assert_eq!(app.document().content(&other), Some(Markup::new()));
    }
}
