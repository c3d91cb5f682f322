//! A toggle view driven end to end through the headless backend.

mod common;

use common::Button;
use toggleui::{
    Action, ChildView, Event, Handler, IdGenerator, Interaction, InteractionBinding, Slot,
    ToggleView, ViewId, config::ToggleConfig, logging::WarningCounter,
};
use toggleui_headless::{DispatchRecord, HeadlessApp};
use tracing_subscriber::prelude::*;

fn mounted(view: &mut ToggleView) -> HeadlessApp {
    let app = HeadlessApp::new();
    let page = view.render();
    app.mount(view.id(), &page);
    view.register_events(app.environment());
    app
}

/// Simulates a tap on `source`, delivering every binding it resolves to `view`.
fn tap(app: &HeadlessApp, view: &mut ToggleView, source: &str) -> usize {
    let source = ViewId::from(source);
    let interaction = Interaction::tap(source.clone());
    app.dispatcher()
        .resolve(&source, Event::Tap)
        .iter()
        .filter(|binding| view.handle(app.environment(), binding, &interaction))
        .count()
}

#[test]
fn initial_render_wraps_first_button() {
    let mut view =
        ToggleView::new("X").with_children(Button::new("a", "A"), Button::new("b", "B"));
    let app = mounted(&mut view);

    assert_eq!(
        app.document().page().as_str(),
        format!("<div id=\"X\">{}</div>", Button::expected_markup("a", "A"))
    );
    assert_eq!(view.current_view().map(|child| child.id().as_str()), Some("a"));
    assert_eq!(
        app.document().content(view.id()).unwrap().as_str(),
        Button::expected_markup("a", "A")
    );
}

#[test]
fn toggle_replaces_container_content() {
    let mut view =
        ToggleView::new("X").with_children(Button::new("a", "A"), Button::new("b", "B"));
    let app = mounted(&mut view);

    view.toggle(app.environment());

    let container = app.document().content(view.id()).unwrap();
    assert_eq!(container.as_str(), Button::expected_markup("b", "B"));
    assert_eq!(view.current_view().map(|child| child.id().as_str()), Some("b"));
    assert!(!view.is_in_first_state());
    assert_eq!(app.styles().toolbar_fixes(), 1);
    assert_eq!(app.styles().applied(&ViewId::from("a")), 1);
    assert_eq!(app.styles().applied(&ViewId::from("b")), 1);
}

#[test]
fn tap_on_first_button_toggles_exactly_once() {
    let mut view = ToggleView::new("X")
        .with_children(Button::new("a", "A"), Button::new("b", "B"))
        .toggle_on_click(true);
    let app = mounted(&mut view);

    assert_eq!(tap(&app, &mut view, "a"), 1);

    assert!(!view.is_in_first_state());
    assert_eq!(view.current_slot(), Some(Slot::Second));
    assert_eq!(
        app.document().content(view.id()).unwrap().as_str(),
        Button::expected_markup("b", "B")
    );
    assert!(!app.dispatcher().is_listening(&ViewId::from("a")));
    assert!(app.dispatcher().is_listening(&ViewId::from("b")));
}

#[test]
fn tapping_back_and_forth_moves_the_listener() {
    let mut view = ToggleView::new("X")
        .with_children(Button::new("a", "A"), Button::new("b", "B"))
        .toggle_on_click(true);
    let app = mounted(&mut view);

    assert_eq!(tap(&app, &mut view, "a"), 1);
    assert_eq!(tap(&app, &mut view, "a"), 0);
    assert_eq!(tap(&app, &mut view, "b"), 1);

    assert!(view.is_in_first_state());
    assert_eq!(
        app.document().content(view.id()).unwrap().as_str(),
        Button::expected_markup("a", "A")
    );
    assert_eq!(view.child(Slot::First).unwrap().bindings().len(), 1);
    assert!(view.child(Slot::Second).unwrap().bindings().is_empty());
}

#[test]
fn application_click_binding_survives_tap_toggles() {
    let open = InteractionBinding::new(
        Event::Click,
        ViewId::from("page"),
        Action::Named("open".into()),
    );
    let mut first = Button::new("a", "A");
    first.bind(open.clone());
    let mut view = ToggleView::new("X")
        .with_children(first, Button::new("b", "B"))
        .toggle_on_click(true);
    let app = mounted(&mut view);
    let a = ViewId::from("a");
    assert_eq!(app.dispatcher().resolve(&a, Event::Click), vec![open.clone()]);

    assert_eq!(tap(&app, &mut view, "a"), 1);
    assert!(app.dispatcher().resolve(&a, Event::Click).is_empty());
    assert_eq!(tap(&app, &mut view, "b"), 1);

    assert!(view.is_in_first_state());
    assert!(view.child(Slot::First).unwrap().bindings().contains(&open));
    assert_eq!(app.dispatcher().resolve(&a, Event::Click), vec![open]);
    assert_eq!(tap(&app, &mut view, "a"), 1);
}

#[test]
fn taps_do_nothing_without_toggle_on_click() {
    let mut view =
        ToggleView::new("X").with_children(Button::new("a", "A"), Button::new("b", "B"));
    let app = mounted(&mut view);

    assert_eq!(tap(&app, &mut view, "a"), 0);
    assert!(view.is_in_first_state());
}

#[test]
fn scroll_container_is_refreshed_as_page_once() {
    let mut view =
        ToggleView::new("X").with_children(Button::new("a", "A"), Button::scroll("s", "S"));
    let app = mounted(&mut view);

    view.toggle(app.environment());

    assert_eq!(app.styles().page_refreshes(&ViewId::from("s")), 1);
    assert_eq!(app.styles().total_page_refreshes(), 1);
    assert_eq!(app.styles().applied(&ViewId::from("s")), 1);

    view.toggle(app.environment());
    assert_eq!(app.styles().total_page_refreshes(), 1);
}

#[test]
fn followup_handler_reaches_dispatcher_as_internal() {
    let mut view =
        ToggleView::new("X").with_children(Button::new("a", "A"), Button::new("b", "B"));
    let app = mounted(&mut view);
    let interaction = Interaction::tap(ViewId::from("a"));
    let next = Handler::new(ViewId::from("list"), Action::Named("reload".into()));

    view.toggle_with(app.environment(), &interaction, Some(&next));

    assert_eq!(
        app.dispatcher().records(),
        vec![DispatchRecord {
            handler: next,
            interaction,
            internal: true,
        }]
    );
}

#[test]
fn missing_child_empties_container_and_warns_once() {
    let counter = WarningCounter::new();
    let subscriber = tracing_subscriber::registry().with(counter.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut view = ToggleView::new("X").with_first(Button::new("a", "A"));
        let app = mounted(&mut view);
        assert_eq!(counter.count(), 0);

        view.toggle(app.environment());

        assert_eq!(counter.count(), 1);
        assert!(!view.is_in_first_state());
        assert!(view.current_view().is_none());
        assert!(app.document().content(view.id()).unwrap().is_empty());
        assert_eq!(app.styles().toolbar_fixes(), 1);
    });
}

#[test]
fn configured_view_renders_second_child_first() {
    let config = ToggleConfig::from_json(r#"{"isInFirstState":false,"toggleOnClick":true}"#)
        .unwrap();
    let ids = IdGenerator::new();
    let mut view = ToggleView::from_config(&config, &ids)
        .with_children(Button::new("a", "A"), Button::new("b", "B"));
    let app = mounted(&mut view);

    assert_eq!(view.id().as_str(), "m_0");
    assert_eq!(
        app.document().page().as_str(),
        format!("<div id=\"m_0\">{}</div>", Button::expected_markup("b", "B"))
    );
    assert_eq!(tap(&app, &mut view, "b"), 1);
    assert!(view.is_in_first_state());
}
