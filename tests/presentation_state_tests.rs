//! Presentation state, persistence and renderer notification tests.

use chart_themes::presentation::{
    FileStore, PresentationEvent, PresentationState, RootAttributes, COLOR_SET_ATTRIBUTE,
    THEME_ATTRIBUTE,
};
use chart_themes::{annotate, ColorSetName, ThemeName};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Mimics a mounted chart: re-resolves and re-annotates on every event.
struct Renderer {
    spec: Value,
    renders: Vec<Value>,
}

fn mount(state: &mut TestState, spec: Value) -> Rc<RefCell<Renderer>> {
    let renderer = Rc::new(RefCell::new(Renderer {
        spec,
        renders: Vec::new(),
    }));
    let handle = Rc::clone(&renderer);
    state.subscribe(move |_, snapshot| {
        let mut renderer = handle.borrow_mut();
        let rendered = annotate(&renderer.spec, &snapshot.resolve());
        renderer.renders.push(rendered);
    });
    renderer
}

#[test]
fn test_state_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.toml");

    {
        let mut state = PresentationState::load(
            FileStore::new(&path),
            RootAttributes::new(),
            Duration::from_millis(50),
        );
        state.set_theme(ThemeName::Neumorphism);
        state.set_color_set(Some(ColorSetName::Performance));
    }

    let state = PresentationState::load(
        FileStore::new(&path),
        RootAttributes::new(),
        Duration::from_millis(50),
    );
    assert_eq!(state.active_theme(), ThemeName::Neumorphism);
    assert_eq!(state.active_color_set(), Some(ColorSetName::Performance));
    assert_eq!(state.mirror().attribute(THEME_ATTRIBUTE), Some("neumorphism"));
    assert_eq!(
        state.mirror().attribute(COLOR_SET_ATTRIBUTE),
        Some("performance")
    );
    assert!(state.mirror().has_class("theme-neumorphism"));
}

#[test]
fn test_corrupt_state_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let state = PresentationState::load(
        FileStore::new(&path),
        RootAttributes::new(),
        Duration::from_millis(50),
    );
    assert_eq!(state.active_theme(), ThemeName::Light);
    assert_eq!(state.active_color_set(), None);
}

#[test]
fn test_event_order_for_color_set_change() {
    let mut state = memory_state();
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&kinds);
    state.subscribe(move |event, _| sink.borrow_mut().push(event.kind()));

    state.set_theme(ThemeName::Dark);
    state.set_color_set(Some(ColorSetName::Financial));
    state.run_deferred(Instant::now() + Duration::from_secs(1));

    assert_eq!(
        *kinds.borrow(),
        vec![
            "theme-changed",
            "color-set-changed",
            "vega-color-set-changed"
        ]
    );
}

#[test]
fn test_superseded_rerender_requests_all_fire() {
    let mut state = memory_state();
    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selected);
    state.subscribe(move |event, snapshot| {
        if let PresentationEvent::RerenderRequested {
            selected_color_set, ..
        } = event
        {
            sink.borrow_mut()
                .push((*selected_color_set, snapshot.color_set));
        }
    });

    state.set_color_set(Some(ColorSetName::Status));
    state.set_color_set(Some(ColorSetName::Sentiment));
    assert_eq!(state.pending_rerenders(), 2);

    state.run_deferred(Instant::now() + Duration::from_secs(1));

    // Each request carries its own selection; the snapshot is always current
    assert_eq!(
        *selected.borrow(),
        vec![
            (Some(ColorSetName::Status), Some(ColorSetName::Sentiment)),
            (Some(ColorSetName::Sentiment), Some(ColorSetName::Sentiment)),
        ]
    );
}

#[test]
fn test_renderer_output_is_idempotent_across_duplicate_events() {
    let mut state = memory_state();
    let renderer = mount(&mut state, nominal_bar_chart());

    state.set_theme(ThemeName::Fluent);
    state.set_color_set(Some(ColorSetName::Categories));
    // Deferred request plus a second notification for the same state
    state.run_deferred(Instant::now() + Duration::from_secs(1));
    state.set_color_set(Some(ColorSetName::Categories));
    state.run_deferred(Instant::now() + Duration::from_secs(1));

    let renderer = renderer.borrow();
    let expected = state.annotate(&nominal_bar_chart());
    let settled = &renderer.renders[1..];
    assert_eq!(settled.len(), 4);
    assert!(settled.iter().all(|render| *render == expected));
}

#[test]
fn test_unsubscribed_renderer_stops_rendering() {
    let mut state = memory_state();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = state.subscribe(move |_, _| *sink.borrow_mut() += 1);

    state.set_theme(ThemeName::Dark);
    assert!(state.unsubscribe(id));
    state.set_theme(ThemeName::Light);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_state_bound_annotation_uses_active_theme() {
    let mut state = memory_state();
    state.set_theme(ThemeName::Brutalist);
    let spec = line_chart();

    let out = state.annotate_with_color_set(&spec, ColorSetName::Priority);
    let priority = chart_themes::color_set(ThemeName::Brutalist, ColorSetName::Priority);
    assert_eq!(out["mark"]["color"], priority[0]);

    let forced = state.force_annotate(&spec);
    let primary = state.resolve_current().range.category[0].clone();
    assert_eq!(forced["mark"]["color"], primary);
}
