//! Process-wide presentation state: the active theme and color set.
//!
//! There is exactly one writer path ([`PresentationState::set_theme`] and
//! [`PresentationState::set_color_set`]) and any number of readers. Every
//! mutation writes the document mirror and durable storage before any event
//! is emitted, so a listener triggered by the event observes the new state.

use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use chrono::Utc;

use crate::annotator;
use crate::catalog::color_catalog;
use crate::models::{ColorSequence, ColorSetName, ThemeConfig, ThemeName};
use crate::presentation::broadcast::{
    Broadcaster, ListenerId, PresentationEvent, PresentationSnapshot,
};
use crate::presentation::mirror::{DocumentMirror, COLOR_SET_ATTRIBUTE, THEME_ATTRIBUTE};
use crate::presentation::store::StateStore;
use crate::resolver::resolve;

/// Default delay before the deferred re-render request fires.
pub const DEFAULT_RERENDER_DELAY: Duration = Duration::from_millis(50);

/// Active theme and color set, with their mirror, storage and listeners.
#[derive(Debug)]
pub struct PresentationState<S: StateStore, M: DocumentMirror> {
    active_theme: ThemeName,
    active_color_set: Option<ColorSetName>,
    store: S,
    mirror: M,
    broadcaster: Broadcaster,
    rerender_delay: Duration,
}

impl<S: StateStore, M: DocumentMirror> PresentationState<S, M> {
    /// Initializes state from durable storage.
    ///
    /// Missing, unreadable or unknown stored values fall back to the `light`
    /// theme and no color set. The initial state is mirrored immediately; no
    /// events are emitted.
    pub fn load(store: S, mirror: M, rerender_delay: Duration) -> Self {
        let stored = store.load().unwrap_or_else(|e| {
            warn!("Failed to read presentation state, using defaults: {e:#}");
            Default::default()
        });

        let active_theme = stored
            .theme
            .as_deref()
            .and_then(|tag| {
                tag.parse::<ThemeName>()
                    .map_err(|e| warn!("Ignoring stored theme: {e}"))
                    .ok()
            })
            .unwrap_or_default();

        let active_color_set = stored.color_set.as_deref().and_then(|tag| {
            tag.parse::<ColorSetName>()
                .map_err(|e| warn!("Ignoring stored color set: {e}"))
                .ok()
        });

        let mut state = Self {
            active_theme,
            active_color_set,
            store,
            mirror,
            broadcaster: Broadcaster::new(),
            rerender_delay,
        };
        state.mirror_theme(None);
        state.mirror_color_set();

        info!(
            theme = %state.active_theme,
            color_set = state.active_color_set.map(ColorSetName::as_str),
            "Presentation state initialized"
        );
        state
    }

    /// Active theme.
    #[must_use]
    pub const fn active_theme(&self) -> ThemeName {
        self.active_theme
    }

    /// Active color set, if any.
    #[must_use]
    pub const fn active_color_set(&self) -> Option<ColorSetName> {
        self.active_color_set
    }

    /// Copy of the current state.
    #[must_use]
    pub const fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            theme: self.active_theme,
            color_set: self.active_color_set,
        }
    }

    /// Durable storage backing this state.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Document mirror written on every change.
    #[must_use]
    pub const fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Delay applied to deferred re-render requests.
    #[must_use]
    pub const fn rerender_delay(&self) -> Duration {
        self.rerender_delay
    }

    /// Registers a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PresentationEvent, &PresentationSnapshot) + 'static,
    {
        self.broadcaster.subscribe(listener)
    }

    /// Removes a change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.broadcaster.unsubscribe(id)
    }

    /// Sets the active theme.
    ///
    /// Swaps the theme class on the mirror, updates the theme attribute,
    /// persists the theme and then emits `theme-changed`. A storage failure is
    /// logged and does not stop the change or the event.
    pub fn set_theme(&mut self, theme: ThemeName) {
        let previous = self.active_theme;
        self.active_theme = theme;
        self.mirror_theme(Some(previous));

        if let Err(e) = self.store.save_theme(theme) {
            warn!("Failed to persist theme '{theme}': {e:#}");
        }

        info!(theme.from = %previous, theme.to = %theme, "Theme switched");
        self.emit(PresentationEvent::ThemeChanged {
            theme,
            timestamp: Utc::now(),
        });
    }

    /// Sets or clears the active color set.
    ///
    /// This is the raw setter: setting the already active color set keeps it
    /// active. See [`Self::toggle_color_set`] for the picker behaviour.
    ///
    /// After mirroring and persisting, emits `color-set-changed` immediately
    /// and queues a `vega-color-set-changed` re-render request that fires
    /// once [`Self::rerender_delay`] has passed (see [`Self::run_deferred`]).
    pub fn set_color_set(&mut self, color_set: Option<ColorSetName>) {
        let previous = self.active_color_set;
        self.active_color_set = color_set;
        self.mirror_color_set();

        if let Err(e) = self.store.save_color_set(color_set) {
            warn!("Failed to persist color set: {e:#}");
        }

        info!(
            color_set.from = previous.map(ColorSetName::as_str),
            color_set.to = color_set.map(ColorSetName::as_str),
            "Color set switched"
        );
        self.emit(PresentationEvent::ColorSetChanged {
            color_set,
            timestamp: Utc::now(),
        });
        self.broadcaster
            .schedule_rerender(Instant::now() + self.rerender_delay, color_set);
    }

    /// Picker convenience: selecting the active color set turns it off.
    ///
    /// Returns the color set that is active afterwards.
    pub fn toggle_color_set(&mut self, color_set: ColorSetName) -> Option<ColorSetName> {
        let next = if self.active_color_set == Some(color_set) {
            None
        } else {
            Some(color_set)
        };
        self.set_color_set(next);
        next
    }

    /// Fires deferred re-render requests due at or before `now`.
    ///
    /// Called from the host event loop. Returns the number of events fired.
    pub fn run_deferred(&mut self, now: Instant) -> usize {
        let snapshot = self.snapshot();
        let fired = self.broadcaster.dispatch_due(now, &snapshot);
        if fired > 0 {
            debug!(fired, "Dispatched deferred re-render requests");
        }
        fired
    }

    /// Number of re-render requests still waiting.
    #[must_use]
    pub fn pending_rerenders(&self) -> usize {
        self.broadcaster.pending_count()
    }

    /// Configuration for the current theme and color set.
    #[must_use]
    pub fn resolve_current(&self) -> ThemeConfig {
        resolve(self.active_theme, self.active_color_set)
    }

    /// Every color set for the current theme, in catalog order.
    #[must_use]
    pub fn color_catalog(&self) -> Vec<(ColorSetName, ColorSequence)> {
        color_catalog(self.active_theme)
    }

    /// [`annotator::annotate`] with the current configuration.
    #[must_use]
    pub fn annotate(&self, spec: &Value) -> Value {
        annotator::annotate(spec, &self.resolve_current())
    }

    /// [`annotator::force_annotate`] with the current configuration.
    #[must_use]
    pub fn force_annotate(&self, spec: &Value) -> Value {
        annotator::force_annotate(spec, &self.resolve_current())
    }

    /// [`annotator::annotate_with_color_set`] under the current theme.
    #[must_use]
    pub fn annotate_with_color_set(&self, spec: &Value, color_set: ColorSetName) -> Value {
        annotator::annotate_with_color_set(spec, self.active_theme, color_set)
    }

    fn mirror_theme(&mut self, previous: Option<ThemeName>) {
        if let Some(previous) = previous {
            self.mirror.remove_class(&previous.css_class());
        }
        self.mirror
            .set_attribute(THEME_ATTRIBUTE, self.active_theme.as_str());
        self.mirror.add_class(&self.active_theme.css_class());
    }

    fn mirror_color_set(&mut self) {
        match self.active_color_set {
            Some(set) => self.mirror.set_attribute(COLOR_SET_ATTRIBUTE, set.as_str()),
            None => self.mirror.remove_attribute(COLOR_SET_ATTRIBUTE),
        }
    }

    fn emit(&mut self, event: PresentationEvent) {
        let snapshot = self.snapshot();
        self.broadcaster.emit(&event, &snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::mirror::RootAttributes;
    use crate::presentation::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestState = PresentationState<MemoryStore, RootAttributes>;

    fn fresh() -> TestState {
        PresentationState::load(MemoryStore::new(), RootAttributes::new(), DEFAULT_RERENDER_DELAY)
    }

    #[test]
    fn test_defaults_without_stored_values() {
        let state = fresh();
        assert_eq!(state.active_theme(), ThemeName::Light);
        assert_eq!(state.active_color_set(), None);
        assert_eq!(state.mirror().attribute(THEME_ATTRIBUTE), Some("light"));
        assert!(state.mirror().has_class("theme-light"));
        assert_eq!(state.mirror().attribute(COLOR_SET_ATTRIBUTE), None);
    }

    #[test]
    fn test_load_restores_stored_values() {
        let store = MemoryStore::with_entries(Some("neon"), Some("status"));
        let state = PresentationState::load(store, RootAttributes::new(), DEFAULT_RERENDER_DELAY);
        assert_eq!(state.active_theme(), ThemeName::Neon);
        assert_eq!(state.active_color_set(), Some(ColorSetName::Status));
        assert_eq!(state.mirror().attribute(COLOR_SET_ATTRIBUTE), Some("status"));
    }

    #[test]
    fn test_load_ignores_unknown_stored_values() {
        let store = MemoryStore::with_entries(Some("sepia"), Some("pastel"));
        let state = PresentationState::load(store, RootAttributes::new(), DEFAULT_RERENDER_DELAY);
        assert_eq!(state.active_theme(), ThemeName::Light);
        assert_eq!(state.active_color_set(), None);
    }

    #[test]
    fn test_set_theme_swaps_mirror_and_persists() {
        let mut state = fresh();
        state.set_theme(ThemeName::Dark);

        assert_eq!(state.active_theme(), ThemeName::Dark);
        assert_eq!(state.mirror().attribute(THEME_ATTRIBUTE), Some("dark"));
        assert!(state.mirror().has_class("theme-dark"));
        assert!(!state.mirror().has_class("theme-light"));
        assert_eq!(state.store().entries().theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_same_color_set_turns_it_off() {
        let mut state = fresh();
        assert_eq!(
            state.toggle_color_set(ColorSetName::Financial),
            Some(ColorSetName::Financial)
        );
        assert_eq!(state.toggle_color_set(ColorSetName::Financial), None);
        assert_eq!(state.active_color_set(), None);
        assert_eq!(state.mirror().attribute(COLOR_SET_ATTRIBUTE), None);
        assert_eq!(state.store().entries().color_set, None);
    }

    #[test]
    fn test_toggle_different_color_set_switches() {
        let mut state = fresh();
        state.toggle_color_set(ColorSetName::Financial);
        state.toggle_color_set(ColorSetName::Status);
        assert_eq!(state.active_color_set(), Some(ColorSetName::Status));
    }

    #[test]
    fn test_raw_setter_does_not_toggle() {
        let mut state = fresh();
        state.set_color_set(Some(ColorSetName::Financial));
        state.set_color_set(Some(ColorSetName::Financial));
        assert_eq!(state.active_color_set(), Some(ColorSetName::Financial));
    }

    #[test]
    fn test_storage_failure_still_changes_state_and_notifies() {
        let mut state =
            PresentationState::load(MemoryStore::failing(), RootAttributes::new(), DEFAULT_RERENDER_DELAY);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        state.subscribe(move |event, _| sink.borrow_mut().push(event.kind()));

        state.set_theme(ThemeName::Brutalist);
        state.set_color_set(Some(ColorSetName::Priority));

        assert_eq!(state.active_theme(), ThemeName::Brutalist);
        assert_eq!(state.mirror().attribute(THEME_ATTRIBUTE), Some("brutalist"));
        assert_eq!(state.mirror().attribute(COLOR_SET_ATTRIBUTE), Some("priority"));
        assert_eq!(*events.borrow(), vec!["theme-changed", "color-set-changed"]);
    }

    #[test]
    fn test_listeners_observe_new_state() {
        let mut state = fresh();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |event, snapshot| {
            sink.borrow_mut().push((event.kind(), *snapshot));
        });

        state.set_theme(ThemeName::Retro);
        state.set_color_set(Some(ColorSetName::Sentiment));

        let seen = seen.borrow();
        assert_eq!(seen[0].0, "theme-changed");
        assert_eq!(seen[0].1.theme, ThemeName::Retro);
        assert_eq!(seen[1].0, "color-set-changed");
        assert_eq!(seen[1].1.color_set, Some(ColorSetName::Sentiment));
    }

    #[test]
    fn test_color_set_change_schedules_rerender() {
        let mut state = fresh();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        state.set_color_set(Some(ColorSetName::Temperature));
        assert_eq!(state.pending_rerenders(), 1);
        assert_eq!(seen.borrow().len(), 1);

        let fired = state.run_deferred(Instant::now() + DEFAULT_RERENDER_DELAY);
        assert_eq!(fired, 1);
        assert_eq!(state.pending_rerenders(), 0);

        let seen = seen.borrow();
        match &seen[1] {
            PresentationEvent::RerenderRequested {
                selected_color_set, ..
            } => assert_eq!(*selected_color_set, Some(ColorSetName::Temperature)),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_theme_change_does_not_schedule_rerender() {
        let mut state = fresh();
        state.set_theme(ThemeName::Fluent);
        assert_eq!(state.pending_rerenders(), 0);
    }

    #[test]
    fn test_color_catalog_follows_theme() {
        let mut state = fresh();
        state.set_theme(ThemeName::Dark);
        let catalog = state.color_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0], (ColorSetName::Financial, color_catalog(ThemeName::Dark)[0].1.clone()));
    }

    #[test]
    fn test_resolve_current_uses_color_set() {
        let mut state = fresh();
        state.set_color_set(Some(ColorSetName::Financial));
        let config = state.resolve_current();
        assert_eq!(config.mark.color.as_deref(), Some("#2e7d32"));
    }
}
