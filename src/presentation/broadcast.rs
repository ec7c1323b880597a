//! Change notifications for independently mounted chart renderers.
//!
//! Renderers subscribe once and re-resolve and re-annotate on every event.
//! Listeners receive a snapshot of the state taken at dispatch time, never a
//! cached one, so a renderer always sees the newest theme and color set.
//!
//! The environment is single-threaded: listeners are plain boxed closures and
//! deferred events are fired when the host event loop calls
//! [`Broadcaster::dispatch_due`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, warn};

use crate::models::{ColorSetName, ThemeConfig, ThemeName};
use crate::resolver::resolve;

/// Event emitted when presentation state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// The active theme was set
    #[serde(rename = "theme-changed")]
    ThemeChanged {
        /// New theme
        theme: ThemeName,
        /// When the change happened
        timestamp: DateTime<Utc>,
    },
    /// The active color set was set or cleared
    #[serde(rename = "color-set-changed")]
    ColorSetChanged {
        /// New color set, `None` when cleared
        #[serde(rename = "colorSet")]
        color_set: Option<ColorSetName>,
        /// When the change happened
        timestamp: DateTime<Utc>,
    },
    /// Deferred request to re-render every chart
    #[serde(rename = "vega-color-set-changed")]
    RerenderRequested {
        /// When the request fired
        timestamp: DateTime<Utc>,
        /// Color set selected when the request was scheduled
        #[serde(rename = "selectedColorSet")]
        selected_color_set: Option<ColorSetName>,
    },
}

impl PresentationEvent {
    /// Wire name of the event.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ThemeChanged { .. } => "theme-changed",
            Self::ColorSetChanged { .. } => "color-set-changed",
            Self::RerenderRequested { .. } => "vega-color-set-changed",
        }
    }

    /// When the event was created.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ThemeChanged { timestamp, .. }
            | Self::ColorSetChanged { timestamp, .. }
            | Self::RerenderRequested { timestamp, .. } => *timestamp,
        }
    }
}

/// State as seen by a listener at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    /// Active theme
    pub theme: ThemeName,
    /// Active color set
    pub color_set: Option<ColorSetName>,
}

impl PresentationSnapshot {
    /// Resolves the configuration for this state.
    #[must_use]
    pub fn resolve(&self) -> ThemeConfig {
        resolve(self.theme, self.color_set)
    }
}

/// Identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PresentationEvent, &PresentationSnapshot)>;

/// A re-render request waiting for its delay to pass.
#[derive(Debug, Clone, Copy)]
struct PendingRerender {
    due: Instant,
    selected_color_set: Option<ColorSetName>,
}

/// Observer list plus a queue of deferred re-render requests.
#[derive(Default)]
pub struct Broadcaster {
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    pending: Vec<PendingRerender>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("listeners", &format!("{} listeners", self.listeners.len()))
            .field("next_listener_id", &self.next_listener_id)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Broadcaster {
    /// Creates a broadcaster with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PresentationEvent, &PresentationSnapshot) + 'static,
    {
        self.next_listener_id += 1;
        let id = ListenerId(self.next_listener_id);
        self.listeners.push((id, Box::new(listener)));
        debug!(listener_id = id.0, "Presentation listener registered");
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(listener_id = id.0, "Presentation listener removed");
        }
        removed
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers an event to every listener in registration order.
    ///
    /// A panicking listener is logged and skipped; the others still run.
    pub fn emit(&mut self, event: &PresentationEvent, snapshot: &PresentationSnapshot) {
        debug!(event = event.kind(), listeners = self.listeners.len(), "Broadcasting");
        for (id, listener) in &mut self.listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(event, snapshot)));
            if result.is_err() {
                warn!(listener_id = id.0, event = event.kind(), "Presentation listener panicked");
            }
        }
    }

    /// Queues a re-render request that becomes due at `due`.
    ///
    /// There is no cancellation: a later change queues another request.
    pub fn schedule_rerender(&mut self, due: Instant, selected_color_set: Option<ColorSetName>) {
        self.pending.push(PendingRerender {
            due,
            selected_color_set,
        });
    }

    /// Number of queued re-render requests.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Fires every queued request due at or before `now`, oldest due first.
    ///
    /// Returns the number of events fired.
    pub fn dispatch_due(&mut self, now: Instant, snapshot: &PresentationSnapshot) -> usize {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|pending| pending.due <= now);
        self.pending = waiting;
        due.sort_by_key(|pending| pending.due);

        for pending in &due {
            let event = PresentationEvent::RerenderRequested {
                timestamp: Utc::now(),
                selected_color_set: pending.selected_color_set,
            };
            self.emit(&event, snapshot);
        }
        due.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn snapshot() -> PresentationSnapshot {
        PresentationSnapshot {
            theme: ThemeName::Light,
            color_set: None,
        }
    }

    fn recorder(broadcaster: &mut Broadcaster) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        broadcaster.subscribe(move |event, _| sink.borrow_mut().push(event.kind().to_string()));
        seen
    }

    #[test]
    fn test_emit_reaches_all_listeners() {
        let mut broadcaster = Broadcaster::new();
        let first = recorder(&mut broadcaster);
        let second = recorder(&mut broadcaster);

        let event = PresentationEvent::ThemeChanged {
            theme: ThemeName::Dark,
            timestamp: Utc::now(),
        };
        broadcaster.emit(&event, &snapshot());

        assert_eq!(*first.borrow(), vec!["theme-changed"]);
        assert_eq!(*second.borrow(), vec!["theme-changed"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut broadcaster = Broadcaster::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = broadcaster.subscribe(move |_, _| *sink.borrow_mut() += 1);

        assert!(broadcaster.unsubscribe(id));
        assert!(!broadcaster.unsubscribe(id));
        assert_eq!(broadcaster.listener_count(), 0);

        broadcaster.schedule_rerender(Instant::now(), None);
        broadcaster.dispatch_due(Instant::now(), &snapshot());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_panicking_listener_does_not_stop_others() {
        let mut broadcaster = Broadcaster::new();
        broadcaster.subscribe(|_, _| panic!("renderer crashed"));
        let seen = recorder(&mut broadcaster);

        broadcaster.schedule_rerender(Instant::now(), Some(ColorSetName::Status));
        assert_eq!(broadcaster.dispatch_due(Instant::now(), &snapshot()), 1);
        assert_eq!(*seen.borrow(), vec!["vega-color-set-changed"]);
    }

    #[test]
    fn test_dispatch_due_only_fires_elapsed_requests() {
        let mut broadcaster = Broadcaster::new();
        let seen = recorder(&mut broadcaster);
        let start = Instant::now();

        broadcaster.schedule_rerender(start + Duration::from_millis(50), None);
        broadcaster.schedule_rerender(start + Duration::from_millis(500), None);

        assert_eq!(broadcaster.dispatch_due(start, &snapshot()), 0);
        assert_eq!(
            broadcaster.dispatch_due(start + Duration::from_millis(60), &snapshot()),
            1
        );
        assert_eq!(broadcaster.pending_count(), 1);
        assert_eq!(
            broadcaster.dispatch_due(start + Duration::from_secs(1), &snapshot()),
            1
        );
        assert_eq!(broadcaster.pending_count(), 0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_event_wire_format() {
        let event = PresentationEvent::RerenderRequested {
            timestamp: Utc::now(),
            selected_color_set: Some(ColorSetName::Financial),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "vega-color-set-changed");
        assert_eq!(value["selectedColorSet"], "financial");
        assert!(value["timestamp"].is_string());

        let event = PresentationEvent::ColorSetChanged {
            color_set: None,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.kind());
        assert!(value["colorSet"].is_null());
    }
}
