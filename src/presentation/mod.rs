//! Presentation state shared by every chart renderer.
//!
//! The state itself, its durable storage, its mirror on the document root and
//! the change notifications renderers subscribe to.

pub mod broadcast;
pub mod mirror;
pub mod state;
pub mod store;

pub use broadcast::{Broadcaster, ListenerId, PresentationEvent, PresentationSnapshot};
pub use mirror::{DocumentMirror, RootAttributes, COLOR_SET_ATTRIBUTE, THEME_ATTRIBUTE};
pub use state::{PresentationState, DEFAULT_RERENDER_DELAY};
pub use store::{FileStore, MemoryStore, StateStore, StoredPresentation};
