//! Event tokens and the synthetic entry/exit events.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Display name of the synthetic event fired when a state is entered.
pub const ENTRY_EVENT: &str = "Entry event";

/// Display name of the synthetic event fired when a state is left.
pub const EXIT_EVENT: &str = "Exit event";

/// Trait for user-declared events.
///
/// Events live in their own namespace: the engine's entry/exit
/// notifications are carried by [`EventType`] rather than by values of
/// this type, so no user event can ever be mistaken for them.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// The event a callback is invoked with.
///
/// `Custom` carries the event passed to `send_event`; `Entry` and `Exit`
/// are synthesized by the engine around a state change.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EventType<E> {
    /// The machine has just moved into the callback's state.
    Entry,
    /// The machine is about to leave the callback's state.
    Exit,
    /// A user event handled by the callback's state.
    Custom(E),
}

impl<E: Event> EventType<E> {
    pub fn name(&self) -> &str {
        match self {
            Self::Entry => ENTRY_EVENT,
            Self::Exit => EXIT_EVENT,
            Self::Custom(event) => event.name(),
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// The user event, if this is not an entry/exit notification.
    pub fn custom(&self) -> Option<&E> {
        match self {
            Self::Custom(event) => Some(event),
            _ => None,
        }
    }
}

impl<E: Event> fmt::Display for EventType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
