//! Core token types shared by the table, the engine and the callbacks.
//!
//! - States and events via the `State` and `Event` traits
//! - Synthetic entry/exit notifications via `EventType`
//! - The caller-owned `StateHolder` cell
//! - The default argument bag, `Args`

mod event;
mod holder;
mod state;

pub use event::{Event, EventType, ENTRY_EVENT, EXIT_EVENT};
pub use holder::{CurrentState, StateHolder};
pub use state::State;

/// Default argument bag: an open map of JSON values keyed by name.
///
/// Machines that want a typed payload pick their own `A` instead.
pub type Args = std::collections::HashMap<String, serde_json::Value>;
