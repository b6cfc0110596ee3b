//! Table-driven state machine engine.
//!
//! A machine is built once from a list of [`Transition`]s and a set of
//! per-state [`Callbacks`], both validated up front:
//!
//! - two transitions may not share a `(from, event)` key
//! - a callback may only be registered for a state some transition mentions
//!
//! Dispatching an event then runs the callbacks in a fixed order:
//! event (source state), exit (source state), state change, entry (target
//! state). Self-loops run the event callback only.

mod callback;
mod error;
mod logger;
mod machine;
mod table;

pub use callback::{Callback, Callbacks};
pub use error::FsmError;
pub use logger::{LogTransitionLogger, NoopLogger, TransitionLogger, DEFAULT_LOG_TARGET};
pub use machine::Fsm;
pub use table::{Transition, TransitionTable};
