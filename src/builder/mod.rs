//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and token-enum macros for
//! declaring machines with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::FsmBuilder;

use crate::core::{Event, State};
use crate::fsm::Transition;

/// Declare the same self-loop for several events on one state.
///
/// Handy for states that absorb housekeeping events (timers, keepalives)
/// without ever leaving.
///
/// # Example
///
/// ```
/// use tabled_fsm::builder::self_loops;
///
/// let loops = self_loops("Registered", ["keepalive", "refresh"]);
///
/// assert_eq!(loops.len(), 2);
/// assert!(loops.iter().all(|t| t.is_self_loop()));
/// ```
pub fn self_loops<S, E, I>(state: S, events: I) -> Vec<Transition<S, E>>
where
    S: State,
    E: Event,
    I: IntoIterator<Item = E>,
{
    events
        .into_iter()
        .map(|event| Transition::new(event, state.clone(), state.clone()))
        .collect()
}
