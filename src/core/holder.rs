//! The caller-owned cell that tracks which state a machine is in.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Mutable cell holding the current state of one machine instance.
///
/// The engine reads it before looking up a transition and writes it between
/// the exit and entry callbacks. Its lifetime belongs to the caller, which
/// typically keeps one holder per logical actor (a session, a connection)
/// and drives many dispatches through it.
pub trait StateHolder<S: State> {
    fn current(&self) -> S;

    fn set(&mut self, state: S);
}

/// Plain [`StateHolder`] storing the state by value.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CurrentState<S> {
    state: S,
}

impl<S: State> CurrentState<S> {
    pub fn new(initial: S) -> Self {
        Self { state: initial }
    }

    /// Borrow the current state without cloning it.
    pub fn get(&self) -> &S {
        &self.state
    }

    pub fn into_inner(self) -> S {
        self.state
    }
}

impl<S: State> StateHolder<S> for CurrentState<S> {
    fn current(&self) -> S {
        self.state.clone()
    }

    fn set(&mut self, state: S) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_reports_what_was_set() {
        let mut holder = CurrentState::new("Idle");
        assert_eq!(holder.current(), "Idle");

        holder.set("Running");
        assert_eq!(holder.current(), "Running");
        assert_eq!(holder.get(), &"Running");
        assert_eq!(holder.into_inner(), "Running");
    }

    #[test]
    fn holder_round_trips_through_json() {
        let holder = CurrentState::new(String::from("Registered"));
        let json = serde_json::to_string(&holder).unwrap();
        let restored: CurrentState<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, holder);
    }
}
