//! Per-state behavior callbacks and their validation against a table.

use super::error::FsmError;
use super::table::TransitionTable;
use crate::core::{Event, EventType, State, StateHolder};
use std::collections::HashMap;
use std::sync::Arc;

/// Behavior attached to one state.
///
/// Invoked synchronously with the execution context, the holder, the event
/// being handled (a user event, or the synthetic entry/exit) and the
/// argument bag shared by every callback of the same dispatch.
pub type Callback<S, E, Env, A> =
    Arc<dyn Fn(&Env, &mut dyn StateHolder<S>, &EventType<E>, &mut A) + Send + Sync>;

/// Unvalidated `state -> callback` mapping handed to `Fsm::new`.
///
/// Registering a state twice replaces the earlier callback.
pub struct Callbacks<S, E, Env, A> {
    entries: Vec<(S, Callback<S, E, Env, A>)>,
}

impl<S: State, E: Event, Env, A> Callbacks<S, E, Env, A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `callback` for `state`.
    pub fn on<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&Env, &mut dyn StateHolder<S>, &EventType<E>, &mut A) + Send + Sync + 'static,
    {
        self.insert(state, Arc::new(callback));
        self
    }

    /// Register an already shared callback, e.g. one used by several states.
    pub fn insert(&mut self, state: S, callback: Callback<S, E, Env, A>) {
        match self.entries.iter_mut().find(|(known, _)| *known == state) {
            Some(entry) => entry.1 = callback,
            None => self.entries.push((state, callback)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every registered state against `table` and freeze the mapping.
    ///
    /// States the table mentions but that have no callback are accepted
    /// here; they only fail if a dispatch actually needs them.
    pub(crate) fn validate(
        self,
        table: &TransitionTable<S, E>,
    ) -> Result<HashMap<S, Callback<S, E, Env, A>>, FsmError> {
        let mut registry = HashMap::with_capacity(self.entries.len());
        for (state, callback) in self.entries {
            if !table.mentions(&state) {
                return Err(FsmError::UnknownState {
                    state: state.name().to_string(),
                });
            }
            registry.insert(state, callback);
        }
        Ok(registry)
    }
}

impl<S: State, E: Event, Env, A> Default for Callbacks<S, E, Env, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, Env, A> FromIterator<(S, Callback<S, E, Env, A>)>
    for Callbacks<S, E, Env, A>
{
    fn from_iter<I: IntoIterator<Item = (S, Callback<S, E, Env, A>)>>(iter: I) -> Self {
        let mut callbacks = Self::new();
        for (state, callback) in iter {
            callbacks.insert(state, callback);
        }
        callbacks
    }
}
