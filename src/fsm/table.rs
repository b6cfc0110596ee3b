//! Declared transitions and the validated lookup table built from them.

use super::error::FsmError;
use crate::core::{Event, State};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A declared transition: while in `from`, receiving `event` moves the
/// machine to `to`. `to` may equal `from`, which makes it a self-loop.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition<S, E> {
    pub event: E,
    pub from: S,
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(event: E, from: S, to: S) -> Self {
        Self { event, from, to }
    }

    /// Self-loops run only the event callback on dispatch.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Parse a list of declarations such as
    /// `[{"event": "start", "from": "Idle", "to": "Running"}]`.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        serde_json::from_str(json)
    }
}

/// Immutable `(from, event) -> transition` table.
///
/// Keeps the declarations in their original order so that exports are
/// stable, and remembers every state mentioned on either side of a
/// transition for callback validation.
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    declared: Vec<Transition<S, E>>,
    index: HashMap<S, HashMap<E, usize>>,
    states: HashSet<S>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Build the table, failing on the first declaration whose
    /// `(from, event)` key was already taken.
    pub fn build<I>(transitions: I) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let mut table = Self {
            declared: Vec::new(),
            index: HashMap::new(),
            states: HashSet::new(),
        };

        for transition in transitions {
            let by_event = table.index.entry(transition.from.clone()).or_default();
            if by_event.contains_key(&transition.event) {
                return Err(FsmError::DuplicateTransition {
                    event: transition.event.name().to_string(),
                    from: transition.from.name().to_string(),
                    to: transition.to.name().to_string(),
                });
            }

            by_event.insert(transition.event.clone(), table.declared.len());
            table.states.insert(transition.from.clone());
            table.states.insert(transition.to.clone());
            table.declared.push(transition);
        }

        Ok(table)
    }

    /// The transition declared for `event` while in `from`, if any.
    pub fn lookup(&self, from: &S, event: &E) -> Option<&Transition<S, E>> {
        let position = self.index.get(from)?.get(event)?;
        self.declared.get(*position)
    }

    /// Whether `state` appears as the source or target of any transition.
    pub fn mentions(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.declared
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// Events with a declared transition out of `from`.
    pub fn events_from(&self, from: &S) -> Vec<&E> {
        self.declared
            .iter()
            .filter(|transition| transition.from == *from)
            .map(|transition| &transition.event)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
