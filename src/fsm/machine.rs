//! The engine: validated table + callback registry + dispatch protocol.

use super::callback::{Callback, Callbacks};
use super::error::FsmError;
use super::logger::{LogTransitionLogger, TransitionLogger};
use super::table::{Transition, TransitionTable};
use crate::core::{Args, Event, EventType, State, StateHolder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Table-driven finite state machine.
///
/// The machine does not own its current state: every dispatch is handed
/// the caller's [`StateHolder`], so one `Fsm` can drive any number of
/// independent instances. Table and callbacks are fixed at construction.
///
/// # Example
///
/// ```rust
/// use tabled_fsm::core::{CurrentState, StateHolder};
/// use tabled_fsm::fsm::{Callbacks, Fsm, Transition};
///
/// let callbacks = Callbacks::<&str, &str, (), Vec<String>>::new()
///     .on("Idle", |_, _, event, log| log.push(format!("Idle:{event}")))
///     .on("Running", |_, _, event, log| log.push(format!("Running:{event}")));
/// let fsm = Fsm::new(vec![Transition::new("start", "Idle", "Running")], callbacks).unwrap();
///
/// let mut holder = CurrentState::new("Idle");
/// let mut log = Vec::new();
/// fsm.send_event(&(), &mut holder, "start", &mut log).unwrap();
///
/// assert_eq!(holder.current(), "Running");
/// assert_eq!(log, ["Idle:start", "Idle:Exit event", "Running:Entry event"]);
/// ```
pub struct Fsm<S: State, E: Event, Env = (), A = Args> {
    table: TransitionTable<S, E>,
    callbacks: HashMap<S, Callback<S, E, Env, A>>,
    logger: Arc<dyn TransitionLogger>,
}

impl<S: State, E: Event, Env, A> Fsm<S, E, Env, A> {
    /// Build a machine from declared transitions and per-state callbacks.
    ///
    /// Fails with `DuplicateTransition` if two declarations share a
    /// `(from, event)` key, and with `UnknownState` if a callback is
    /// registered for a state no transition mentions.
    pub fn new<I>(transitions: I, callbacks: Callbacks<S, E, Env, A>) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let table = TransitionTable::build(transitions)?;
        let callbacks = callbacks.validate(&table)?;

        Ok(Self {
            table,
            callbacks,
            logger: Arc::new(LogTransitionLogger::default()),
        })
    }

    /// Replace the transition logger.
    pub fn with_logger(mut self, logger: Arc<dyn TransitionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Dispatch `event` against the state currently in `holder`.
    ///
    /// Runs the event callback of the current state, then, unless the
    /// transition is a self-loop, the exit callback of the current state,
    /// `holder.set(to)` and the entry callback of the target state. The same
    /// `args` is handed to all of them.
    ///
    /// Lookup and callback presence are checked before anything runs, so on
    /// error no callback has been invoked and the holder is untouched.
    pub fn send_event<H>(
        &self,
        env: &Env,
        holder: &mut H,
        event: E,
        args: &mut A,
    ) -> Result<(), FsmError>
    where
        H: StateHolder<S>,
    {
        let from = holder.current();
        let transition =
            self.table
                .lookup(&from, &event)
                .ok_or_else(|| FsmError::UnknownTransition {
                    from: from.name().to_string(),
                    event: event.name().to_string(),
                })?;

        let on_from = self.callback(&transition.from)?;
        let on_to = if transition.is_self_loop() {
            None
        } else {
            Some(self.callback(&transition.to)?)
        };

        self.logger.transition_taken(
            event.name(),
            transition.from.name(),
            transition.to.name(),
        );

        let holder: &mut dyn StateHolder<S> = holder;
        on_from(env, &mut *holder, &EventType::Custom(event), args);

        if let Some(on_to) = on_to {
            on_from(env, &mut *holder, &EventType::Exit, args);
            holder.set(transition.to.clone());
            on_to(env, &mut *holder, &EventType::Entry, args);
        }

        Ok(())
    }

    /// Whether `event` has a declared transition out of `from`.
    pub fn can_handle(&self, from: &S, event: &E) -> bool {
        self.table.lookup(from, event).is_some()
    }

    /// The transition declared for `event` while in `from`, if any.
    pub fn transition(&self, from: &S, event: &E) -> Option<&Transition<S, E>> {
        self.table.lookup(from, event)
    }

    /// All declared transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E>] {
        self.table.transitions()
    }

    /// Every state mentioned by the table.
    pub fn states(&self) -> &HashSet<S> {
        self.table.states()
    }

    /// Events that can be dispatched while in `from`.
    pub fn events_from(&self, from: &S) -> Vec<&E> {
        self.table.events_from(from)
    }

    pub fn has_callback(&self, state: &S) -> bool {
        self.callbacks.contains_key(state)
    }

    fn callback(&self, state: &S) -> Result<&Callback<S, E, Env, A>, FsmError> {
        self.callbacks
            .get(state)
            .ok_or_else(|| FsmError::MissingCallback {
                state: state.name().to_string(),
            })
    }
}

impl<S: State, E: Event, Env, A> std::fmt::Debug for Fsm<S, E, Env, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsm")
            .field("transitions", &self.table.transitions())
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}
