//! Builder for constructing state machines.

use crate::core::{Event, EventType, State, StateHolder};
use crate::fsm::{Callback, Callbacks, Fsm, FsmError, Transition, TransitionLogger};
use std::sync::Arc;

/// Builder for constructing an [`Fsm`] with a fluent API.
///
/// Nothing is validated until [`build`](Self::build), which applies the same
/// checks as [`Fsm::new`].
pub struct FsmBuilder<S: State, E: Event, Env, A> {
    transitions: Vec<Transition<S, E>>,
    callbacks: Callbacks<S, E, Env, A>,
    logger: Option<Arc<dyn TransitionLogger>>,
}

impl<S: State, E: Event, Env, A> FsmBuilder<S, E, Env, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            callbacks: Callbacks::new(),
            logger: None,
        }
    }

    /// Declare that `event` moves the machine from `from` to `to`.
    pub fn transition(mut self, event: E, from: S, to: S) -> Self {
        self.transitions.push(Transition::new(event, from, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Register the callback for `state`.
    pub fn on<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&Env, &mut dyn StateHolder<S>, &EventType<E>, &mut A) + Send + Sync + 'static,
    {
        self.callbacks.insert(state, Arc::new(callback));
        self
    }

    /// Register one shared callback for several states.
    pub fn on_each<I>(mut self, states: I, callback: Callback<S, E, Env, A>) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            self.callbacks.insert(state, Arc::clone(&callback));
        }
        self
    }

    /// Use `logger` instead of the default `log` forwarding.
    pub fn logger(mut self, logger: Arc<dyn TransitionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the state machine.
    /// Returns an error if the transition table or callbacks are invalid.
    pub fn build(self) -> Result<Fsm<S, E, Env, A>, FsmError> {
        let fsm = Fsm::new(self.transitions, self.callbacks)?;

        Ok(match self.logger {
            Some(logger) => fsm.with_logger(logger),
            None => fsm,
        })
    }
}

impl<S: State, E: Event, Env, A> Default for FsmBuilder<S, E, Env, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurrentState;
    use crate::fsm::NoopLogger;

    type Builder = FsmBuilder<&'static str, &'static str, (), Vec<String>>;

    #[test]
    fn builder_validates_duplicates() {
        let result = Builder::new()
            .transition("start", "Idle", "Running")
            .transition("start", "Idle", "Stopped")
            .build();

        assert!(matches!(result, Err(FsmError::DuplicateTransition { .. })));
    }

    #[test]
    fn builder_validates_callback_states() {
        let result = Builder::new()
            .transition("start", "Idle", "Running")
            .on("Paused", |_, _, _, _| {})
            .build();

        assert!(matches!(result, Err(FsmError::UnknownState { .. })));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let fsm = Builder::new()
            .transition("start", "Idle", "Running")
            .add_transition(Transition::new("stop", "Running", "Idle"))
            .transitions(vec![Transition::new("ping", "Running", "Running")])
            .on("Idle", |_, _, event, log| log.push(format!("Idle:{event}")))
            .on("Running", |_, _, event, log| log.push(format!("Running:{event}")))
            .logger(Arc::new(NoopLogger))
            .build()
            .unwrap();

        let mut holder = CurrentState::new("Idle");
        let mut log = Vec::new();
        fsm.send_event(&(), &mut holder, "start", &mut log).unwrap();
        fsm.send_event(&(), &mut holder, "ping", &mut log).unwrap();

        assert_eq!(fsm.transitions().len(), 3);
        assert_eq!(
            log,
            [
                "Idle:start",
                "Idle:Exit event",
                "Running:Entry event",
                "Running:ping"
            ]
        );
    }

    #[test]
    fn shared_callback_covers_several_states() {
        fn label(
            _: &(),
            holder: &mut dyn StateHolder<&'static str>,
            event: &EventType<&'static str>,
            log: &mut Vec<String>,
        ) {
            log.push(format!("{}:{event}", holder.current()));
        }

        let shared: Callback<&'static str, &'static str, (), Vec<String>> = Arc::new(label);

        let fsm = Builder::new()
            .transition("start", "Idle", "Running")
            .on_each(["Idle", "Running"], shared)
            .build()
            .unwrap();

        let mut holder = CurrentState::new("Idle");
        let mut log = Vec::new();
        fsm.send_event(&(), &mut holder, "start", &mut log).unwrap();

        assert_eq!(
            log,
            ["Idle:start", "Idle:Exit event", "Running:Entry event"]
        );
    }
}
