//! Errors raised while building a machine or dispatching an event.

use thiserror::Error;

/// Errors that can occur when constructing or driving an [`Fsm`](super::Fsm).
///
/// `DuplicateTransition` and `UnknownState` come out of construction and
/// mean the declared table must be fixed. `UnknownTransition` and
/// `MissingCallback` come out of dispatch; in both cases no callback has
/// run and the holder is untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("duplicate transition: event [{event}] from [{from}] to [{to}]")]
    DuplicateTransition {
        event: String,
        from: String,
        to: String,
    },

    #[error("unknown state: {state}")]
    UnknownState { state: String },

    #[error("unknown transition[From: {from}, Event: {event}]")]
    UnknownTransition { from: String, event: String },

    #[error("no callback registered for state [{state}]")]
    MissingCallback { state: String },
}

impl FsmError {
    /// True for the errors `Fsm::new` can return.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTransition { .. } | Self::UnknownState { .. }
        )
    }
}
