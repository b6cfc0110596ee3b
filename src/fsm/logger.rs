//! Injected sink for the one record the engine emits per transition taken.

use log::info;

/// Default `log` target used by [`LogTransitionLogger`].
pub const DEFAULT_LOG_TARGET: &str = "tabled_fsm";

/// Receives a record every time a dispatch finds its transition.
///
/// Nothing is reported on the error path; callers log the returned error
/// themselves if they care.
pub trait TransitionLogger: Send + Sync {
    fn transition_taken(&self, event: &str, from: &str, to: &str);
}

/// Forwards transition records to the `log` facade at info level.
#[derive(Clone, Debug)]
pub struct LogTransitionLogger {
    target: &'static str,
}

impl LogTransitionLogger {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogTransitionLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_TARGET)
    }
}

impl TransitionLogger for LogTransitionLogger {
    fn transition_taken(&self, event: &str, from: &str, to: &str) {
        info!(
            target: self.target,
            "handle event[{}], transition from [{}] to [{}]", event, from, to
        );
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl TransitionLogger for NoopLogger {
    fn transition_taken(&self, _event: &str, _from: &str, _to: &str) {}
}
