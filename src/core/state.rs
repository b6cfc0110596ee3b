//! Core State trait for state machine states.
//!
//! A state is an opaque token: the engine only compares, hashes and names
//! it. Plain string tokens work out of the box, and enums can opt in through
//! the `state_enum!` macro.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the holder hands out owned copies of the current state
/// - `Eq` + `Hash`: states key the transition table and callback registry
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: a built machine may be shared between threads
///
/// # Example
///
/// ```rust
/// use tabled_fsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum LinkState {
///     Down,
///     Up,
/// }
///
/// impl State for LinkState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Down => "Down",
///             Self::Up => "Up",
///         }
///     }
/// }
///
/// assert_eq!(LinkState::Up.name(), "Up");
/// assert_eq!("Idle".name(), "Idle");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
