//! Tabled FSM: a small, embeddable table-driven state machine engine.
//!
//! A machine is declared as a table of `(event, from, to)` transitions plus
//! one callback per state. Both are validated once at construction; after
//! that the machine is immutable and can drive any number of caller-owned
//! state holders, which makes it a good fit for per-session protocol
//! handling.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: opaque tokens, strings or `state_enum!` /
//!   `event_enum!` enums
//! - **Transition table**: at most one transition per `(from, event)`
//! - **Callbacks**: one per state, invoked with the user event or with the
//!   synthetic `Entry` / `Exit` events
//! - **State holder**: the caller's cell tracking the current state
//!
//! # Dispatch order
//!
//! For a transition `from -> to` with `from != to`, `send_event` runs
//! the event callback of `from`, the exit callback of `from`, sets the
//! holder to `to`, then runs the entry callback of `to`. A self-loop runs
//! the event callback only.
//!
//! # Example
//!
//! ```rust
//! use tabled_fsm::builder::FsmBuilder;
//! use tabled_fsm::core::{CurrentState, StateHolder};
//!
//! let fsm = FsmBuilder::<&str, &str, (), Vec<String>>::new()
//!     .transition("start", "Idle", "Running")
//!     .transition("ping", "Idle", "Idle")
//!     .on("Idle", |_, _, event, log| log.push(format!("Idle:{event}")))
//!     .on("Running", |_, _, event, log| log.push(format!("Running:{event}")))
//!     .build()
//!     .unwrap();
//!
//! let mut holder = CurrentState::new("Idle");
//! let mut log = Vec::new();
//!
//! fsm.send_event(&(), &mut holder, "ping", &mut log).unwrap();
//! fsm.send_event(&(), &mut holder, "start", &mut log).unwrap();
//! assert!(fsm.send_event(&(), &mut holder, "start", &mut log).is_err());
//!
//! assert_eq!(holder.current(), "Running");
//! assert_eq!(
//!     log,
//!     ["Idle:ping", "Idle:start", "Idle:Exit event", "Running:Entry event"]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod export;
pub mod fsm;

// Re-export commonly used types
pub use self::core::{Args, CurrentState, Event, EventType, State, StateHolder};
pub use export::{export_dot, to_dot};
pub use fsm::{Callbacks, Fsm, FsmError, Transition};
