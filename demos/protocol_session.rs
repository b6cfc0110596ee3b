//! Protocol Session
//!
//! This example drives a registration session through a table-driven
//! machine and writes the table out as a Graphviz file.
//!
//! Key concepts:
//! - Token enums declared with `state_enum!` / `event_enum!`
//! - One callback per state, receiving user and entry/exit events
//! - A typed argument bag shared across one dispatch
//! - Dot export for visual inspection
//!
//! Run with: RUST_LOG=info cargo run --example protocol_session

use tabled_fsm::builder::{self_loops, FsmBuilder};
use tabled_fsm::core::{CurrentState, EventType, State, StateHolder};
use tabled_fsm::export::export_dot;
use tabled_fsm::{event_enum, state_enum};

state_enum! {
    enum SessionState {
        Deregistered,
        Authentication,
        Registered,
    }
}

event_enum! {
    enum SessionEvent {
        RegistrationRequest,
        AuthSuccess,
        AuthFail,
        Keepalive,
        Deregister,
    }
}

/// Per-session context handed to every callback.
struct Session {
    ue_id: u64,
}

/// Payload shared by the callbacks of one dispatch.
#[derive(Default, Debug)]
struct Outcome {
    notes: Vec<String>,
}

fn trace(
    session: &Session,
    state: SessionState,
    event: &EventType<SessionEvent>,
    out: &mut Outcome,
) {
    out.notes
        .push(format!("ue {} {}: {}", session.ue_id, state.name(), event));
}

fn main() {
    env_logger::init();

    println!("=== Protocol Session Example ===\n");

    let fsm = FsmBuilder::<SessionState, SessionEvent, Session, Outcome>::new()
        .transition(
            SessionEvent::RegistrationRequest,
            SessionState::Deregistered,
            SessionState::Authentication,
        )
        .transition(
            SessionEvent::AuthSuccess,
            SessionState::Authentication,
            SessionState::Registered,
        )
        .transition(
            SessionEvent::AuthFail,
            SessionState::Authentication,
            SessionState::Deregistered,
        )
        .transition(
            SessionEvent::Deregister,
            SessionState::Registered,
            SessionState::Deregistered,
        )
        .transitions(self_loops(SessionState::Registered, [SessionEvent::Keepalive]))
        .on(SessionState::Deregistered, |session, _, event, out| {
            trace(session, SessionState::Deregistered, event, out)
        })
        .on(SessionState::Authentication, |session, _, event, out| {
            trace(session, SessionState::Authentication, event, out)
        })
        .on(SessionState::Registered, |session, _, event, out| {
            trace(session, SessionState::Registered, event, out)
        })
        .build();

    let fsm = match fsm {
        Ok(fsm) => fsm,
        Err(err) => {
            eprintln!("invalid machine: {err}");
            return;
        }
    };

    let session = Session { ue_id: 1 };
    let mut holder = CurrentState::new(SessionState::Deregistered);

    for event in [
        SessionEvent::RegistrationRequest,
        SessionEvent::AuthSuccess,
        SessionEvent::Keepalive,
        SessionEvent::AuthSuccess,
        SessionEvent::Deregister,
    ] {
        let mut outcome = Outcome::default();
        match fsm.send_event(&session, &mut holder, event, &mut outcome) {
            Ok(()) => {
                for note in outcome.notes {
                    println!("  {note}");
                }
            }
            Err(err) => println!("  rejected: {err}"),
        }
        println!("now in {}\n", holder.current().name());
    }

    match export_dot(&fsm, std::env::temp_dir().join("protocol_session")) {
        Ok(path) => println!("Graph written to {}", path.display()),
        Err(err) => eprintln!("export failed: {err}"),
    }

    println!("\n=== Example Complete ===");
}
