//! `lift-cab` — the elevator cab state machine for the liftsim simulator.
//!
//! An [`Elevator`] owns exactly its own physical state: current floor, travel
//! direction, door, per-floor stop markers, rider bookkeeping, and service
//! lifecycle.  It advances one discrete tick per [`Elevator::step`] call and
//! never references its building — batches of requests arrive through
//! [`Elevator::process_requests`], already validated and capacity-bounded by
//! the dispatcher.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Door open     — run the countdown; on expiry close and re-aim at the
//!                     nearest remaining stop (or go idle).
//!   ② At a stop     — clear the marker, exchange riders, open the door.
//!   ③ Stops remain  — move exactly one floor in the current direction.
//!   ④ Idle          — tick the waiting display counter down (saturating).
//! ```
//!
//! A withdrawn cab ([`Elevator::take_out_of_service`]) replaces ②–④ with a
//! descent to the ground floor, where it parks permanently with its door open.

pub mod cab;
pub mod report;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cab::{DOOR_OPEN_TICKS, Elevator, IDLE_WAIT_TICKS};
pub use report::ElevatorReport;
