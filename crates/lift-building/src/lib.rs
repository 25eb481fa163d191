//! `lift-building` — the dispatcher that coordinates an elevator bank.
//!
//! A [`Building`] owns its cabs, two direction-keyed FIFO request queues, and
//! the system lifecycle status.  External callers drive it through a small
//! synchronous API and read state back as value snapshots:
//!
//! ```text
//! caller → add_request(..)   enqueue by direction
//!        → step()            allocate batches, then tick every cab once
//!        → report()          immutable snapshot of cabs + queues + status
//! ```
//!
//! # Allocation policy
//!
//! Requests are handed out only at the two rendezvous floors: a cab standing
//! at the ground floor drains the front of the up queue, a cab at the top
//! floor drains the down queue, at most `capacity` requests per cab per tick.
//! Mid-shaft pickups are deliberately not attempted — two well-known meeting
//! points keep the policy simple and provably terminating, at the price of
//! optimality.  Drained requests are never redelivered.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Running       → allocate queued requests to eligible cabs
//!   ② OutOfService  → return (a fully stopped system is frozen)
//!   ③ tick every cab once, in index order
//!   ④ Stopping and every cab at floor 0 → OutOfService
//! ```

pub mod building;
pub mod error;
pub mod queue;
pub mod report;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{Building, MIN_CAPACITY, MIN_ELEVATORS, MIN_FLOORS};
pub use error::{BuildingError, BuildingResult};
pub use queue::RequestQueue;
pub use report::BuildingReport;
pub use status::SystemStatus;
