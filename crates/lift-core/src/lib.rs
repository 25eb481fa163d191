//! `lift-core` — foundational types for the liftsim elevator bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`ids`]       | `Floor`, `ElevatorId`                      |
//! | [`direction`] | `Direction` enum and its `^`/`v`/`-` form  |
//! | [`door`]      | `DoorState` (closed / open with countdown) |
//! | [`service`]   | `ServiceState` per-cab lifecycle           |
//! | [`request`]   | `Request` origin→destination value type    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod direction;
pub mod door;
pub mod ids;
pub mod request;
pub mod service;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use door::DoorState;
pub use ids::{ElevatorId, Floor};
pub use request::Request;
pub use service::ServiceState;
