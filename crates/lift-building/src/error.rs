//! Dispatcher error type.
//!
//! The cab state machine itself never fails — every batch it receives has
//! already been validated and capacity-bounded here, so all fallible paths
//! in the workspace surface as a `BuildingError`.

use thiserror::Error;

use lift_core::Floor;

use crate::SystemStatus;

/// Errors returned by [`Building`][crate::Building] operations.
#[derive(Debug, Error)]
pub enum BuildingError {
    /// A construction parameter is below its minimum.  Fatal: the building
    /// was not created.
    #[error("{what} must be at least {min}, got {got}")]
    InvalidConfiguration {
        what: &'static str,
        min:  usize,
        got:  usize,
    },

    /// More floors than the floor index type can address.
    #[error("number of floors must be at most {max}, got {got}")]
    TooManyFloors { max: usize, got: usize },

    /// `start_system` was called while cabs are still converging on the
    /// ground floor.  Recoverable: retry once the stop completes.
    #[error("cannot start the elevator system while it is stopping")]
    StartWhileStopping,

    /// A request arrived while the system was not running.  Recoverable:
    /// surface to the requester.
    #[error("the elevator system is not accepting requests: {0}")]
    NotAccepting(SystemStatus),

    /// A request named a floor outside the building.
    #[error("floor {floor} is outside the building ({floor_count} floors)")]
    FloorOutOfRange { floor: Floor, floor_count: usize },

    /// A request's origin and destination are the same floor.
    #[error("request origin and destination are both floor {0}")]
    DegenerateRequest(Floor),
}

/// Shorthand result type for building operations.
pub type BuildingResult<T> = Result<T, BuildingError>;
