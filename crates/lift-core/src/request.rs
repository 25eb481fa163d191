//! Service requests — an origin floor and a destination floor.

use std::fmt;

use crate::{Direction, Floor};

/// One rider's request: travel from `origin` to `destination`.
///
/// Immutable once created.  The direction is derived, never stored: a request
/// travels [`Direction::Up`] exactly when `origin < destination`.
///
/// `Request` is a plain value — floor-range and distinct-floor validation
/// happens where requests enter the system (the building's `add_request`),
/// so everything downstream can assume well-formedness.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub origin:      Floor,
    pub destination: Floor,
}

impl Request {
    pub fn new(origin: Floor, destination: Floor) -> Self {
        Self { origin, destination }
    }

    /// Direction of travel implied by the floor pair.
    ///
    /// Well-formed requests never have `origin == destination`; such a pair
    /// reports `Down` here but is rejected before it reaches a queue.
    #[inline]
    pub fn direction(self) -> Direction {
        if self.origin < self.destination {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}
