//! Read-only cab snapshots and their canonical text rendering.

use std::fmt;

use lift_core::{Direction, DoorState, ElevatorId, Floor, ServiceState};

/// A value copy of one cab's externally visible state.
///
/// Reports hold no reference back to the live cab — consumers can keep them
/// across ticks without observing later mutation.
///
/// # Canonical rendering
///
/// `Display` reproduces the simulator's wire-format line, one of:
///
/// ```text
/// [3|^|C  ]< -- -- --  3 -- --  6 -- -- -->   in service, with work
/// Waiting[Floor 0, Time 5]                    in service, idle
/// Out of Service[Floor 0]                     parked out of service
/// ```
///
/// The bracketed form is `[floor|direction|door]` followed by one token per
/// floor — `--` for a pass-through floor, the floor number for a stop.  The
/// door renders `C  ` closed or `O n` with `n` ticks left open.  A cab
/// descending out of service still renders the bracketed form; only the
/// terminal parked state uses the `Out of Service` form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorReport {
    pub id:             ElevatorId,
    pub floor:          Floor,
    pub direction:      Direction,
    pub door:           DoorState,
    /// Stop markers, indexed by floor.
    pub stops:          Vec<bool>,
    pub service:        ServiceState,
    pub occupants:      usize,
    pub wait_remaining: u32,
}

impl ElevatorReport {
    /// `true` once the cab has been withdrawn (descending or parked).
    #[inline]
    pub fn is_out_of_service(&self) -> bool {
        !self.service.is_in_service()
    }

    #[inline]
    pub fn is_door_closed(&self) -> bool {
        self.door.is_closed()
    }

    pub fn has_stops(&self) -> bool {
        self.stops.iter().any(|&stop| stop)
    }

    /// The marked stop floors, ascending.
    pub fn stop_floors(&self) -> Vec<Floor> {
        self.stops
            .iter()
            .enumerate()
            .filter(|&(_, &stop)| stop)
            .map(|(floor, _)| Floor(floor as u16))
            .collect()
    }
}

impl fmt::Display for ElevatorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.service == ServiceState::OutOfService {
            return write!(f, "Out of Service[Floor {}]", self.floor);
        }
        if self.service == ServiceState::InService
            && self.direction == Direction::Stopped
            && !self.has_stops()
        {
            return write!(f, "Waiting[Floor {}, Time {}]", self.floor, self.wait_remaining);
        }

        match self.door {
            DoorState::Closed  => write!(f, "[{}|{}|C  ]<", self.floor, self.direction)?,
            DoorState::Open(n) => write!(f, "[{}|{}|O {}]<", self.floor, self.direction, n)?,
        }
        for (floor, &stop) in self.stops.iter().enumerate() {
            if stop {
                write!(f, " {floor:>2}")?;
            } else {
                write!(f, " --")?;
            }
        }
        write!(f, ">")
    }
}
