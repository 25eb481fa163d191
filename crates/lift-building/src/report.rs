//! Building-wide snapshot and its canonical text rendering.

use std::fmt;

use lift_cab::ElevatorReport;
use lift_core::Request;

use crate::SystemStatus;

/// A value copy of the whole system's externally visible state.
///
/// Produced by [`Building::report`][crate::Building::report]; holds no
/// reference back to the live building.  `Display` renders the multi-line
/// report consumed by front-ends and tests:
///
/// ```text
/// Building Report:
/// Number of Floors: 10
/// Number of Elevators: 2
/// Elevator Capacity: 5
/// System Status: Running
///
/// Elevator Status:
///  - Elevator ID 0: Floor 1, Door Closed, Direction ^, Status: [1|^|C  ]< --  1 --  3 -- -- -- -- -- -->
///  - Elevator ID 1: Floor 0, Door Closed, Direction -, Status: Waiting[Floor 0, Time 4]
///
/// Up Requests:
///  - 3->7
///
/// Down Requests:
///  - 8->2
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingReport {
    pub floor_count:    usize,
    pub elevator_count: usize,
    pub capacity:       usize,
    pub elevators:      Vec<ElevatorReport>,
    /// Pending up requests, FIFO order.
    pub up_requests:    Vec<Request>,
    /// Pending down requests, FIFO order.
    pub down_requests:  Vec<Request>,
    pub status:         SystemStatus,
}

impl fmt::Display for BuildingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Building Report:")?;
        writeln!(f, "Number of Floors: {}", self.floor_count)?;
        writeln!(f, "Number of Elevators: {}", self.elevator_count)?;
        writeln!(f, "Elevator Capacity: {}", self.capacity)?;
        writeln!(f, "System Status: {}", self.status)?;
        writeln!(f)?;

        writeln!(f, "Elevator Status:")?;
        for cab in &self.elevators {
            writeln!(
                f,
                " - Elevator ID {}: Floor {}, {}, Direction {}, Status: {}",
                cab.id.0,
                cab.floor,
                if cab.is_door_closed() { "Door Closed" } else { "Door Open" },
                cab.direction,
                cab,
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Up Requests:")?;
        for request in &self.up_requests {
            writeln!(f, " - {request}")?;
        }
        writeln!(f)?;

        writeln!(f, "Down Requests:")?;
        for request in &self.down_requests {
            writeln!(f, " - {request}")?;
        }
        Ok(())
    }
}
