//! The `Elevator` struct and its tick transition function.

use lift_core::{Direction, DoorState, ElevatorId, Floor, Request, ServiceState};

use crate::ElevatorReport;

/// Ticks a door stays open at a stop before closing automatically.
pub const DOOR_OPEN_TICKS: u32 = 3;

/// Starting value of the idle waiting display counter.
///
/// The counter is informational only: it ticks down while a cab sits idle
/// and saturates at zero without triggering anything.
pub const IDLE_WAIT_TICKS: u32 = 5;

// ── Rider bookkeeping ─────────────────────────────────────────────────────────

/// One assigned request, tracked until its rider is dropped off.
///
/// `boarded` flips when the cab opens its door at the request's origin; the
/// entry is discarded when it opens at the destination.
#[derive(Clone, Debug)]
struct BatchEntry {
    request: Request,
    boarded: bool,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// A single elevator cab.
///
/// Constructed by the building at floor 0, out of service, and re-admitted
/// to service by a system start.  All mutation goes through [`step`],
/// [`process_requests`], [`take_out_of_service`], and [`enter_service`] —
/// there is no other way to move a cab.
///
/// [`step`]: Elevator::step
/// [`process_requests`]: Elevator::process_requests
/// [`take_out_of_service`]: Elevator::take_out_of_service
/// [`enter_service`]: Elevator::enter_service
#[derive(Clone, Debug)]
pub struct Elevator {
    id:          ElevatorId,
    floor_count: usize,
    capacity:    usize,
    floor:       Floor,
    direction:   Direction,
    door:        DoorState,
    /// Stop markers, indexed by floor.  `stops[f]` means the cab must halt
    /// and open its door at floor `f`.
    stops:       Vec<bool>,
    batch:       Vec<BatchEntry>,
    occupants:   usize,
    service:     ServiceState,
    wait_remaining: u32,
}

impl Elevator {
    /// Create a cab parked at the ground floor, out of service.
    ///
    /// `floor_count` and `capacity` are taken on trust — the building
    /// validates them once at construction.
    pub fn new(id: ElevatorId, floor_count: usize, capacity: usize) -> Self {
        Self {
            id,
            floor_count,
            capacity,
            floor:          Floor::GROUND,
            direction:      Direction::Stopped,
            door:           DoorState::Closed,
            stops:          vec![false; floor_count],
            batch:          Vec::new(),
            occupants:      0,
            service:        ServiceState::OutOfService,
            wait_remaining: IDLE_WAIT_TICKS,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn door(&self) -> DoorState {
        self.door
    }

    #[inline]
    pub fn service_state(&self) -> ServiceState {
        self.service
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Riders currently on board.
    #[inline]
    pub fn occupants(&self) -> usize {
        self.occupants
    }

    /// Whether the dispatcher may hand this cab a request batch.
    #[inline]
    pub fn is_taking_requests(&self) -> bool {
        self.service.is_in_service()
    }

    fn has_stops(&self) -> bool {
        self.stops.iter().any(|&stop| stop)
    }

    // ── Dispatcher-facing operations ──────────────────────────────────────

    /// Accept a batch of requests allocated by the dispatcher.
    ///
    /// Marks every origin and destination as a stop and records each request
    /// for rider bookkeeping.  Never rejects: the dispatcher has already
    /// bounded the batch to capacity and validated every floor.
    ///
    /// An idle cab aims itself at the nearest new stop; if the nearest stop
    /// is the current floor the batch's own travel direction is used.  A cab
    /// already under way keeps its direction — the merged stops are folded in
    /// the next time its door closes.
    pub fn process_requests(&mut self, batch: Vec<Request>) {
        let Some(first) = batch.first() else { return };
        let natural = first.direction();

        for request in batch {
            self.stops[request.origin.index()] = true;
            self.stops[request.destination.index()] = true;
            self.batch.push(BatchEntry { request, boarded: false });
        }

        if self.direction == Direction::Stopped {
            self.direction = match self.nearest_stop_direction() {
                Direction::Stopped => natural,
                aimed => aimed,
            };
        }
    }

    /// Begin the one-way out-of-service sequence.
    ///
    /// Remaining stops and riders are discarded immediately.  An open door
    /// finishes its countdown before the cab starts down (nobody is shut in
    /// mid-transfer); the cab then descends one floor per tick and parks at
    /// the ground floor with its door open.  Already-withdrawn cabs are left
    /// alone.
    pub fn take_out_of_service(&mut self) {
        if self.service == ServiceState::OutOfService {
            return;
        }
        self.stops.fill(false);
        self.batch.clear();
        self.occupants = 0;
        self.direction = if self.floor.is_ground() {
            Direction::Stopped
        } else {
            Direction::Down
        };
        self.service = ServiceState::Returning;
    }

    /// Re-admit the cab to service at its current floor.
    ///
    /// Called by the building on a system start; the only way back from
    /// `Returning` or `OutOfService`.
    pub fn enter_service(&mut self) {
        self.stops.fill(false);
        self.batch.clear();
        self.occupants = 0;
        self.direction = Direction::Stopped;
        self.door = DoorState::Closed;
        self.wait_remaining = IDLE_WAIT_TICKS;
        self.service = ServiceState::InService;
    }

    /// Immutable snapshot of the cab for external consumers.
    pub fn report(&self) -> ElevatorReport {
        ElevatorReport {
            id:             self.id,
            floor:          self.floor,
            direction:      self.direction,
            door:           self.door,
            stops:          self.stops.clone(),
            service:        self.service,
            occupants:      self.occupants,
            wait_remaining: self.wait_remaining,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the cab exactly one tick.
    pub fn step(&mut self) {
        match self.service {
            // Parked at the ground floor — frozen until a system restart.
            ServiceState::OutOfService => {}
            ServiceState::Returning    => self.step_returning(),
            ServiceState::InService    => self.step_in_service(),
        }
    }

    fn step_in_service(&mut self) {
        // ① Door open: run the countdown.
        if let DoorState::Open(remaining) = self.door {
            if remaining > 1 {
                self.door = DoorState::Open(remaining - 1);
            } else {
                self.door = DoorState::Closed;
                self.direction = self.nearest_stop_direction();
                if self.direction == Direction::Stopped {
                    self.wait_remaining = IDLE_WAIT_TICKS;
                }
            }
            return;
        }

        // ② Standing on a stop: exchange riders and open up.
        if self.stops[self.floor.index()] {
            self.stops[self.floor.index()] = false;
            self.exchange_riders();
            self.door = DoorState::Open(DOOR_OPEN_TICKS);
            return;
        }

        // ③ Work left: move one floor toward it.
        if self.has_stops() {
            if self.direction == Direction::Stopped {
                self.direction = self.nearest_stop_direction();
            }
            match self.direction {
                Direction::Up      => self.floor = self.floor.up(),
                Direction::Down    => self.floor = self.floor.down(),
                Direction::Stopped => {}
            }
            return;
        }

        // ④ Idle: tick the waiting display down.
        self.wait_remaining = self.wait_remaining.saturating_sub(1);
    }

    fn step_returning(&mut self) {
        if self.floor.is_ground() {
            self.park();
            return;
        }

        // Grace period: finish an in-progress door cycle before descending.
        if let DoorState::Open(remaining) = self.door {
            self.door = if remaining > 1 {
                DoorState::Open(remaining - 1)
            } else {
                DoorState::Closed
            };
            return;
        }

        self.floor = self.floor.down();
        if self.floor.is_ground() {
            self.park();
        }
    }

    /// Terminal halt at the ground floor: door open, nothing moves again.
    fn park(&mut self) {
        self.direction = Direction::Stopped;
        self.door = DoorState::Open(0);
        self.service = ServiceState::OutOfService;
    }

    /// Board waiting riders and discharge arriving ones at the current floor.
    fn exchange_riders(&mut self) {
        let here = self.floor;
        self.batch.retain_mut(|entry| {
            if entry.boarded && entry.request.destination == here {
                return false;
            }
            if !entry.boarded && entry.request.origin == here {
                entry.boarded = true;
            }
            true
        });
        self.occupants = self.batch.iter().filter(|entry| entry.boarded).count();
    }

    /// Direction of the nearest marked stop, scanning outward from the
    /// current floor; `Stopped` when no stops remain.  Ties go up.
    fn nearest_stop_direction(&self) -> Direction {
        let here = self.floor.index();
        for distance in 1..self.floor_count {
            let above = here + distance;
            if above < self.floor_count && self.stops[above] {
                return Direction::Up;
            }
            if let Some(below) = here.checked_sub(distance) {
                if self.stops[below] {
                    return Direction::Down;
                }
            }
        }
        Direction::Stopped
    }
}
