//! The `Building` dispatcher and its tick loop.

use lift_cab::Elevator;
use lift_core::{Direction, ElevatorId, Floor, Request, ServiceState};

use crate::{BuildingError, BuildingReport, BuildingResult, RequestQueue, SystemStatus};

/// Minimum number of floors for a meaningful building.
pub const MIN_FLOORS: usize = 2;
/// Minimum number of cabs.
pub const MIN_ELEVATORS: usize = 1;
/// Minimum cab capacity.
pub const MIN_CAPACITY: usize = 3;

/// A building: the cab bank, the two request queues, and the system status.
///
/// All three are owned exclusively — cabs never reference the building or
/// each other, and the queues are reachable only through the operations
/// below.  Everything is single-threaded and advances only on [`step`].
///
/// [`step`]: Building::step
pub struct Building {
    floor_count:   usize,
    capacity:      usize,
    elevators:     Vec<Elevator>,
    up_requests:   RequestQueue,
    down_requests: RequestQueue,
    status:        SystemStatus,
}

impl Building {
    /// Create a building with `number_of_elevators` cabs parked out of
    /// service at the ground floor.
    ///
    /// Fails unless `number_of_floors ≥ 2` (and addressable by [`Floor`]),
    /// `number_of_elevators ≥ 1`, and `elevator_capacity ≥ 3`.
    pub fn new(
        number_of_floors:    usize,
        number_of_elevators: usize,
        elevator_capacity:   usize,
    ) -> BuildingResult<Self> {
        if number_of_floors < MIN_FLOORS {
            return Err(BuildingError::InvalidConfiguration {
                what: "number of floors",
                min:  MIN_FLOORS,
                got:  number_of_floors,
            });
        }
        if number_of_floors > Floor::MAX_FLOOR_COUNT {
            return Err(BuildingError::TooManyFloors {
                max: Floor::MAX_FLOOR_COUNT,
                got: number_of_floors,
            });
        }
        if number_of_elevators < MIN_ELEVATORS {
            return Err(BuildingError::InvalidConfiguration {
                what: "number of elevators",
                min:  MIN_ELEVATORS,
                got:  number_of_elevators,
            });
        }
        if elevator_capacity < MIN_CAPACITY {
            return Err(BuildingError::InvalidConfiguration {
                what: "elevator capacity",
                min:  MIN_CAPACITY,
                got:  elevator_capacity,
            });
        }

        let elevators = (0..number_of_elevators)
            .map(|i| Elevator::new(ElevatorId(i as u32), number_of_floors, elevator_capacity))
            .collect();

        Ok(Self {
            floor_count: number_of_floors,
            capacity: elevator_capacity,
            elevators,
            up_requests:   RequestQueue::new(),
            down_requests: RequestQueue::new(),
            status:        SystemStatus::OutOfService,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    #[inline]
    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// The topmost floor — the down-direction rendezvous point.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor((self.floor_count - 1) as u16)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start the elevator system.
    ///
    /// Idempotent while running.  Fails while stopping — the wind-down must
    /// complete first.  From out of service, re-admits every cab at its
    /// current floor and begins accepting requests.
    pub fn start_system(&mut self) -> BuildingResult<()> {
        match self.status {
            SystemStatus::Running => Ok(()),
            SystemStatus::Stopping => Err(BuildingError::StartWhileStopping),
            SystemStatus::OutOfService => {
                for cab in &mut self.elevators {
                    cab.enter_service();
                }
                self.status = SystemStatus::Running;
                Ok(())
            }
        }
    }

    /// Order a graceful stop.  No-op unless running.
    ///
    /// Every cab begins its out-of-service descent and both queues are
    /// discarded — unallocated requests are lost, while batches already
    /// assigned to a cab were cleared by the cab's own withdrawal.  The
    /// status stays `Stopping` until every cab reaches the ground floor.
    pub fn stop_system(&mut self) {
        if self.status != SystemStatus::Running {
            return;
        }
        for cab in &mut self.elevators {
            cab.take_out_of_service();
        }
        self.up_requests.clear();
        self.down_requests.clear();
        self.status = SystemStatus::Stopping;
    }

    /// Withdraw a single cab; the rest of the system keeps running.
    ///
    /// Unknown ids are ignored.
    pub fn take_elevator_out_of_service(&mut self, id: ElevatorId) {
        if let Some(cab) = self.elevators.get_mut(id.index()) {
            cab.take_out_of_service();
        }
    }

    /// Withdraw every cab and force the system out of service immediately.
    ///
    /// Administrative override: unlike [`stop_system`][Self::stop_system],
    /// this does not wait for cabs to reach the ground floor — the system
    /// freezes where it stands until the next [`start_system`][Self::start_system].
    pub fn take_all_out_of_service(&mut self) {
        for cab in &mut self.elevators {
            cab.take_out_of_service();
        }
        self.status = SystemStatus::OutOfService;
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Submit a service request from `origin` to `destination`.
    ///
    /// Accepted only while running; the status check comes first, so a
    /// malformed request against a stopped system reports not-accepting.
    /// Valid requests join the back of the queue for their direction.
    pub fn add_request(&mut self, origin: Floor, destination: Floor) -> BuildingResult<()> {
        if self.status != SystemStatus::Running {
            return Err(BuildingError::NotAccepting(self.status));
        }
        for floor in [origin, destination] {
            if floor.index() >= self.floor_count {
                return Err(BuildingError::FloorOutOfRange {
                    floor,
                    floor_count: self.floor_count,
                });
            }
        }
        if origin == destination {
            return Err(BuildingError::DegenerateRequest(origin));
        }

        let request = Request::new(origin, destination);
        match request.direction() {
            Direction::Up => self.up_requests.enqueue(request),
            _             => self.down_requests.enqueue(request),
        }
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the whole system one tick.  The phase order is fixed:
    /// allocation completes for every cab before any cab moves, so a batch
    /// handed out this tick is acted on this tick regardless of cab index.
    pub fn step(&mut self) {
        if self.status == SystemStatus::Running {
            self.allocate();
        }
        if self.status == SystemStatus::OutOfService {
            return;
        }

        for cab in &mut self.elevators {
            cab.step();
        }

        if self.status == SystemStatus::Stopping
            && self.elevators.iter().all(|cab| cab.current_floor().is_ground())
        {
            self.status = SystemStatus::OutOfService;
        }
    }

    /// Hand queued requests to eligible cabs, in cab index order.
    ///
    /// A cab qualifies only while in service and standing at a rendezvous
    /// floor: ground serves the up queue, top serves the down queue.  Each
    /// cab receives at most `capacity` requests per tick; drained requests
    /// are consumed even if the batch turns out empty of effect.
    fn allocate(&mut self) {
        let top = self.top_floor();
        let capacity = self.capacity;
        // Split borrows: the cab loop drains queues it does not own.
        let (elevators, up, down) =
            (&mut self.elevators, &mut self.up_requests, &mut self.down_requests);

        for cab in elevators.iter_mut() {
            if !cab.is_taking_requests() {
                continue;
            }
            let batch = if cab.current_floor().is_ground() {
                up.drain_front(capacity)
            } else if cab.current_floor() == top {
                down.drain_front(capacity)
            } else {
                continue;
            };
            if !batch.is_empty() {
                cab.process_requests(batch);
            }
        }
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Immutable snapshot of the whole system: per-cab reports, both queues
    /// in FIFO order, and the system status.
    pub fn report(&self) -> BuildingReport {
        BuildingReport {
            floor_count:    self.floor_count,
            elevator_count: self.elevators.len(),
            capacity:       self.capacity,
            elevators:      self.elevators.iter().map(Elevator::report).collect(),
            up_requests:    self.up_requests.snapshot(),
            down_requests:  self.down_requests.snapshot(),
            status:         self.status,
        }
    }

    /// `true` once every cab has been withdrawn from service.
    pub fn all_out_of_service(&self) -> bool {
        self.elevators
            .iter()
            .all(|cab| cab.service_state() != ServiceState::InService)
    }
}
