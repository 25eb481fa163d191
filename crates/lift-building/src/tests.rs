//! Integration tests for the building dispatcher.
//!
//! The allocation and lifecycle scenarios assert against exact canonical
//! report strings so queue order, batch bounds, and tick phasing are all
//! pinned at once.

use lift_core::{Direction, ElevatorId, Floor};

use crate::{Building, BuildingError, SystemStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The reference configuration: 10 floors, 2 cabs, capacity 5.
fn building() -> Building {
    Building::new(10, 2, 5).unwrap()
}

fn started() -> Building {
    let mut building = building();
    building.start_system().unwrap();
    building
}

fn step_n(building: &mut Building, n: usize) {
    for _ in 0..n {
        building.step();
    }
}

fn report_text(building: &Building) -> String {
    building.report().to_string()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn reference_configuration() {
        let building = building();
        assert_eq!(building.floor_count(), 10);
        assert_eq!(building.elevator_count(), 2);
        assert_eq!(building.capacity(), 5);
        assert_eq!(building.top_floor(), Floor(9));
        assert_eq!(building.status(), SystemStatus::OutOfService);
    }

    #[test]
    fn boundary_values_accepted() {
        assert!(Building::new(2, 1, 3).is_ok());
    }

    #[test]
    fn too_few_floors_rejected() {
        assert!(matches!(
            Building::new(1, 2, 5),
            Err(BuildingError::InvalidConfiguration { what: "number of floors", .. })
        ));
    }

    #[test]
    fn zero_elevators_rejected() {
        assert!(matches!(
            Building::new(3, 0, 5),
            Err(BuildingError::InvalidConfiguration { what: "number of elevators", .. })
        ));
    }

    #[test]
    fn undersized_capacity_rejected() {
        assert!(matches!(
            Building::new(3, 2, 2),
            Err(BuildingError::InvalidConfiguration { what: "elevator capacity", .. })
        ));
    }

    #[test]
    fn floor_count_beyond_index_type_rejected() {
        assert!(matches!(
            Building::new(Floor::MAX_FLOOR_COUNT + 1, 1, 3),
            Err(BuildingError::TooManyFloors { .. })
        ));
    }

    #[test]
    fn cabs_start_parked_at_ground() {
        let report = building().report();
        assert_eq!(report.elevators.len(), 2);
        for cab in &report.elevators {
            assert_eq!(cab.to_string(), "Out of Service[Floor 0]");
        }
    }
}

// ── System lifecycle ──────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn start_enters_running_with_waiting_cabs() {
        let building = started();
        assert_eq!(building.status(), SystemStatus::Running);
        assert!(report_text(&building).contains("Waiting[Floor 0, Time 5]"));
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut building = started();
        assert!(building.start_system().is_ok());
        assert_eq!(building.status(), SystemStatus::Running);
    }

    #[test]
    fn start_fails_while_stopping() {
        let mut building = started();
        building.add_request(Floor(2), Floor(3)).unwrap();
        step_n(&mut building, 2);
        building.stop_system();
        assert_eq!(building.status(), SystemStatus::Stopping);
        assert!(matches!(
            building.start_system(),
            Err(BuildingError::StartWhileStopping)
        ));
    }

    #[test]
    fn stop_is_a_no_op_unless_running() {
        let mut building = building();
        building.stop_system();
        assert_eq!(building.status(), SystemStatus::OutOfService);
    }

    #[test]
    fn stop_discards_pending_requests() {
        let mut building = started();
        building.add_request(Floor(1), Floor(4)).unwrap();
        building.add_request(Floor(6), Floor(2)).unwrap();
        building.stop_system();
        let report = building.report();
        assert!(report.up_requests.is_empty());
        assert!(report.down_requests.is_empty());
        assert_eq!(report.status, SystemStatus::Stopping);
    }

    #[test]
    fn stopping_collapses_once_cabs_reach_ground() {
        let mut building = started();
        building.add_request(Floor(1), Floor(3)).unwrap();
        // Cab 0 climbs to floor 1 and opens its door there.
        step_n(&mut building, 2);
        building.stop_system();

        // Door grace (3 ticks) plus the close tick keep cab 0 off the
        // ground; the system must not collapse early.
        step_n(&mut building, 3);
        assert_eq!(building.status(), SystemStatus::Stopping);
        building.step();
        assert_eq!(building.status(), SystemStatus::OutOfService);
        assert!(matches!(
            building.add_request(Floor(1), Floor(3)),
            Err(BuildingError::NotAccepting(SystemStatus::OutOfService))
        ));
    }

    #[test]
    fn stop_reverses_a_cab_with_an_open_door() {
        let mut building = started();
        building.add_request(Floor(1), Floor(3)).unwrap();
        step_n(&mut building, 2);
        building.stop_system();
        let text = report_text(&building);
        assert!(text.contains("Direction v"));
        assert!(text.contains("[1|v|O 3]< -- -- -- -- -- -- -- -- -- -->"));
    }
}

// ── Request intake ────────────────────────────────────────────────────────────

#[cfg(test)]
mod requests {
    use super::*;

    #[test]
    fn queues_preserve_insertion_order_by_direction() {
        let mut building = started();
        building.add_request(Floor(3), Floor(7)).unwrap();
        building.add_request(Floor(2), Floor(6)).unwrap();
        building.add_request(Floor(4), Floor(2)).unwrap();
        building.add_request(Floor(8), Floor(2)).unwrap();
        let text = report_text(&building);
        assert!(text.contains(
            "Up Requests:\n - 3->7\n - 2->6\n\nDown Requests:\n - 4->2\n - 8->2\n"
        ));
    }

    #[test]
    fn rejected_before_start() {
        let mut building = building();
        assert!(matches!(
            building.add_request(Floor(1), Floor(3)),
            Err(BuildingError::NotAccepting(SystemStatus::OutOfService))
        ));
    }

    #[test]
    fn rejected_while_stopping() {
        let mut building = started();
        building.add_request(Floor(2), Floor(3)).unwrap();
        building.step();
        building.stop_system();
        assert!(matches!(
            building.add_request(Floor(1), Floor(3)),
            Err(BuildingError::NotAccepting(SystemStatus::Stopping))
        ));
    }

    #[test]
    fn status_is_checked_before_request_validity() {
        let mut building = building();
        // Nonsense floors against a stopped system still report not-accepting.
        assert!(matches!(
            building.add_request(Floor(99), Floor(999)),
            Err(BuildingError::NotAccepting(_))
        ));
    }

    #[test]
    fn out_of_range_floors_rejected_while_running() {
        let mut building = started();
        assert!(matches!(
            building.add_request(Floor(10), Floor(2)),
            Err(BuildingError::FloorOutOfRange { floor: Floor(10), .. })
        ));
        assert!(matches!(
            building.add_request(Floor(2), Floor(10)),
            Err(BuildingError::FloorOutOfRange { floor: Floor(10), .. })
        ));
    }

    #[test]
    fn same_floor_request_rejected() {
        let mut building = started();
        assert!(matches!(
            building.add_request(Floor(4), Floor(4)),
            Err(BuildingError::DegenerateRequest(Floor(4)))
        ));
    }

    #[test]
    fn accepted_request_is_queued() {
        let mut building = started();
        building.add_request(Floor(1), Floor(3)).unwrap();
        assert!(report_text(&building).contains("Up Requests:\n - 1->3\n"));
    }
}

// ── Allocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocation {
    use super::*;

    #[test]
    fn up_batch_merges_origins_and_destinations() {
        let mut building = started();
        building.add_request(Floor(3), Floor(7)).unwrap();
        building.add_request(Floor(2), Floor(6)).unwrap();
        building.add_request(Floor(4), Floor(2)).unwrap();
        building.add_request(Floor(8), Floor(2)).unwrap();
        building.step();

        let text = report_text(&building);
        assert!(text.contains("[1|^|C  ]< -- --  2  3 -- --  6  7 -- -->"));
        // Down requests wait for a cab at the top floor.
        assert_eq!(building.report().down_requests.len(), 2);
    }

    #[test]
    fn overflow_spills_to_the_next_cab_capacity_bounded() {
        let mut building = started();
        for destination in 2..=9 {
            building.add_request(Floor(1), Floor(destination)).unwrap();
        }
        building.step();

        let text = report_text(&building);
        assert!(text.contains(
            " - Elevator ID 0: Floor 1, Door Closed, Direction ^, \
             Status: [1|^|C  ]< --  1  2  3  4  5  6 -- -- -->\n \
             - Elevator ID 1: Floor 1, Door Closed, Direction ^, \
             Status: [1|^|C  ]< --  1 -- -- -- -- --  7  8  9>\n"
        ));
        assert!(building.report().up_requests.is_empty());
    }

    #[test]
    fn no_allocation_away_from_rendezvous_floors() {
        let mut building = started();
        building.add_request(Floor(2), Floor(5)).unwrap();
        building.step(); // cab 0 takes it and leaves the ground floor
        building.add_request(Floor(3), Floor(6)).unwrap();
        building.step(); // cab 1 (still at ground) takes it
        building.add_request(Floor(4), Floor(7)).unwrap();
        building.step(); // both cabs mid-shaft — nobody may take it

        assert_eq!(building.report().up_requests.len(), 1);
    }

    #[test]
    fn waiting_cab_state_matches_one_step() {
        let mut building = started();
        building.add_request(Floor(1), Floor(3)).unwrap();
        assert!(report_text(&building).contains("Waiting[Floor 0, Time 5]"));

        building.step();
        let text = report_text(&building);
        assert!(text.contains("[1|^|C  ]< --  1 --  3 -- -- -- -- -- -->"));
        assert!(text.contains("Waiting[Floor 0, Time 4]"));
    }

    #[test]
    fn down_batch_allocated_at_the_top_floor() {
        // Single cab, 4 floors: drive it to the top with an up request, then
        // serve a down request from there.
        let mut building = Building::new(4, 1, 3).unwrap();
        building.start_system().unwrap();
        building.add_request(Floor(0), Floor(3)).unwrap();
        step_n(&mut building, 11); // board at 0, climb, discharge at the top
        assert!(report_text(&building).contains("Waiting[Floor 3, Time 5]"));

        building.add_request(Floor(3), Floor(1)).unwrap();
        building.step();
        let cab = &building.report().elevators[0];
        assert_eq!(cab.direction, Direction::Down);
        assert!(cab.door.is_open());
        assert_eq!(cab.occupants, 1);
        assert!(building.report().down_requests.is_empty());

        step_n(&mut building, 5); // door cycle, descend to 1
        let cab = &building.report().elevators[0];
        assert_eq!(cab.floor, Floor(1));
        building.step(); // discharge
        assert_eq!(building.report().elevators[0].occupants, 0);
    }
}

// ── Out-of-service operations ─────────────────────────────────────────────────

#[cfg(test)]
mod out_of_service {
    use super::*;

    #[test]
    fn single_cab_withdrawal_parks_it_at_ground() {
        let mut building = started();
        building.take_elevator_out_of_service(ElevatorId(0));
        building.step();

        let report = building.report();
        assert!(report.elevators[0].is_out_of_service());
        assert!(report_text(&building).contains(
            "Floor 0, Door Open, Direction -, Status: Out of Service[Floor 0]"
        ));
        // The rest of the system keeps running.
        assert_eq!(building.status(), SystemStatus::Running);
        assert!(report_text(&building).contains("Waiting[Floor 0, Time 4]"));
    }

    #[test]
    fn mid_ascent_withdrawal_reverses_without_finishing_stops() {
        let mut building = started();
        building.add_request(Floor(4), Floor(7)).unwrap();
        step_n(&mut building, 2);
        building.take_elevator_out_of_service(ElevatorId(0));
        building.step();

        let report = building.report();
        assert!(report.elevators[0].is_out_of_service());
        assert!(!report.elevators[0].has_stops());
        assert!(report_text(&building).contains(
            "Floor 1, Door Closed, Direction v, \
             Status: [1|v|C  ]< -- -- -- -- -- -- -- -- -- -->"
        ));
    }

    #[test]
    fn unknown_cab_id_is_ignored() {
        let mut building = started();
        building.take_elevator_out_of_service(ElevatorId(99));
        assert_eq!(building.status(), SystemStatus::Running);
        assert!(report_text(&building).contains("Waiting[Floor 0, Time 5]"));
    }

    #[test]
    fn withdraw_all_freezes_the_system_in_place() {
        let mut building = started();
        building.add_request(Floor(1), Floor(5)).unwrap();
        building.step(); // cab 0 is now at floor 1
        building.take_all_out_of_service();

        assert_eq!(building.status(), SystemStatus::OutOfService);
        assert!(building.all_out_of_service());

        // Frozen: stepping moves nothing, not even the returning cab.
        let before = report_text(&building);
        step_n(&mut building, 3);
        assert_eq!(report_text(&building), before);
        assert_eq!(building.report().elevators[0].floor, Floor(1));
    }

    #[test]
    fn restart_after_withdraw_all_readmits_cabs_in_place() {
        let mut building = started();
        building.add_request(Floor(1), Floor(5)).unwrap();
        building.step();
        building.take_all_out_of_service();

        building.start_system().unwrap();
        assert_eq!(building.status(), SystemStatus::Running);
        let text = report_text(&building);
        assert!(text.contains("Waiting[Floor 1, Time 5]"));
        assert!(text.contains("Waiting[Floor 0, Time 5]"));
    }
}

// ── Frozen system ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod frozen {
    use super::*;

    #[test]
    fn stepping_a_never_started_building_changes_nothing() {
        let mut building = building();
        let before = report_text(&building);
        step_n(&mut building, 5);
        assert_eq!(report_text(&building), before);
    }

    #[test]
    fn full_report_layout() {
        let mut building = started();
        building.add_request(Floor(3), Floor(7)).unwrap();
        building.add_request(Floor(8), Floor(2)).unwrap();
        let text = report_text(&building);
        assert!(text.starts_with(
            "Building Report:\n\
             Number of Floors: 10\n\
             Number of Elevators: 2\n\
             Elevator Capacity: 5\n\
             System Status: Running\n\
             \n\
             Elevator Status:\n"
        ));
        assert!(text.ends_with(
            "Up Requests:\n - 3->7\n\nDown Requests:\n - 8->2\n"
        ));
    }
}
