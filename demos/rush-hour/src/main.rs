//! rush-hour — scripted console scenario for the liftsim elevator bank.
//!
//! Simulates a morning rush in a 10-floor office building: lobby-heavy up
//! traffic with a trickle of top-floor departures, one cab withdrawn for
//! maintenance mid-run, then a graceful system stop.  Prints the canonical
//! building report at intervals so the whole external contract is visible.

use anyhow::Result;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_building::{Building, SystemStatus};
use lift_core::{ElevatorId, Floor};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOORS:          u16   = 10;
const ELEVATORS:       usize = 2;
const CAPACITY:        usize = 5;
const SEED:            u64   = 42;
const RUSH_TICKS:      u64   = 60;
const REPORT_INTERVAL: u64   = 10;
const MAINTENANCE_AT:  u64   = 30; // tick at which cab 1 is withdrawn
const ARRIVAL_CHANCE:  f64   = 0.6; // probability of a new request per tick

// ── Traffic generation ────────────────────────────────────────────────────────

/// One pseudo-random request: usually lobby → upper floor, occasionally
/// top floor → lower floor (possible only once a cab has been drawn to the
/// top by earlier up traffic).
fn next_request(rng: &mut SmallRng) -> (Floor, Floor) {
    if rng.gen_bool(0.8) {
        (Floor(0), Floor(rng.gen_range(1..FLOORS)))
    } else {
        (Floor(FLOORS - 1), Floor(rng.gen_range(0..FLOORS - 1)))
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== rush-hour — liftsim elevator bank ===");
    println!("Floors: {FLOORS}  |  Elevators: {ELEVATORS}  |  Capacity: {CAPACITY}  |  Seed: {SEED}");
    println!();

    // 1. Build and start the system.
    let mut building = Building::new(FLOORS as usize, ELEVATORS, CAPACITY)?;
    building.start_system()?;

    // 2. Run the rush with seeded traffic.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut submitted = 0usize;

    for tick in 0..RUSH_TICKS {
        if rng.gen_bool(ARRIVAL_CHANCE) {
            let (origin, destination) = next_request(&mut rng);
            building.add_request(origin, destination)?;
            submitted += 1;
        }

        if tick == MAINTENANCE_AT {
            println!("[tick {tick}] withdrawing cab 1 for maintenance");
            building.take_elevator_out_of_service(ElevatorId(1));
        }

        building.step();

        if tick % REPORT_INTERVAL == 0 {
            println!("[tick {tick}]");
            println!("{}", building.report());
        }
    }

    // 3. Graceful stop: discard pending requests, wait for cabs to park.
    println!("[tick {RUSH_TICKS}] stopping the system");
    building.stop_system();
    let mut wind_down = 0u64;
    while building.status() != SystemStatus::OutOfService {
        building.step();
        wind_down += 1;
    }

    // 4. Summary.
    println!();
    println!("Rush complete: {submitted} requests over {RUSH_TICKS} ticks");
    println!("Wind-down took {wind_down} ticks");
    println!();
    println!("{:<6} {:<7} {:<16}", "Cab", "Floor", "State");
    println!("{}", "-".repeat(30));
    for cab in &building.report().elevators {
        println!("{:<6} {:<7} {:<16}", cab.id.0, cab.floor.0, cab.service.as_str());
    }

    Ok(())
}
