use std::time::Duration;

use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const GRID_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Aircraft Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Fleet rerolls each player starts with.
pub const STARTING_REROLLS: u8 = 3;

/// A round left idle longer than this is reported as timed out.
pub const ROUND_TIMEOUT: Duration = Duration::from_secs(60);

/// Hard cap on placement retries for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
