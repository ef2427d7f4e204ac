//! Board grid, shot resolution and the randomized fleet builder.

use rand::Rng;

use crate::common::{MatchError, ShotResult};
use crate::config::{BOARD_SIZE, GRID_CELLS, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::ship::Ship;

/// One cell of the grid, row-major indexed (row = index / 10, column =
/// index % 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched open water.
    Water,
    /// Untouched segment of the ship at this index in the board's fleet.
    Ship(usize),
    /// Water that has been shot.
    Miss,
    /// Ship segment that has been shot.
    Hit,
}

/// A single player's ocean: 100 cells plus the five ships placed on them.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; GRID_CELLS],
    ships: [Ship; NUM_SHIPS],
}

impl Board {
    /// Build a board with the full fleet placed at random.
    ///
    /// Each ship grows cell by cell from a random core toward whichever end
    /// of the run can still legally extend. A placement that collided with an
    /// earlier ship shows up as a cell count short of the cumulative fleet
    /// size and is retried from a fresh core; earlier ships are never moved.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [Cell::Water; GRID_CELLS];
        let mut expected = 0;

        for (ship_id, class) in SHIPS.iter().enumerate() {
            expected += class.length() as usize;
            let mut placed = false;

            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let scratch = place_attempt(&cells, rng, ship_id, class.length());
                if count_ship_cells(&scratch) == expected {
                    cells = scratch;
                    placed = true;
                    break;
                }
            }

            // Unreachable for the fixed grid and fleet sizes; a bounded
            // retry keeps a broken invariant from looping forever.
            assert!(
                placed,
                "no collision-free placement for {} after {} attempts",
                class.name(),
                MAX_PLACEMENT_ATTEMPTS
            );
        }

        Board {
            cells,
            ships: std::array::from_fn(|i| Ship::new(SHIPS[i])),
        }
    }

    /// Resolve a shot at `index`.
    ///
    /// A cell transitions `Water -> Miss` or `Ship -> Hit` exactly once; a
    /// cell that was already shot is rejected, so repeat shots can never
    /// deplete a ship twice for the same segment.
    pub fn shoot(&mut self, index: usize) -> Result<ShotResult, MatchError> {
        if index >= GRID_CELLS {
            return Err(MatchError::OutOfBounds(index));
        }
        match self.cells[index] {
            Cell::Water => {
                self.cells[index] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Ship(ship_id) => {
                self.cells[index] = Cell::Hit;
                let ship = &mut self.ships[ship_id];
                if ship.hit() {
                    Ok(ShotResult::Sunk(ship.name()))
                } else {
                    Ok(ShotResult::Hit(ship.name()))
                }
            }
            Cell::Miss | Cell::Hit => Err(MatchError::AlreadyTargeted),
        }
    }

    /// Raw grid contents, row-major.
    pub fn cells(&self) -> &[Cell; GRID_CELLS] {
        &self.cells
    }

    /// The five ships this board owns, indexed by the ids in [`Cell::Ship`].
    pub fn ships(&self) -> &[Ship; NUM_SHIPS] {
        &self.ships
    }
}

/// One placement attempt: copy the working grid, drop a core cell and grow
/// the run to full length. The caller validates the result by counting ship
/// cells, so collisions with earlier ships are simply overwritten here.
fn place_attempt<R: Rng>(
    cells: &[Cell; GRID_CELLS],
    rng: &mut R,
    ship_id: usize,
    length: u8,
) -> [Cell; GRID_CELLS] {
    let size = BOARD_SIZE as usize;
    let mut scratch = *cells;

    let core = rng.random_range(0..GRID_CELLS);
    scratch[core] = Cell::Ship(ship_id);

    let horizontal = rng.random_bool(0.5);
    let step = if horizontal { 1 } else { size };

    // Live ends of the run placed so far.
    let mut low = core;
    let mut high = core;

    for _ in 1..length {
        let low_open = if horizontal {
            low % size != 0
        } else {
            low >= size
        };
        let high_open = if horizontal {
            (high + 1) % size != 0
        } else {
            high < GRID_CELLS - size
        };

        let grow_low = match (low_open, high_open) {
            (true, true) => rng.random_bool(0.5),
            (true, false) => true,
            (false, true) => false,
            (false, false) => {
                unreachable!("a run of {} cells cannot span a {}-cell lane", length, size)
            }
        };

        if grow_low {
            low -= step;
            scratch[low] = Cell::Ship(ship_id);
        } else {
            high += step;
            scratch[high] = Cell::Ship(ship_id);
        }
    }

    scratch
}

fn count_ship_cells(cells: &[Cell; GRID_CELLS]) -> usize {
    cells.iter().filter(|c| matches!(c, Cell::Ship(_))).count()
}
