use battleships::{Board, Cell, BOARD_SIZE, GRID_CELLS, SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cells_of(board: &Board, ship_id: usize) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(i, c)| (*c == Cell::Ship(ship_id)).then_some(i))
        .collect()
}

/// A run is straight when it sits in one row with consecutive columns or in
/// one column with consecutive rows.
fn is_straight_run(cells: &[usize]) -> bool {
    let size = BOARD_SIZE as usize;
    let horizontal = cells.windows(2).all(|w| w[1] == w[0] + 1)
        && cells.iter().all(|i| i / size == cells[0] / size);
    let vertical = cells.windows(2).all(|w| w[1] == w[0] + size);
    horizontal || vertical
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fleet_is_complete_and_collision_free(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::random(&mut rng);

        let mut total = 0;
        for (id, class) in SHIPS.iter().enumerate() {
            let cells = cells_of(&board, id);
            prop_assert_eq!(cells.len(), class.length() as usize);
            prop_assert!(is_straight_run(&cells), "ship {} is bent: {:?}", id, cells);
            total += cells.len();
        }
        prop_assert_eq!(total, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn one_shot_moves_exactly_one_cell(seed in any::<u64>(), index in 0..GRID_CELLS) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng);

        let untouched = |b: &Board| {
            b.cells()
                .iter()
                .filter(|c| matches!(c, Cell::Water | Cell::Ship(_)))
                .count()
        };
        let marked = |b: &Board| {
            b.cells()
                .iter()
                .filter(|c| matches!(c, Cell::Miss | Cell::Hit))
                .count()
        };

        prop_assert_eq!(untouched(&board), GRID_CELLS);
        board.shoot(index).unwrap();
        prop_assert_eq!(untouched(&board), GRID_CELLS - 1);
        prop_assert_eq!(marked(&board), 1);
    }
}
