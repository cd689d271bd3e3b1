use crate::cell::Cell;
use crate::grid::Grid;

/// Neighbor counts that bring a dead cell to life, one bit per count.
///
/// ```notrust
/// 876543210
/// 000001000   (b3)
/// ```
const BIRTHS: u16 = 0b0_0000_1000;

/// Neighbor counts that keep a live cell alive, one bit per count.
///
/// ```notrust
/// 876543210
/// 000001100   (s23)
/// ```
const SURVIVALS: u16 = 0b0_0000_1100;

/// Relative positions of the 8 neighbors of a cell, as `(d_row, d_col)`.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live cells around `(row, col)`.
///
/// Neighbors that would fall off the edge of the grid are skipped, the grid does not wrap. The
/// result is in `0..=8`.
///
/// Panics if `(row, col)` is not on the grid.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    assert!(
        grid.contains(row, col),
        "({row}, {col}) is outside of a {}x{} grid",
        grid.width(),
        grid.height()
    );

    let mut n = 0;

    for (d_row, d_col) in OFFSETS {
        let (Some(r), Some(c)) = (
            row.checked_add_signed(d_row),
            col.checked_add_signed(d_col),
        ) else {
            continue;
        };

        if let Some(cell) = grid.get(r, c) {
            n += u8::from(cell);
        }
    }

    n
}

/// What becomes of `cell` when it has `neighbors` live neighbors.
pub const fn fate(cell: Cell, neighbors: u8) -> Cell {
    let rule = match cell {
        Cell::Dead => BIRTHS,
        Cell::Alive => SURVIVALS,
    };

    if neighbors <= 8 && rule & (1 << neighbors) != 0 {
        Cell::Alive
    } else {
        Cell::Dead
    }
}

/// Compute the generation following `grid`.
///
/// Every cell of the result only depends on `grid`, which is left untouched.
pub fn next_generation(grid: &Grid) -> Grid {
    let next = Grid::from_fn(grid.width(), grid.height(), |row, col| {
        fate(grid[(row, col)], count_live_neighbors(grid, row, col))
    });

    // `grid` already has valid dimensions, so does `next`
    match next {
        Ok(next) => next,
        Err(e) => unreachable!("{e}"),
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::count_live_neighbors;
    use super::fate;
    use super::next_generation;
    use crate::cell::Cell;
    use crate::grid::Grid;

    #[test]
    fn fate_table() {
        for n in 0..=8 {
            let survives = n == 2 || n == 3;
            let born = n == 3;

            assert_eq!(fate(Cell::Alive, n), Cell::from(survives), "alive, n = {n}");
            assert_eq!(fate(Cell::Dead, n), Cell::from(born), "dead, n = {n}");
        }
    }

    #[test]
    fn count_center() {
        let grid = Grid::from_rows(&[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]).unwrap();

        assert_eq!(count_live_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 1), 5);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 3);
    }

    #[test]
    fn count_ignores_self() {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();

        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn count_single_cell() {
        let grid = Grid::from_rows(&[[1u8]]).unwrap();

        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    #[should_panic]
    fn count_out_of_bounds() {
        let grid = Grid::dead(3, 3).unwrap();
        count_live_neighbors(&grid, 3, 0);
    }

    #[test]
    fn single_cell_grid_dies() {
        let grid = Grid::from_rows(&[[1u8]]).unwrap();

        assert_eq!(next_generation(&grid), Grid::dead(1, 1).unwrap());
    }

    #[test]
    fn isolated_cell_dies() {
        let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();

        assert_eq!(next_generation(&grid), Grid::dead(3, 3).unwrap());
    }

    #[test]
    fn overpopulation() {
        let grid = Grid::from_rows(&[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]).unwrap();
        let want = Grid::from_rows(&[[1u8, 0, 1], [0, 0, 0], [1, 0, 1]]).unwrap();

        assert_eq!(next_generation(&grid), want);
    }

    #[test]
    fn birth_in_corner() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 1]]).unwrap();
        let want = Grid::from_rows(&[[1u8, 1], [1, 1]]).unwrap();

        assert_eq!(next_generation(&grid), want);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::collection::vec(0u8..=1, w), h)
                .prop_map(|rows| Grid::from_rows(&rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn dead_stays_dead(width in 1usize..30, height in 1usize..30) {
            let grid = Grid::dead(width, height).unwrap();

            prop_assert_eq!(next_generation(&grid), grid);
        }

        #[test]
        fn keeps_dimensions(grid in arb_grid()) {
            let next = next_generation(&grid);

            prop_assert_eq!(next.width(), grid.width());
            prop_assert_eq!(next.height(), grid.height());
        }

        #[test]
        fn corner_sees_three_cells(grid in arb_grid()) {
            let n = count_live_neighbors(&grid, 0, 0);

            let expected = [(0, 1), (1, 0), (1, 1)]
                .into_iter()
                .filter_map(|(r, c)| grid.get(r, c))
                .map(u8::from)
                .sum::<u8>();

            prop_assert!(n <= 3);
            prop_assert_eq!(n, expected);
        }

        #[test]
        fn counts_in_range(grid in arb_grid()) {
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    prop_assert!(count_live_neighbors(&grid, row, col) <= 8);
                }
            }
        }
    }
}
