//! Manhattan-distance lower bound on the moves left to solve.

use crate::board::{cell_coords, Board};
use crate::BLANK;

/// Sums, over every non-blank tile, the row plus column distance between the
/// tile's cell and its home cell in the solved layout.
///
/// The estimate never exceeds the true remaining move count, and a single
/// move changes it by exactly one, which is what lets the solver trust the
/// first path it completes.
pub fn manhattan(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(cell, &value)| {
            let (row, col) = cell_coords(cell);
            let (home_row, home_col) = cell_coords(value as usize - 1);
            let dr = (row as i32 - home_row as i32).unsigned_abs();
            let dc = (col as i32 - home_col as i32).unsigned_abs();
            dr + dc
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_exactly_on_goal() {
        assert_eq!(manhattan(&Board::goal()), 0);
        for (_, neighbor) in Board::goal().neighbors() {
            assert_ne!(manhattan(&neighbor), 0);
        }
    }

    #[test]
    fn test_one_for_a_single_displaced_tile() {
        let board = Board::new([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 16, 15],
        ])
        .unwrap();
        assert_eq!(manhattan(&board), 1);
    }

    #[test]
    fn test_scrambled_fixture_distance() {
        let board = Board::new([
            [1, 2, 3, 4],
            [8, 14, 16, 12],
            [10, 11, 5, 13],
            [9, 6, 7, 15],
        ])
        .unwrap();
        assert_eq!(manhattan(&board), 21);
    }

    #[test]
    fn test_estimate_is_stable_across_calls() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = Board::scrambled(&mut rng, 25);
        assert_eq!(manhattan(&board), manhattan(&board));
    }

    #[test]
    fn test_each_move_shifts_the_estimate_by_one() {
        // only the moved tile changes cells, so its distance moves by 1
        let mut rng = StdRng::seed_from_u64(5);
        for steps in [0, 3, 10, 40] {
            let board = Board::scrambled(&mut rng, steps);
            let here = manhattan(&board);
            for (_, neighbor) in board.neighbors() {
                let there = manhattan(&neighbor);
                assert_eq!(here.abs_diff(there), 1);
            }
        }
    }
}
