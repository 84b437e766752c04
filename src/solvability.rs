//! Closed-form reachability test.
//!
//! Exactly half of all tile arrangements can reach the solved layout, and
//! which half a board falls in is a parity invariant of its permutation.
//! Solvability is therefore decided up front, without any search.

use crate::board::Board;
use crate::{BLANK, SIZE};

/// Counts inversions: pairs of tiles appearing in the opposite order of the
/// solved layout when the board is read row by row with the blank skipped.
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&value| value != BLANK)
        .collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &value)| tiles[i + 1..].iter().filter(|&&later| later < value).count())
        .sum()
}

/// Whether `board` can reach the solved layout at all.
///
/// With the blank's row counted from the bottom starting at 1: an even blank
/// row requires an odd inversion count, an odd blank row an even one. Every
/// legal move preserves this invariant and the goal itself satisfies it.
pub fn is_solvable(board: &Board) -> bool {
    let (blank_row, _) = board.blank_position();
    let blank_row_from_bottom = SIZE - blank_row;
    if blank_row_from_bottom % 2 == 0 {
        inversions(board) % 2 == 1
    } else {
        inversions(board) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_goal_has_no_inversions_and_is_solvable() {
        let goal = Board::goal();
        assert_eq!(inversions(&goal), 0);
        assert!(is_solvable(&goal));
    }

    #[test]
    fn test_swapping_last_two_tiles_is_unsolvable() {
        // 14 and 15 swapped, the classic impossible arrangement
        let board = Board::new([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 15, 14, 16],
        ])
        .unwrap();
        assert_eq!(inversions(&board), 1);
        assert!(!is_solvable(&board));
    }

    #[test]
    fn test_scrambled_fixture_counts() {
        let board = Board::new([
            [1, 2, 3, 4],
            [8, 14, 16, 12],
            [10, 11, 5, 13],
            [9, 6, 7, 15],
        ])
        .unwrap();
        assert_eq!(inversions(&board), 30);
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_every_move_preserves_solvability() {
        let mut rng = StdRng::seed_from_u64(11);
        for steps in [0, 1, 5, 20, 60] {
            let board = Board::scrambled(&mut rng, steps);
            assert!(is_solvable(&board));
            for (_, neighbor) in board.neighbors() {
                assert!(is_solvable(&neighbor));
            }
        }
    }

    #[test]
    fn test_transposing_two_tiles_flips_the_verdict() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..10 {
            let board = Board::scrambled(&mut rng, 40);
            let mut tiles = *board.tiles();
            // swap the first two non-blank cells
            let mut picked = Vec::new();
            for (cell, &value) in tiles.iter().enumerate() {
                if value != BLANK {
                    picked.push(cell);
                    if picked.len() == 2 {
                        break;
                    }
                }
            }
            tiles.swap(picked[0], picked[1]);
            let swapped = Board::from_tiles(&tiles).unwrap();
            assert_ne!(is_solvable(&board), is_solvable(&swapped));
        }
    }

    #[test]
    fn test_verdict_is_stable_across_calls() {
        let board = Board::goal().apply(Move::Up).unwrap();
        assert_eq!(is_solvable(&board), is_solvable(&board));
    }
}
