//! 15-Puzzle Solver Library
//!
//! Finds shortest solutions for the classic sliding puzzle: a 4x4 grid of
//! tiles 1..=15 plus a blank, solved by sliding tiles into the blank until
//! every tile sits in reading order. Reachability is decided up front with a
//! closed-form parity test; shortest paths come from A* under the Manhattan
//! heuristic, so a returned path is always optimal.
//!
//! ```
//! use fifteen::{solve, Board, Outcome};
//!
//! # fn main() -> Result<(), fifteen::BoardError> {
//! let board = Board::new([
//!     [1, 2, 3, 4],
//!     [5, 6, 7, 8],
//!     [9, 10, 11, 12],
//!     [13, 14, 16, 15],
//! ])?;
//!
//! match solve(&board, None) {
//!     Outcome::Solved(solution) => assert_eq!(solution.move_count(), 1),
//!     _ => unreachable!("one move from solved"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod heuristic;
pub mod solvability;
pub mod solver;

pub use board::{Board, BoardError, Move};
pub use heuristic::manhattan;
pub use solvability::{inversions, is_solvable};
pub use solver::{solve, Outcome, Solution};

/// Width and height of the board in cells.
pub const SIZE: usize = 4;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// The tile value standing in for the blank cell.
pub const BLANK: u8 = 16;
