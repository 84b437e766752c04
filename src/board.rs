//! Board representation and move generation.
//!
//! A board is a 4x4 grid holding a permutation of the values 1..=16, where 16
//! stands for the blank cell. Boards are small `Copy` values and are never
//! mutated in place: applying a move yields a fresh board.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::{BLANK, CELLS, SIZE};

/// Converts (row, col) coordinates to a flat row-major cell index.
#[inline(always)]
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * SIZE + col
}

/// Converts a flat row-major cell index back to (row, col) coordinates.
#[inline(always)]
pub const fn cell_coords(cell: usize) -> (usize, usize) {
    (cell / SIZE, cell % SIZE)
}

/// A single move, named for the direction the blank cell travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in the order the solver tries them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset the blank travels by.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

/// Reasons a tile arrangement is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The input does not have exactly one value per cell.
    #[error("expected 16 tiles, found {found}")]
    WrongCount { found: usize },
    /// A value falls outside 1..=16.
    #[error("tile value {value} is outside 1..=16")]
    OutOfRange { value: u8 },
    /// A value occurs twice, so some other value is missing.
    #[error("tile value {value} appears more than once")]
    Duplicate { value: u8 },
    /// A textual token could not be read as a tile value.
    #[error("cannot read {token:?} as a tile value")]
    BadTile { token: String },
}

/// A 4x4 arrangement of the tiles 1..=16, with 16 standing for the blank.
///
/// Every constructor validates that the values form a permutation, so a
/// `Board` in hand always has exactly one blank. The blank's flat index is
/// cached alongside the tiles to keep move generation free of scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    /// Flat index of the blank cell within `tiles`.
    blank: u8,
}

impl Board {
    /// The solved arrangement: 1..=15 in reading order, blank in the corner.
    pub const fn goal() -> Self {
        let mut tiles = [0u8; CELLS];
        let mut cell = 0;
        while cell < CELLS {
            tiles[cell] = cell as u8 + 1;
            cell += 1;
        }
        Self {
            tiles,
            blank: (CELLS - 1) as u8,
        }
    }

    /// Builds a board from a row-major grid of tile values.
    pub fn new(grid: [[u8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut tiles = [0u8; CELLS];
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                tiles[cell_index(row, col)] = value;
            }
        }
        Self::from_tiles(&tiles)
    }

    /// Builds a board from exactly 16 row-major tile values, checking that
    /// they form a permutation of 1..=16.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, BoardError> {
        if tiles.len() != CELLS {
            return Err(BoardError::WrongCount { found: tiles.len() });
        }
        let mut seen = [false; CELLS];
        let mut grid = [0u8; CELLS];
        let mut blank = 0u8;
        for (cell, &value) in tiles.iter().enumerate() {
            if !(1..=BLANK).contains(&value) {
                return Err(BoardError::OutOfRange { value });
            }
            if seen[value as usize - 1] {
                return Err(BoardError::Duplicate { value });
            }
            seen[value as usize - 1] = true;
            grid[cell] = value;
            if value == BLANK {
                blank = cell as u8;
            }
        }
        // 16 distinct in-range values: the blank was seen exactly once
        Ok(Self { tiles: grid, blank })
    }

    /// Tile value at (row, col).
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[cell_index(row, col)]
    }

    /// Flat row-major view of all 16 tile values.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// (row, col) of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        cell_coords(self.blank as usize)
    }

    /// Whether this board is already the solved arrangement.
    pub fn is_goal(&self) -> bool {
        *self == Self::goal()
    }

    /// Applies a move, yielding the new board, or `None` when the blank
    /// would leave the grid.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.offset();
        let row = row as isize + dr;
        let col = col as isize + dc;
        if row < 0 || row >= SIZE as isize || col < 0 || col >= SIZE as isize {
            return None;
        }
        let target = cell_index(row as usize, col as usize);
        let mut tiles = self.tiles;
        tiles.swap(self.blank as usize, target);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    /// Boards one legal move away, paired with the move that reaches them.
    /// Yields between two and four entries depending on the blank's cell.
    pub fn neighbors(&self) -> impl Iterator<Item = (Move, Board)> {
        let board = *self;
        Move::ALL
            .into_iter()
            .filter_map(move |mv| board.apply(mv).map(|next| (mv, next)))
    }

    /// The move turning `self` into `next`, when the two boards are exactly
    /// one blank step apart.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL.into_iter().find(|&mv| self.apply(mv) == Some(*next))
    }

    /// Packs the grid into a collision-free 64-bit fingerprint, four bits per
    /// cell in reading order. Distinct boards always get distinct keys.
    pub fn key(&self) -> u64 {
        self.tiles
            .iter()
            .fold(0u64, |key, &value| (key << 4) | u64::from(value - 1))
    }

    /// A random board reached by `steps` blank moves from the goal, never
    /// stepping straight back. The result is always solvable and at most
    /// `steps` moves from solved.
    pub fn scrambled<R: Rng>(rng: &mut R, steps: usize) -> Board {
        let mut board = Self::goal();
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let choices: Vec<(Move, Board)> = board
                .neighbors()
                .filter(|&(mv, _)| last != Some(mv.opposite()))
                .collect();
            // every cell has at least two exits, so one survives the filter
            if let Some(&(mv, next)) = choices.choose(rng) {
                board = next;
                last = Some(mv);
            }
        }
        board
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses 16 whitespace- or comma-separated tile values in reading order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = Vec::with_capacity(CELLS);
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let value = token.parse::<u8>().map_err(|_| BoardError::BadTile {
                token: token.to_string(),
            })?;
            tiles.push(value);
        }
        Self::from_tiles(&tiles)
    }
}

impl fmt::Display for Board {
    /// Renders the grid with box-drawing borders, leaving the blank empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌────┬────┬────┬────┐")?;
        for row in 0..SIZE {
            write!(f, "│")?;
            for col in 0..SIZE {
                let value = self.tile(row, col);
                if value == BLANK {
                    write!(f, "    │")?;
                } else {
                    write!(f, " {:>2} │", value)?;
                }
            }
            writeln!(f)?;
            if row < SIZE - 1 {
                writeln!(f, "├────┼────┼────┼────┤")?;
            }
        }
        write!(f, "└────┴────┴────┴────┘")
    }
}
