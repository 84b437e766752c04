//! Best-first search for shortest solutions.
//!
//! The engine runs A* over board states with the Manhattan heuristic:
//! - Arena of discovered nodes; parents are plain indices into it
//! - BinaryHeap frontier ordered by moves-so-far plus heuristic
//! - FxHashSet of packed board keys for state deduplication
//! - Closed-form parity test up front, so search never runs on a dead board

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::{Board, Move};
use crate::heuristic::manhattan;
use crate::solvability::is_solvable;

/// A discovered state. Written once when its board is first reached and read
/// back only during path reconstruction.
struct Node {
    /// The tile arrangement at this point of the search.
    board: Board,
    /// Moves taken from the start board to reach it.
    moves: u32,
    /// Manhattan distance of `board`, computed once at creation.
    heuristic: u32,
    /// Arena index of the node this one was expanded from.
    parent: Option<usize>,
}

/// Frontier entry: the evaluation of one arena node, cached so comparisons
/// never touch the arena or recompute a heuristic.
#[derive(PartialEq, Eq)]
struct Entry {
    /// Moves so far plus heuristic, the A* cost estimate.
    priority: u32,
    /// Heuristic alone, used to break priority ties.
    heuristic: u32,
    /// Index of the node this entry ranks.
    index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed comparison turns the max-heap into the min-heap A* needs.
        // equal estimates break toward the larger heuristic: a cost plateau
        // is worked in ascending move depth, which the push-time visited set
        // needs so that every first discovery is a cheapest-path discovery
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.heuristic.cmp(&other.heuristic))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A shortest path from a start board to the solved layout.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Every board along the way, start and goal included, each exactly one
    /// blank move after the previous.
    pub path: Vec<Board>,
    /// Nodes popped from the frontier before the goal came off it, goal
    /// included. A cost diagnostic, not part of the answer.
    pub expanded: usize,
}

impl Solution {
    /// Number of moves, one less than the number of boards on the path.
    pub fn move_count(&self) -> usize {
        self.path.len() - 1
    }

    /// The move sequence realizing the path.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }
}

/// What a solve call came back with.
#[derive(Debug)]
pub enum Outcome {
    /// The goal was reached; the path is as short as possible.
    Solved(Solution),
    /// The parity test ruled the board out before any search ran.
    Unsolvable,
    /// The expansion budget ran out before the goal came off the frontier.
    OutOfBudget {
        /// Nodes popped before giving up.
        expanded: usize,
    },
}

impl Outcome {
    /// The solution, when one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Finds a shortest move sequence from `start` to the solved layout.
///
/// Unsolvable boards are rejected by the parity test without expanding a
/// single node, and an already-solved board comes back as a one-board path.
/// `max_expansions` caps how many nodes may be popped from the frontier;
/// `None` searches without bound. Memory grows with the number of distinct
/// boards discovered, which is the dominant cost on hard instances.
pub fn solve(start: &Board, max_expansions: Option<usize>) -> Outcome {
    if !is_solvable(start) {
        return Outcome::Unsolvable;
    }
    if start.is_goal() {
        return Outcome::Solved(Solution {
            path: vec![*start],
            expanded: 0,
        });
    }

    let root = Node {
        board: *start,
        moves: 0,
        heuristic: manhattan(start),
        parent: None,
    };
    let mut frontier = BinaryHeap::new();
    frontier.push(Entry {
        priority: root.heuristic,
        heuristic: root.heuristic,
        index: 0,
    });
    let mut arena = vec![root];

    // keys go in at push time, not pop time. sound because the heuristic is
    // consistent and the frontier works equal-cost entries shallowest first;
    // together those make every first discovery of a board a cheapest-path
    // discovery, so any later rediscovery can be dropped outright
    let mut visited: FxHashSet<u64> = FxHashSet::default();
    visited.insert(start.key());

    let mut expanded = 0usize;

    while let Some(entry) = frontier.pop() {
        if let Some(limit) = max_expansions {
            if expanded >= limit {
                return Outcome::OutOfBudget { expanded };
            }
        }
        expanded += 1;

        if arena[entry.index].board.is_goal() {
            return Outcome::Solved(Solution {
                path: reconstruct(&arena, entry.index),
                expanded,
            });
        }

        let (board, moves) = (arena[entry.index].board, arena[entry.index].moves);
        for (_, neighbor) in board.neighbors() {
            // insert returns false for boards already discovered
            if visited.insert(neighbor.key()) {
                let heuristic = manhattan(&neighbor);
                let index = arena.len();
                arena.push(Node {
                    board: neighbor,
                    moves: moves + 1,
                    heuristic,
                    parent: Some(entry.index),
                });
                frontier.push(Entry {
                    priority: moves + 1 + heuristic,
                    heuristic,
                    index,
                });
            }
        }
    }

    // only reachable if the parity precondition is ever relaxed; report the
    // drained frontier as no-solution rather than panic
    Outcome::Unsolvable
}

/// Walks parent links from the goal node back to the root, then reverses the
/// chain into start-to-goal order.
fn reconstruct(arena: &[Node], goal: usize) -> Vec<Board> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        path.push(arena[index].board);
        cursor = arena[index].parent;
    }
    path.reverse();
    path
}
