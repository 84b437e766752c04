//! 15-Puzzle Solver
//!
//! Console front end for the sliding puzzle library: solves boards given on
//! the command line, reports solvability verdicts, generates scrambles, and
//! runs a small demonstration set. All puzzle logic lives in the library.

use clap::{Parser, Subcommand};

use fifteen::{inversions, is_solvable, solve, Board, Outcome, Solution};

/// The scrambled demonstration board, around twenty moves from solved.
const SCRAMBLED: [[u8; 4]; 4] = [
    [1, 2, 3, 4],
    [8, 14, 16, 12],
    [10, 11, 5, 13],
    [9, 6, 7, 15],
];

/// One blank move from solved.
const ONE_AWAY: [[u8; 4]; 4] = [
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [9, 10, 11, 12],
    [13, 14, 16, 15],
];

/// Tiles 14 and 15 swapped: the textbook unreachable arrangement.
const IMPOSSIBLE: [[u8; 4]; 4] = [
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [9, 10, 11, 12],
    [13, 15, 14, 16],
];

/// Finds shortest solutions for the 15-puzzle.
#[derive(Parser)]
#[command(name = "fifteen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the built-in demonstration boards.
    Demo,
    /// Solve a board given as 16 tile values in reading order, 16 for the blank.
    Solve {
        #[arg(num_args = 16, value_name = "TILE")]
        tiles: Vec<u8>,
        /// Give up after this many node expansions.
        #[arg(long, value_name = "N")]
        max_expansions: Option<usize>,
    },
    /// Report the inversion count and solvability verdict for a board.
    Check {
        #[arg(num_args = 16, value_name = "TILE")]
        tiles: Vec<u8>,
    },
    /// Generate a random solvable board by walking away from the goal.
    Scramble {
        /// Number of random blank moves to take.
        #[arg(long, default_value_t = 30)]
        steps: usize,
        /// Also solve the generated board.
        #[arg(long)]
        solve: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        // default: run the demonstration set
        Some(Command::Demo) | None => run_demo(),
        Some(Command::Solve {
            tiles,
            max_expansions,
        }) => run_solve(&tiles, max_expansions),
        Some(Command::Check { tiles }) => run_check(&tiles),
        Some(Command::Scramble { steps, solve }) => run_scramble(steps, solve),
    }
}

/// Solves each demonstration board in turn, narrating the verdicts.
fn run_demo() {
    demo_board("A scrambled board", SCRAMBLED);
    demo_board("One move from solved", ONE_AWAY);
    demo_board("Tiles 14 and 15 swapped", IMPOSSIBLE);
}

/// Prints one demonstration board, its solvability verdict, and its solution.
fn demo_board(title: &str, grid: [[u8; 4]; 4]) {
    let board = match Board::new(grid) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid demonstration board: {}", e);
            return;
        }
    };
    println!("=== {} ===", title);
    println!("{}", board);
    println!("Inversions: {}", inversions(&board));
    if !is_solvable(&board) {
        println!("No solution exists for this arrangement.");
        println!();
        return;
    }
    println!("Solvable; searching...");
    report_outcome(solve(&board, None));
    println!();
}

/// Solves a user-supplied board and prints the full path.
fn run_solve(tiles: &[u8], max_expansions: Option<usize>) {
    let board = parse_board_or_exit(tiles);
    println!("{}", board);
    report_outcome(solve(&board, max_expansions));
}

/// Prints the inversion count and solvability verdict for a board.
fn run_check(tiles: &[u8]) {
    let board = parse_board_or_exit(tiles);
    println!("{}", board);
    println!("Inversions: {}", inversions(&board));
    if is_solvable(&board) {
        println!("Solvable.");
    } else {
        println!("Not solvable.");
    }
}

/// Generates a random solvable board and optionally solves it.
fn run_scramble(steps: usize, also_solve: bool) {
    let board = Board::scrambled(&mut rand::thread_rng(), steps);
    println!("{}", board);
    if also_solve {
        report_outcome(solve(&board, None));
    }
}

/// Builds a board from command-line tiles, exiting with a message on bad input.
fn parse_board_or_exit(tiles: &[u8]) -> Board {
    match Board::from_tiles(tiles) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid board: {}", e);
            std::process::exit(1);
        }
    }
}

/// Prints whatever the solver came back with.
fn report_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Solved(solution) => print_solution(&solution),
        Outcome::Unsolvable => println!("No solution exists for this arrangement."),
        Outcome::OutOfBudget { expanded } => {
            println!("Gave up after expanding {} nodes.", expanded)
        }
    }
}

/// Prints every board along the path with the move that produced it.
fn print_solution(solution: &Solution) {
    println!(
        "Solved in {} moves, {} nodes expanded.",
        solution.move_count(),
        solution.expanded
    );
    let moves = solution.moves();
    for (step, board) in solution.path.iter().enumerate() {
        if step == 0 {
            println!("Start:");
        } else {
            println!("Step {} (blank moves {}):", step, moves[step - 1]);
        }
        println!("{}", board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_boards_are_valid() {
        assert!(Board::new(SCRAMBLED).is_ok());
        assert!(Board::new(ONE_AWAY).is_ok());
        assert!(Board::new(IMPOSSIBLE).is_ok());
    }

    #[test]
    fn test_demo_verdicts() {
        assert!(is_solvable(&Board::new(SCRAMBLED).unwrap()));
        assert!(is_solvable(&Board::new(ONE_AWAY).unwrap()));
        assert!(!is_solvable(&Board::new(IMPOSSIBLE).unwrap()));
    }

    #[test]
    fn test_goal_render_snapshot() {
        insta::assert_snapshot!(Board::goal().to_string(), @r"
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │ 15 │    │
        └────┴────┴────┴────┘
        ");
    }

    #[test]
    fn test_one_move_solution_snapshot() {
        let board = Board::new(ONE_AWAY).unwrap();
        let solution = match solve(&board, None) {
            Outcome::Solved(solution) => solution,
            other => panic!("expected a solution, got {:?}", other),
        };

        let mut output = format!("moves: {}\n", solution.move_count());
        for (board, mv) in solution.path.iter().zip(
            std::iter::once(None).chain(solution.moves().into_iter().map(Some)),
        ) {
            match mv {
                None => output.push_str("start\n"),
                Some(mv) => output.push_str(&format!("blank moves {}\n", mv)),
            }
            output.push_str(&board.to_string());
            output.push('\n');
        }

        insta::assert_snapshot!(output, @r"
        moves: 1
        start
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │    │ 15 │
        └────┴────┴────┴────┘
        blank moves right
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │ 15 │    │
        └────┴────┴────┴────┘
        ");
    }
}
