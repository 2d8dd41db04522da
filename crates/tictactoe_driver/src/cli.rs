//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Board;

/// Tic-tac-toe rules engine and minimax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Exercise the tic-tac-toe rules engine on fixed positions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `probe`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
///
/// Boards use the `XOX/XOX/O.O` format: three rows separated by `/`,
/// with `.` (or `_`, `-`) for an empty cell.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply one action to a board and report winner, terminal and utility
    Probe {
        /// Board to start from (overrides the config file)
        #[arg(long)]
        board: Option<Board>,

        /// Row of the action (overrides the config file)
        #[arg(long, requires = "col")]
        row: Option<usize>,

        /// Column of the action (overrides the config file)
        #[arg(long, requires = "row")]
        col: Option<usize>,

        /// TOML file with `board` and `action` keys
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the minimax move for the side to act
    BestMove {
        /// Board to search
        #[arg(long, default_value = ".../.../...")]
        board: Board,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Board to start from
        #[arg(long, default_value = ".../.../...")]
        board: Board,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Probe {
            board: None,
            row: None,
            col: None,
            config: None,
        }
    }
}
