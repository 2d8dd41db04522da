//! Tic-tac-toe driver
//!
//! Runs the rules engine and the minimax search on fixed or configured
//! positions and prints what they report.

#![warn(missing_docs)]

mod cli;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::ProbeConfig;
use std::path::PathBuf;
use tictactoe::{Action, Board};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Probe {
            board,
            row,
            col,
            config,
        } => run_probe(board, row.zip(col).map(Action::from), config, cli.json),
        Command::BestMove { board } => run_best_move(board, cli.json),
        Command::SelfPlay { board } => run_self_play(board, cli.json),
    }
}

/// Apply one action and report the resulting position.
///
/// A rejected action is reported and ends the run without an error.
#[instrument]
fn run_probe(
    board: Option<Board>,
    action: Option<Action>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => ProbeConfig::from_file(path)?,
        None => ProbeConfig::default(),
    };
    let (board, action) = config.resolve(board, action)?;
    info!(board = %board, action = %action, "Probing");

    match report::probe(&board, action) {
        Ok(report) => println!("{}", report::render(&report, json)?),
        Err(err) => {
            error!(error = %err, "Action rejected");
            println!("An error occurred: {}. Exiting.", err);
        }
    }
    Ok(())
}

/// Print the search's move for the side to act.
#[instrument]
fn run_best_move(board: Board, json: bool) -> Result<()> {
    let report = report::best_move(&board);
    println!("{}", report::render(&report, json)?);
    Ok(())
}

/// Play the board out with the search on both sides.
#[instrument]
fn run_self_play(board: Board, json: bool) -> Result<()> {
    let report = report::play_out(&board)?;
    println!("{}", report::render(&report, json)?);
    Ok(())
}
