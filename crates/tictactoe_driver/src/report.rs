//! Reports printed by the driver commands.

use serde::Serialize;
use std::fmt;
use tictactoe::{
    Action, Board, InvalidAction, Outcome, Player, Playout, SearchStats, minimax_with_stats,
    player, result, self_play, terminal, utility, winner,
};
use tracing::instrument;

/// Outcome of applying one action to a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Board before the action.
    pub board: String,
    /// The applied action.
    pub action: Action,
    /// Board after the action.
    pub result: String,
    /// Winner on the resulting board.
    pub winner: Option<Player>,
    /// Whether the resulting board is terminal.
    pub terminal: bool,
    /// Utility of the resulting board.
    pub utility: i8,
    #[serde(skip)]
    pretty: String,
}

/// Applies `action` to `board` and evaluates the resulting position.
#[instrument(skip(board), fields(board = %board))]
pub fn probe(board: &Board, action: Action) -> Result<ProbeReport, InvalidAction> {
    let res = result(board, action)?;
    Ok(ProbeReport {
        board: board.to_string(),
        action,
        result: res.to_string(),
        winner: winner(&res),
        terminal: terminal(&res),
        utility: utility(&res),
        pretty: res.pretty(),
    })
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pretty)?;
        writeln!(f, "winner: {}", display_player(self.winner))?;
        writeln!(f, "terminal: {}", self.terminal)?;
        write!(f, "utility: {}", self.utility)
    }
}

/// The search's choice for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Board searched.
    pub board: String,
    /// Side to move, if the game is not over.
    pub player: Option<Player>,
    /// Chosen action, if the game is not over.
    pub action: Option<Action>,
    /// How the search got there.
    pub stats: SearchStats,
}

/// Runs the search on `board`.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> BestMoveReport {
    let (action, stats) = minimax_with_stats(board);
    BestMoveReport {
        board: board.to_string(),
        player: player(board),
        action,
        stats,
    }
}

impl fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.player, self.action) {
            (Some(player), Some(action)) => {
                write!(f, "{} plays {}", player, action)?;
                if let Some(label) = action.label() {
                    write!(f, " ({})", label)?;
                }
                match self.stats.shortcut {
                    Some(shortcut) => write!(f, " [{}]", shortcut),
                    None => write!(f, " [{} nodes]", self.stats.nodes),
                }
            }
            _ => write!(f, "{} is terminal: no move", self.board),
        }
    }
}

/// A full game played by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// The played-out game.
    pub playout: Playout,
    /// How it ended.
    pub outcome: Outcome,
    /// Utility of the final board.
    pub utility: i8,
}

/// Plays `board` out with the search choosing for both sides.
#[instrument(skip(board), fields(board = %board))]
pub fn play_out(board: &Board) -> Result<SelfPlayReport, InvalidAction> {
    let playout = self_play(board)?;
    Ok(SelfPlayReport {
        outcome: playout.outcome(),
        utility: playout.utility(),
        playout,
    })
}

impl fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.playout.start())?;
        for (n, ply) in self.playout.plies().iter().enumerate() {
            writeln!(f, "{:>2}. {}", n + 1, ply)?;
        }
        writeln!(f, "{}", self.playout.end().pretty())?;
        write!(f, "{} (utility {})", self.outcome, self.utility)
    }
}

fn display_player(player: Option<Player>) -> String {
    player.map_or_else(|| "none".to_string(), |p| p.to_string())
}

/// Renders a report as text or pretty JSON.
pub fn render<T: Serialize + fmt::Display>(report: &T, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(report.to_string())
    }
}
