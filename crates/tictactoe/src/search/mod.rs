//! Optimal-move search.
//!
//! [`minimax`] sweeps the whole remaining game tree. [`impending_winner`]
//! spots forcing moves so the sweep can be skipped when one exists.

pub mod minimax;
pub mod threat;

pub use minimax::{SearchStats, Shortcut, minimax, minimax_with_stats, value};
pub use threat::impending_winner;
