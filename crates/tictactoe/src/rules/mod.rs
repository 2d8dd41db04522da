//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). None of them keep state
//! between calls, and the only one that builds a new board is
//! [`result`], which never touches its input.

pub mod terminal;
pub mod transition;
pub mod turn;
pub mod win;

pub use terminal::{terminal, utility};
pub use transition::result;
pub use turn::{actions, initial_state, player};
pub use win::{LINES, Line, winner};
