//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), separated from the game
//! state machine so each rule can be tested alone.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
