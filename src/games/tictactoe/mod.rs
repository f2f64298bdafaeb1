mod game;
mod rules;
mod types;

pub use game::{MoveError, TicTacToe, parse_coordinates};
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, GameStatus, Mark, Square};
