//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side of the board length.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the square at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), &'static str> {
        let cell = self
            .squares
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or("Position out of bounds")?;
        *cell = square;
        Ok(())
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns the rows of squares.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Counts empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s == Square::Empty)
            .count()
    }

    /// Formats the board as a human-readable string.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::from("Tic-Tac-Toe Board:");
        for (i, row) in self.squares.iter().enumerate() {
            result.push('\n');
            let cells: Vec<&str> = row
                .iter()
                .map(|square| match square {
                    Square::Empty => " ",
                    Square::Occupied(Mark::X) => "X",
                    Square::Occupied(Mark::O) => "O",
                })
                .collect();
            result.push_str(&cells.join(" | "));
            if i < SIZE - 1 {
                result.push_str("\n---------");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
