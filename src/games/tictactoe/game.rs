//! Tic-tac-toe state machine.

use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Mark, SIZE, Square};
use crate::games::SessionEnd;
use crate::io::{LineSource, StatusSink};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Error that can occur when submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are not on the board.
    #[display("({}, {}) is off the board", _0, _1)]
    OutOfBounds(usize, usize),

    /// The square is already occupied.
    #[display("Square ({}, {}) is already occupied", _0, _1)]
    SquareOccupied(usize, usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The line does not hold a row and a column.
    #[display("Expected a row and a column")]
    Unreadable,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// X moves first and turns alternate. A rejected move leaves the board
/// and the turn untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<(usize, usize)>,
}

impl TicTacToe {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Rejects moves after the game ended, off the board, or onto an
    /// occupied square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds(row, col));
        }
        if !self.board.is_empty(row, col) {
            return Err(MoveError::SquareOccupied(row, col));
        }

        self.board
            .set(row, col, Square::Occupied(self.to_move))
            .map_err(|_| MoveError::OutOfBounds(row, col))?;
        self.history.push((row, col));

        if let Some(winner) = check_winner(&self.board) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Runs moves from `input` until the game ends or input runs out.
    ///
    /// Each line holds a row and a column separated by whitespace.
    #[instrument(skip_all)]
    pub fn play(&mut self, input: &mut dyn LineSource, output: &mut dyn StatusSink) -> SessionEnd {
        if self.status.is_terminal() {
            output.emit(&self.board.display());
            output.emit("This game is already over.");
            return SessionEnd::Finished;
        }

        loop {
            output.emit(&self.board.display());
            output.emit(&format!(
                "Player {}, enter your move (row and column): ",
                self.to_move
            ));
            let Some(line) = input.next_line() else {
                return SessionEnd::InputExhausted;
            };

            let result = parse_coordinates(&line)
                .and_then(|(row, col)| self.submit_move(row, col));

            match result {
                Ok(GameStatus::InProgress) => {}
                Ok(GameStatus::Won(mark)) => {
                    output.emit(&self.board.display());
                    output.emit(&format!("Player {} wins!", mark));
                    return SessionEnd::Finished;
                }
                Ok(GameStatus::Draw) => {
                    output.emit(&self.board.display());
                    output.emit("It's a draw!");
                    return SessionEnd::Finished;
                }
                Err(e) => {
                    debug!(error = %e, line = %line, "Move rejected");
                    output.emit("Invalid move. Try again.");
                }
            }
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads `row col` from a line.
///
/// Range checks are left to [`TicTacToe::submit_move`].
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), MoveError> {
    let mut parts = line.split_whitespace();
    let mut next = || {
        parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or(MoveError::Unreadable)
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
