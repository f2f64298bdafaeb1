//! Pluggable turn-based games.
//!
//! Each game is a state machine with its own submit entry point
//! (`submit_move`, `submit_guess`, `submit_choice`) and a `play` driver
//! that feeds it lines from a [`LineSource`].

mod number_guessing;
mod rock_paper_scissors;
pub mod tictactoe;

pub use number_guessing::{GUESS_RANGE, GuessError, GuessFeedback, NumberGuessing};
pub use rock_paper_scissors::{
    Choice, ChoiceError, Outcome, RockPaperScissors, Round, decide, parse_choice,
};

use crate::io::{LineSource, RandomSource, StatusSink};
use serde::{Deserialize, Serialize};
use tictactoe::TicTacToe;
use tracing::{info, instrument};

/// How a call to `play` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// The game reached a terminal state.
    Finished,
    /// The input source ran dry before the game ended. The game keeps its
    /// state and can be resumed.
    InputExhausted,
}

/// Which game to install.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameKind {
    /// Two-player tic-tac-toe on one console.
    #[strum(to_string = "Tic-Tac-Toe")]
    TicTacToe,
    /// Guess a hidden number.
    #[strum(to_string = "Number Guessing")]
    NumberGuessing,
    /// Rock, paper, scissors against the computer.
    #[strum(to_string = "Rock, Paper, Scissors")]
    RockPaperScissors,
}

/// A game installed on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    /// Tic-tac-toe.
    TicTacToe(TicTacToe),
    /// Number guessing.
    NumberGuessing(NumberGuessing),
    /// Rock, paper, scissors.
    RockPaperScissors(RockPaperScissors),
}

impl Game {
    /// Creates a fresh game of the given kind.
    ///
    /// Number guessing draws its hidden number from `rng` here.
    #[instrument(skip(rng))]
    pub fn new(kind: GameKind, rng: &mut dyn RandomSource) -> Self {
        match kind {
            GameKind::TicTacToe => Game::TicTacToe(TicTacToe::new()),
            GameKind::NumberGuessing => Game::NumberGuessing(NumberGuessing::new(rng)),
            GameKind::RockPaperScissors => Game::RockPaperScissors(RockPaperScissors::new()),
        }
    }

    /// Returns the kind of this game.
    pub fn kind(&self) -> GameKind {
        match self {
            Game::TicTacToe(_) => GameKind::TicTacToe,
            Game::NumberGuessing(_) => GameKind::NumberGuessing,
            Game::RockPaperScissors(_) => GameKind::RockPaperScissors,
        }
    }

    /// Returns true once the game accepts no further input.
    pub fn is_finished(&self) -> bool {
        match self {
            Game::TicTacToe(g) => g.status().is_terminal(),
            Game::NumberGuessing(g) => g.is_finished(),
            Game::RockPaperScissors(g) => g.is_finished(),
        }
    }

    /// Runs the game's session loop.
    #[instrument(skip_all, fields(kind = %self.kind()))]
    pub fn play(
        &mut self,
        input: &mut dyn LineSource,
        output: &mut dyn StatusSink,
        rng: &mut dyn RandomSource,
    ) -> SessionEnd {
        let end = match self {
            Game::TicTacToe(g) => g.play(input, output),
            Game::NumberGuessing(g) => g.play(input, output),
            Game::RockPaperScissors(g) => g.play(input, output, rng),
        };
        info!(?end, "Game session returned");
        end
    }
}
