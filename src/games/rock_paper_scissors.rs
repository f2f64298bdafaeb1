//! Rock, paper, scissors against a random opponent.

use crate::games::SessionEnd;
use crate::io::{LineSource, RandomSource, StatusSink};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A hand shape. Numbered 1 to 3 on the console.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Choice {
    /// Beats scissors.
    Rock = 1,
    /// Beats rock.
    Paper = 2,
    /// Beats paper.
    Scissors = 3,
}

impl Choice {
    /// Maps a console number to a choice.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Choice::Rock),
            2 => Some(Choice::Paper),
            3 => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Maps a drawn number to a choice, clamping it into 1..=3.
    fn from_clamped(n: i32) -> Self {
        match n {
            i32::MIN..=1 => Choice::Rock,
            2 => Choice::Paper,
            _ => Choice::Scissors,
        }
    }

    /// Returns the console number of this choice.
    pub fn number(self) -> i64 {
        self as i64
    }

    /// Returns the choice this one beats.
    pub fn beats(self) -> Self {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

/// Result of one round from the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Both chose the same shape.
    #[display("It's a draw!")]
    Draw,
    /// The user's shape beats the opponent's.
    #[display("You win!")]
    UserWins,
    /// The opponent's shape beats the user's.
    #[display("Computer wins!")]
    OpponentWins,
}

/// Decides a round.
#[instrument]
pub fn decide(user: Choice, opponent: Choice) -> Outcome {
    if user == opponent {
        Outcome::Draw
    } else if user.beats() == opponent {
        Outcome::UserWins
    } else {
        Outcome::OpponentWins
    }
}

/// One played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The user's shape.
    pub user: Choice,
    /// The opponent's shape.
    pub opponent: Choice,
    /// Who won.
    pub outcome: Outcome,
}

/// Error that can occur when submitting a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChoiceError {
    /// The number is not 1, 2 or 3.
    #[display("{} is not a valid choice", _0)]
    InvalidChoice(i64),

    /// The line is not a number.
    #[display("Choice is not a number")]
    Unreadable,

    /// The session was ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for ChoiceError {}

/// Rounds against a random opponent until the user declines another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockPaperScissors {
    rounds: Vec<Round>,
    ended: bool,
}

impl RockPaperScissors {
    /// Creates a session with no rounds played.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rounds played so far.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns true once the user declined another round.
    pub fn is_finished(&self) -> bool {
        self.ended
    }

    /// Plays one round with the user's numbered choice.
    ///
    /// # Errors
    ///
    /// Numbers outside 1..=3 are rejected without drawing an opponent or
    /// recording a round.
    #[instrument(skip(self, rng))]
    pub fn submit_choice(
        &mut self,
        choice: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Round, ChoiceError> {
        if self.ended {
            return Err(ChoiceError::GameOver);
        }
        let user = Choice::from_number(choice).ok_or(ChoiceError::InvalidChoice(choice))?;
        let drawn = rng.next_in_range(1, 3);
        if !(1..=3).contains(&drawn) {
            warn!(drawn, "Random source out of range, clamping opponent choice");
        }
        let opponent = Choice::from_clamped(drawn);
        let round = Round {
            user,
            opponent,
            outcome: decide(user, opponent),
        };
        debug!(?round, "Round played");
        self.rounds.push(round);
        Ok(round)
    }

    /// Applies the answer to "play again?".
    ///
    /// Only an answer starting with `y` or `Y` keeps the session open.
    /// Returns true if another round may be played.
    #[instrument(skip(self))]
    pub fn continue_session(&mut self, answer: &str) -> bool {
        let again = matches!(answer.trim_start().chars().next(), Some('y' | 'Y'));
        if !again {
            info!(rounds = self.rounds.len(), "Session ended");
            self.ended = true;
        }
        again
    }

    /// Runs rounds from `input` until the user stops or input runs out.
    #[instrument(skip_all)]
    pub fn play(
        &mut self,
        input: &mut dyn LineSource,
        output: &mut dyn StatusSink,
        rng: &mut dyn RandomSource,
    ) -> SessionEnd {
        if self.ended {
            output.emit("This session is over. Choose the game again to start a new one.");
            return SessionEnd::Finished;
        }

        output.emit("Welcome to Rock, Paper, Scissors!");
        output.emit("Choose: 1 (Rock), 2 (Paper), 3 (Scissors)");
        loop {
            output.emit("Enter your choice: ");
            let Some(line) = input.next_line() else {
                return SessionEnd::InputExhausted;
            };

            let round = parse_choice(&line).and_then(|n| self.submit_choice(n, rng));
            let round = match round {
                Ok(round) => round,
                Err(e) => {
                    debug!(error = %e, line = %line, "Choice rejected");
                    output.emit("Invalid choice. Please choose 1, 2, or 3.");
                    continue;
                }
            };

            output.emit(&format!("Computer chose: {}", round.opponent.number()));
            output.emit(&round.outcome.to_string());

            output.emit("Play again? (y/n): ");
            let answer = input.next_line().unwrap_or_default();
            if !self.continue_session(&answer) {
                return SessionEnd::Finished;
            }
        }
    }
}

/// Reads a numbered choice from a console line.
pub fn parse_choice(line: &str) -> Result<i64, ChoiceError> {
    line.trim().parse().map_err(|_| ChoiceError::Unreadable)
}
