//! Number guessing game.

use crate::games::SessionEnd;
use crate::io::{LineSource, RandomSource, StatusSink};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument, warn};

const LOWEST: i32 = 1;
const HIGHEST: i32 = 100;

/// Range the hidden number is drawn from and guesses must fall in.
pub const GUESS_RANGE: RangeInclusive<i64> = (LOWEST as i64)..=(HIGHEST as i64);

/// Feedback for a valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GuessFeedback {
    /// The guess is below the target.
    #[display("Too low! Try again.")]
    TooLow,
    /// The guess is above the target.
    #[display("Too high! Try again.")]
    TooHigh,
    /// The guess is the target.
    #[display("Congratulations! You guessed the number.")]
    Correct,
}

/// Error that can occur when submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The guess is outside [`GUESS_RANGE`].
    #[display("{} is not between 1 and 100", _0)]
    OutOfRange(i64),

    /// The number was already guessed.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GuessError {}

/// Guess a hidden number between 1 and 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGuessing {
    target: i64,
    guesses: u32,
    solved: bool,
}

impl NumberGuessing {
    /// Draws the hidden number from `rng`.
    #[instrument(skip(rng))]
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let drawn = rng.next_in_range(LOWEST, HIGHEST);
        if !(LOWEST..=HIGHEST).contains(&drawn) {
            warn!(drawn, "Random source out of range, clamping hidden number");
        }
        debug!("Hidden number drawn");
        Self::with_target(i64::from(drawn.clamp(LOWEST, HIGHEST)))
    }

    /// Creates a game with a known hidden number.
    pub fn with_target(target: i64) -> Self {
        Self {
            target,
            guesses: 0,
            solved: false,
        }
    }

    /// Returns the number of valid guesses so far.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Returns true once the number was guessed.
    pub fn is_finished(&self) -> bool {
        self.solved
    }

    /// Compares `guess` with the hidden number.
    ///
    /// # Errors
    ///
    /// Out-of-range guesses and guesses after the game ended are rejected
    /// without changing any state.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, guess: i64) -> Result<GuessFeedback, GuessError> {
        if self.solved {
            return Err(GuessError::GameOver);
        }
        if !GUESS_RANGE.contains(&guess) {
            return Err(GuessError::OutOfRange(guess));
        }

        self.guesses += 1;
        let feedback = match guess.cmp(&self.target) {
            std::cmp::Ordering::Less => GuessFeedback::TooLow,
            std::cmp::Ordering::Greater => GuessFeedback::TooHigh,
            std::cmp::Ordering::Equal => {
                self.solved = true;
                info!(guesses = self.guesses, "Number guessed");
                GuessFeedback::Correct
            }
        };
        Ok(feedback)
    }

    /// Runs guesses from `input` until the number is found or input runs out.
    #[instrument(skip_all)]
    pub fn play(&mut self, input: &mut dyn LineSource, output: &mut dyn StatusSink) -> SessionEnd {
        if self.solved {
            output.emit("You already guessed the number.");
            return SessionEnd::Finished;
        }

        output.emit("Welcome to the Number Guessing Game!");
        output.emit("Try to guess the number between 1 and 100.");
        loop {
            output.emit("Enter your guess: ");
            let Some(line) = input.next_line() else {
                return SessionEnd::InputExhausted;
            };

            let Ok(guess) = line.trim().parse::<i64>() else {
                output.emit("Invalid guess. Please enter a number between 1 and 100.");
                continue;
            };

            match self.submit_guess(guess) {
                Ok(feedback) => {
                    output.emit(&feedback.to_string());
                    if feedback == GuessFeedback::Correct {
                        return SessionEnd::Finished;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Guess rejected");
                    output.emit("Invalid guess. Please enter a number between 1 and 100.");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedRandom;

    #[test]
    fn test_target_comes_from_random_source() {
        let mut rng = ScriptedRandom::new([37]);
        let mut game = NumberGuessing::new(&mut rng);
        assert_eq!(game.submit_guess(37), Ok(GuessFeedback::Correct));
    }

    /// Ignores the requested range.
    #[derive(Debug)]
    struct Fixed(i32);

    impl RandomSource for Fixed {
        fn next_in_range(&mut self, _low: i32, _high: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_target_is_drawn_from_guess_range() {
        let mut game = NumberGuessing::new(&mut Fixed(1000));
        assert_eq!(game.submit_guess(*GUESS_RANGE.end()), Ok(GuessFeedback::Correct));

        let mut game = NumberGuessing::new(&mut Fixed(-5));
        assert_eq!(game.submit_guess(*GUESS_RANGE.start()), Ok(GuessFeedback::Correct));

        let mut rng = crate::io::SeededRandom::from_seed(11);
        for _ in 0..50 {
            let game = NumberGuessing::new(&mut rng);
            assert!(GUESS_RANGE.contains(&game.target));
        }
    }

    #[test]
    fn test_edges_of_range_are_valid() {
        let mut game = NumberGuessing::with_target(50);
        assert_eq!(game.submit_guess(1), Ok(GuessFeedback::TooLow));
        assert_eq!(game.submit_guess(100), Ok(GuessFeedback::TooHigh));
        assert_eq!(game.guesses(), 2);
    }
}
