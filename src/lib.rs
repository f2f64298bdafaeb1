//! Strictly Phone library - a simulated mobile phone
//!
//! A [`Device`] owns a contact list with per-contact message histories, one
//! pluggable [`Calculator`], one pluggable [`Game`], and a log of stored
//! calculations.
//!
//! # Architecture
//!
//! - **Contacts**: named entries exchanging immutable [`Message`]s
//! - **Calculator**: closed set of binary operations
//! - **Games**: tic-tac-toe, number guessing and rock-paper-scissors as
//!   explicit state machines
//! - **I/O**: line input, status output and random integers are injected
//!   collaborators, so games run the same on a console or in tests
//!
//! # Example
//!
//! ```
//! use strictly_phone::{Calculator, Contact, Device, ScriptedRandom, Transcript};
//!
//! let mut phone = Device::new(Box::new(ScriptedRandom::new([42])));
//! phone.add_contact(Contact::new("Alice", "111"));
//! phone.add_contact(Contact::new("Bob", "222"));
//! phone.send_message("Alice", "Bob", "hi").expect("Both contacts exist");
//!
//! phone.set_calculator(Calculator::Scientific);
//! let mut out = Transcript::new();
//! assert_eq!(phone.calculate(5.0, 3.0, &mut out), 15.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod calculator;
mod config;
mod contacts;
mod device;
mod error;
mod games;
mod io;

// Crate-level exports - Errors
pub use error::{PhoneError, PhoneErrorKind};

// Crate-level exports - Configuration
pub use config::{ConfigError, PhoneConfig};

// Crate-level exports - Contacts
pub use contacts::{Contact, Message, decode_contacts, encode_contacts};

// Crate-level exports - Calculator
pub use calculator::{CalculationResult, Calculator};

// Crate-level exports - Games
pub use games::tictactoe::{
    Board, GameStatus, Mark, MoveError, Square, TicTacToe, check_winner, is_draw, is_full,
    parse_coordinates,
};
pub use games::{
    Choice, ChoiceError, GUESS_RANGE, Game, GameKind, GuessError, GuessFeedback, NumberGuessing,
    Outcome, RockPaperScissors, Round, SessionEnd, decide, parse_choice,
};

// Crate-level exports - Device
pub use device::{Device, NO_CALCULATOR_SENTINEL};

// Crate-level exports - Console collaborators
pub use io::{
    LineSource, RandomSource, ReaderSource, ScriptedInput, ScriptedRandom, SeededRandom,
    StatusSink, Transcript, WriterSink,
};

// Crate-level exports - Menu
pub use app::{MenuAction, PhoneApp};
