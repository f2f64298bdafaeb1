//! The phone itself: contacts, strategy slots and the calculation log.

use crate::calculator::{CalculationResult, Calculator};
use crate::contacts::{Contact, Message, decode_contacts, encode_contacts};
use crate::games::{Game, GameKind, SessionEnd};
use crate::io::{LineSource, RandomSource, SeededRandom, StatusSink};
use crate::{PhoneError, PhoneErrorKind};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Value returned by [`Device::calculate`] when no calculator is installed.
pub const NO_CALCULATOR_SENTINEL: f64 = 0.0;

/// A simulated mobile phone.
///
/// Owns its contacts, at most one calculator, at most one game, and the log
/// of stored calculations. Installing a calculator or game drops the
/// previous one.
#[derive(Debug)]
pub struct Device {
    contacts: Vec<Contact>,
    calculator: Option<Calculator>,
    game: Option<Game>,
    calculation_log: Vec<CalculationResult>,
    rng: Box<dyn RandomSource>,
}

impl Device {
    /// Creates an empty device drawing randomness from `rng`.
    #[instrument(skip(rng))]
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        info!("Creating device");
        Self {
            contacts: Vec::new(),
            calculator: None,
            game: None,
            calculation_log: Vec::new(),
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Contacts and messages
    // ─────────────────────────────────────────────────────────────

    /// Appends a contact. Duplicate names are allowed.
    #[instrument(skip(self, contact), fields(name = %contact.name()))]
    pub fn add_contact(&mut self, contact: Contact) {
        debug!("Adding contact");
        self.contacts.push(contact);
    }

    /// Returns contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns the first contact named `name`.
    #[instrument(skip(self))]
    pub fn find_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name() == name)
    }

    fn position_of(&self, name: &str) -> Result<usize, PhoneError> {
        self.contacts
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| PhoneError::new(PhoneErrorKind::NotFound(name.to_string())))
    }

    /// Sends `content` from one named contact to another.
    ///
    /// Names resolve to the first matching contact. A contact messaging
    /// itself gets the message twice, once sent and once received.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error naming the sender or recipient that does
    /// not resolve. No history changes in that case.
    #[instrument(skip(self, content))]
    pub fn send_message(
        &mut self,
        sender: &str,
        recipient: &str,
        content: &str,
    ) -> Result<(), PhoneError> {
        let from = self.position_of(sender)?;
        let to = self.position_of(recipient)?;

        match from.cmp(&to) {
            std::cmp::Ordering::Less => {
                let (head, tail) = self.contacts.split_at_mut(to);
                head[from].send_message(&mut tail[0], content);
            }
            std::cmp::Ordering::Greater => {
                let (head, tail) = self.contacts.split_at_mut(from);
                tail[0].send_message(&mut head[to], content);
            }
            std::cmp::Ordering::Equal => {
                let message = Message::new(sender, recipient, content);
                let contact = &mut self.contacts[from];
                contact.receive_message(message.clone());
                contact.receive_message(message);
            }
        }

        info!("Message sent");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Calculator
    // ─────────────────────────────────────────────────────────────

    /// Installs a calculator, dropping any previous one.
    #[instrument(skip(self))]
    pub fn set_calculator(&mut self, calculator: Calculator) {
        if let Some(previous) = self.calculator.replace(calculator) {
            debug!(%previous, "Replaced calculator");
        }
    }

    /// Returns the installed calculator.
    pub fn calculator(&self) -> Option<Calculator> {
        self.calculator
    }

    /// Applies the installed calculator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` when no calculator is installed.
    #[instrument(skip(self))]
    pub fn try_calculate(&self, a: f64, b: f64) -> Result<f64, PhoneError> {
        self.calculator
            .map(|calculator| calculator.calculate(a, b))
            .ok_or_else(|| PhoneError::new(PhoneErrorKind::ConfigurationMissing("calculator")))
    }

    /// Applies the installed calculator, degrading to
    /// [`NO_CALCULATOR_SENTINEL`] with a notice on `output` when none is
    /// installed.
    #[instrument(skip(self, output))]
    pub fn calculate(&self, a: f64, b: f64, output: &mut dyn StatusSink) -> f64 {
        match self.try_calculate(a, b) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Calculation degraded to sentinel");
                output.emit("No calculator installed.");
                NO_CALCULATOR_SENTINEL
            }
        }
    }

    /// Calculates and appends the result to the log.
    ///
    /// The entry is stored even when the sentinel was returned.
    #[instrument(skip(self, output))]
    pub fn perform_and_store_calculation(
        &mut self,
        a: f64,
        b: f64,
        description: &str,
        output: &mut dyn StatusSink,
    ) -> f64 {
        let value = self.calculate(a, b, output);
        self.calculation_log
            .push(CalculationResult::new(description, value));
        value
    }

    /// Returns stored calculations, oldest first.
    pub fn calculation_log(&self) -> &[CalculationResult] {
        &self.calculation_log
    }

    // ─────────────────────────────────────────────────────────────
    //  Games
    // ─────────────────────────────────────────────────────────────

    /// Installs a game, dropping any previous one.
    #[instrument(skip(self, game), fields(kind = %game.kind()))]
    pub fn set_game(&mut self, game: Game) {
        if let Some(previous) = self.game.replace(game) {
            debug!(previous = %previous.kind(), "Replaced game");
        }
    }

    /// Builds a fresh game of `kind` with the device's random source and
    /// installs it.
    #[instrument(skip(self))]
    pub fn install_game(&mut self, kind: GameKind) {
        let game = Game::new(kind, self.rng.as_mut());
        self.set_game(game);
    }

    /// Returns the installed game.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the installed game for driving its submit entry points
    /// directly.
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Plays the installed game.
    ///
    /// Returns `None` after reporting on `output` when no game is installed.
    #[instrument(skip_all)]
    pub fn play_game(
        &mut self,
        input: &mut dyn LineSource,
        output: &mut dyn StatusSink,
    ) -> Option<SessionEnd> {
        match self.game.as_mut() {
            Some(game) => Some(game.play(input, output, self.rng.as_mut())),
            None => {
                warn!("Play requested with no game installed");
                output.emit("No game installed.");
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Persistence
    // ─────────────────────────────────────────────────────────────

    /// Writes every contact's name and phone number to `path`.
    ///
    /// Returns the number of contacts written. Histories are not saved.
    ///
    /// # Errors
    ///
    /// Returns `Format` if a field is empty or contains whitespace (the file
    /// is left untouched), or `Io` if the file cannot be written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_contacts_to_file(&self, path: impl AsRef<Path>) -> Result<usize, PhoneError> {
        let text = encode_contacts(&self.contacts)?;
        std::fs::write(path.as_ref(), text).map_err(|e| {
            PhoneError::new(PhoneErrorKind::Io(format!(
                "Failed to open the file for writing: {}",
                e
            )))
        })?;
        info!(count = self.contacts.len(), "Contacts saved");
        Ok(self.contacts.len())
    }

    /// Appends contacts read from `path` to the existing list.
    ///
    /// Returns the number of contacts loaded.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read. No contacts are added then.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_contacts_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, PhoneError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PhoneError::new(PhoneErrorKind::Io(format!(
                "Failed to open the file for reading: {}",
                e
            )))
        })?;
        let loaded = decode_contacts(&text);
        let count = loaded.len();
        self.contacts.extend(loaded);
        info!(count, "Contacts loaded");
        Ok(count)
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new(Box::new(SeededRandom::from_entropy()))
    }
}
