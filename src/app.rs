//! Numbered console menu driving a [`Device`].

use crate::calculator::Calculator;
use crate::config::PhoneConfig;
use crate::contacts::Contact;
use crate::device::Device;
use crate::games::{GameKind, SessionEnd};
use crate::io::{LineSource, StatusSink};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum MenuAction {
    /// Prompt for a name and phone number.
    AddContact,
    /// Show every contact card.
    ListContacts,
    /// Send a message between two named contacts.
    SendMessage,
    /// Show one contact's history.
    ViewMessages,
    /// Install a calculator.
    SetCalculator,
    /// Run the installed calculator and log the result.
    PerformCalculation,
    /// Install tic-tac-toe.
    SetTicTacToe,
    /// Play the installed game.
    PlayTicTacToe,
    /// Install number guessing.
    SetNumberGuessing,
    /// Play the installed game.
    PlayNumberGuessing,
    /// Install rock, paper, scissors.
    SetRockPaperScissors,
    /// Play the installed game.
    PlayRockPaperScissors,
    /// Write contacts to a file.
    SaveContacts,
    /// Append contacts from a file.
    LoadContacts,
    /// Leave the menu.
    Exit,
    /// Show the calculation log.
    ViewCalculationResults,
}

impl MenuAction {
    /// Returns the menu number.
    pub fn number(self) -> u32 {
        match self {
            Self::AddContact => 1,
            Self::ListContacts => 2,
            Self::SendMessage => 3,
            Self::ViewMessages => 4,
            Self::SetCalculator => 5,
            Self::PerformCalculation => 6,
            Self::SetTicTacToe => 7,
            Self::PlayTicTacToe => 8,
            Self::SetNumberGuessing => 9,
            Self::PlayNumberGuessing => 10,
            Self::SetRockPaperScissors => 11,
            Self::PlayRockPaperScissors => 12,
            Self::SaveContacts => 13,
            Self::LoadContacts => 14,
            Self::Exit => 15,
            Self::ViewCalculationResults => 16,
        }
    }

    /// Parses a menu number.
    #[instrument]
    pub fn from_number(n: u32) -> Option<Self> {
        Self::iter().find(|action| action.number() == n)
    }

    /// Returns the menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddContact => "Add Contact",
            Self::ListContacts => "List Contacts",
            Self::SendMessage => "Send Message",
            Self::ViewMessages => "View Messages",
            Self::SetCalculator => "Set Calculator (Basic/Scientific)",
            Self::PerformCalculation => "Perform Calculation",
            Self::SetTicTacToe => "Set Game (Tic-Tac-Toe)",
            Self::PlayTicTacToe => "Play Game (Tic-Tac-Toe)",
            Self::SetNumberGuessing => "Set Game (Number Guessing)",
            Self::PlayNumberGuessing => "Play Game (Number Guessing)",
            Self::SetRockPaperScissors => "Set Game (Rock, Paper, Scissors)",
            Self::PlayRockPaperScissors => "Play Game (Rock, Paper, Scissors)",
            Self::SaveContacts => "Save Contacts to File",
            Self::LoadContacts => "Load Contacts from File",
            Self::Exit => "Exit",
            Self::ViewCalculationResults => "View Calculation Results",
        }
    }
}

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive phone session over a line source and a status sink.
pub struct PhoneApp<'a> {
    device: Device,
    config: PhoneConfig,
    input: &'a mut dyn LineSource,
    output: &'a mut dyn StatusSink,
}

impl std::fmt::Debug for PhoneApp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneApp")
            .field("device", &self.device)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> PhoneApp<'a> {
    /// Creates a session around `device`.
    #[instrument(skip_all)]
    pub fn new(
        device: Device,
        config: PhoneConfig,
        input: &'a mut dyn LineSource,
        output: &'a mut dyn StatusSink,
    ) -> Self {
        Self {
            device,
            config,
            input,
            output,
        }
    }

    /// Returns the device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Consumes the session and returns the device.
    pub fn into_device(self) -> Device {
        self.device
    }

    /// Runs the menu until Exit is chosen or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) {
        info!("Starting menu loop");
        loop {
            self.show_menu();
            let Some(line) = self.input.next_line() else {
                info!("Input exhausted, leaving menu");
                return;
            };

            let action = line.trim().parse::<u32>().ok().and_then(MenuAction::from_number);
            let Some(action) = action else {
                debug!(line = %line, "Unrecognized menu choice");
                self.output.emit("Invalid choice. Please try again.");
                continue;
            };

            if self.dispatch(action) == Flow::Quit {
                info!("Exit chosen");
                return;
            }
        }
    }

    fn show_menu(&mut self) {
        self.output.emit("\nMenu:");
        for action in MenuAction::iter() {
            self.output
                .emit(&format!("{}. {}", action.number(), action.label()));
        }
        self.output.emit("Enter your choice: ");
    }

    /// Asks a question and returns the answer, or `None` when input ran out.
    fn prompt(&mut self, question: &str) -> Option<String> {
        self.output.emit(question);
        self.input.next_line()
    }

    fn prompt_number(&mut self, question: &str) -> Option<f64> {
        let answer = self.prompt(question)?;
        match answer.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.output.emit("Invalid number.");
                None
            }
        }
    }

    fn prompt_path(&mut self, question: &str) -> PathBuf {
        match self.prompt(question) {
            Some(answer) if !answer.trim().is_empty() => PathBuf::from(answer.trim()),
            _ => self.config.contacts_file().clone(),
        }
    }

    #[instrument(skip(self))]
    fn dispatch(&mut self, action: MenuAction) -> Flow {
        match action {
            MenuAction::AddContact => self.add_contact(),
            MenuAction::ListContacts => self.list_contacts(),
            MenuAction::SendMessage => self.send_message(),
            MenuAction::ViewMessages => self.view_messages(),
            MenuAction::SetCalculator => self.set_calculator(),
            MenuAction::PerformCalculation => self.perform_calculation(),
            MenuAction::SetTicTacToe => self.set_game(GameKind::TicTacToe),
            MenuAction::SetNumberGuessing => self.set_game(GameKind::NumberGuessing),
            MenuAction::SetRockPaperScissors => self.set_game(GameKind::RockPaperScissors),
            MenuAction::PlayTicTacToe
            | MenuAction::PlayNumberGuessing
            | MenuAction::PlayRockPaperScissors => self.play_game(),
            MenuAction::SaveContacts => self.save_contacts(),
            MenuAction::LoadContacts => self.load_contacts(),
            MenuAction::ViewCalculationResults => self.view_calculation_results(),
            MenuAction::Exit => {
                self.output.emit("Exiting program...");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn add_contact(&mut self) {
        let Some(name) = self.prompt("Enter Contact Name: ") else {
            return;
        };
        let Some(phone_number) = self.prompt("Enter Phone Number: ") else {
            return;
        };
        self.device.add_contact(Contact::new(name, phone_number));
        self.output.emit("Contact added successfully.");
    }

    fn list_contacts(&mut self) {
        self.output.emit("Contacts:");
        for contact in self.device.contacts() {
            self.output.emit(&contact.display_info());
            self.output.emit("--------");
        }
    }

    fn send_message(&mut self) {
        let Some(sender) = self.prompt("Enter sender's name: ") else {
            return;
        };
        let Some(recipient) = self.prompt("Enter recipient's name: ") else {
            return;
        };
        let Some(content) = self.prompt("Enter message content: ") else {
            return;
        };
        match self.device.send_message(&sender, &recipient, &content) {
            Ok(()) => self.output.emit("Message sent successfully."),
            Err(e) => {
                warn!(error = %e, "Message not sent");
                self.output.emit(&format!("Message not sent: {}", e.kind()));
            }
        }
    }

    fn view_messages(&mut self) {
        let Some(name) = self.prompt("Enter contact's name to view messages: ") else {
            return;
        };
        match self.device.find_contact(&name) {
            Some(contact) => self.output.emit(&contact.display_messages()),
            None => self.output.emit(&format!("Contact not found: {}", name)),
        }
    }

    fn set_calculator(&mut self) {
        self.output.emit("Select Calculator Type:");
        self.output.emit("1. Basic Calculator");
        self.output.emit("2. Scientific Calculator");
        let Some(answer) = self.input.next_line() else {
            return;
        };
        let calculator = answer
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Calculator::from_menu_choice);
        match calculator {
            Some(calculator) => {
                self.device.set_calculator(calculator);
                self.output.emit(&format!("{} selected.", calculator));
            }
            None => self.output.emit("Invalid choice."),
        }
    }

    fn perform_calculation(&mut self) {
        let Some(a) = self.prompt_number("Enter Operand 1: ") else {
            return;
        };
        let Some(b) = self.prompt_number("Enter Operand 2: ") else {
            return;
        };
        let Some(description) = self.prompt("Enter a description for this calculation: ")
        else {
            return;
        };
        let value = self
            .device
            .perform_and_store_calculation(a, b, &description, self.output);
        self.output.emit(&format!("Result: {}", value));
    }

    fn view_calculation_results(&mut self) {
        self.output.emit("Calculator Results:");
        for result in self.device.calculation_log() {
            self.output.emit(&result.to_string());
            self.output.emit("--------");
        }
    }

    fn set_game(&mut self, kind: GameKind) {
        self.device.install_game(kind);
        self.output.emit(&format!("{} game selected.", kind));
    }

    fn play_game(&mut self) {
        if let Some(SessionEnd::InputExhausted) = self.device.play_game(self.input, self.output) {
            warn!("Game interrupted by end of input");
        }
    }

    fn save_contacts(&mut self) {
        let path = self.prompt_path("Enter the filename to save contacts: ");
        match self.device.save_contacts_to_file(&path) {
            Ok(count) => self.output.emit(&format!(
                "{} contacts saved to {}.",
                count,
                path.display()
            )),
            Err(e) => self.output.emit(&format!("Save failed: {}", e.kind())),
        }
    }

    fn load_contacts(&mut self) {
        let path = self.prompt_path("Enter the filename to load contacts: ");
        match self.device.load_contacts_from_file(&path) {
            Ok(count) => self.output.emit(&format!(
                "{} contacts loaded from {}.",
                count,
                path.display()
            )),
            Err(e) => self.output.emit(&format!("Load failed: {}", e.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_are_unique_and_dense() {
        let mut numbers: Vec<u32> = MenuAction::iter().map(MenuAction::number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(MenuAction::from_number(1), Some(MenuAction::AddContact));
        assert_eq!(MenuAction::from_number(15), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_number(0), None);
        assert_eq!(MenuAction::from_number(17), None);
    }
}
