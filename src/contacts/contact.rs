//! Contact entity with its own message history.

use super::Message;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A named entry in the phone's contact list.
///
/// The history holds sent and received messages interleaved, in the order
/// they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Contact {
    /// Lookup key within a device. Matched exactly and case-sensitively.
    name: String,
    /// Phone number as entered.
    phone_number: String,
    /// Sent and received messages.
    #[getter(skip)]
    history: Vec<Message>,
}

impl Contact {
    /// Creates a contact with an empty history.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            history: Vec::new(),
        }
    }

    /// Returns the message history, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Sends `content` to `to`.
    ///
    /// The same message lands in both histories: `to` receives it first,
    /// then it is recorded here as sent.
    #[instrument(skip(self, to, content), fields(from = %self.name, to = %to.name))]
    pub fn send_message(&mut self, to: &mut Contact, content: impl Into<String>) {
        let message = Message::new(self.name.clone(), to.name.clone(), content);
        to.receive_message(message.clone());
        self.history.push(message);
    }

    /// Appends an incoming message to the history.
    #[instrument(skip(self, message), fields(contact = %self.name, from = %message.sender()))]
    pub fn receive_message(&mut self, message: Message) {
        debug!("Message received");
        self.history.push(message);
    }

    /// Renders the contact card.
    pub fn display_info(&self) -> String {
        format!("Name: {}\nPhone Number: {}", self.name, self.phone_number)
    }

    /// Renders the message history, one block per message.
    pub fn display_messages(&self) -> String {
        let mut out = format!("Messages with {}:", self.name);
        for message in &self.history {
            out.push('\n');
            out.push_str(&message.to_string());
            out.push_str("\n--------");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_has_empty_history() {
        let contact = Contact::new("Alice", "111");
        assert_eq!(contact.name(), "Alice");
        assert_eq!(contact.phone_number(), "111");
        assert!(contact.history().is_empty());
    }

    #[test]
    fn test_send_records_in_both_histories() {
        let mut alice = Contact::new("Alice", "111");
        let mut bob = Contact::new("Bob", "222");

        alice.send_message(&mut bob, "hi");

        let expected = Message::new("Alice", "Bob", "hi");
        assert_eq!(alice.history(), std::slice::from_ref(&expected));
        assert_eq!(bob.history(), std::slice::from_ref(&expected));
    }

    #[test]
    fn test_empty_content_is_allowed() {
        let mut alice = Contact::new("Alice", "111");
        let mut bob = Contact::new("Bob", "222");
        alice.send_message(&mut bob, "");
        assert_eq!(bob.history()[0].content(), "");
    }

    #[test]
    fn test_display_messages_lists_sender_and_content() {
        let mut alice = Contact::new("Alice", "111");
        let mut bob = Contact::new("Bob", "222");
        alice.send_message(&mut bob, "hi");
        let rendered = bob.display_messages();
        assert!(rendered.starts_with("Messages with Bob:"));
        assert!(rendered.contains("From: Alice\nContent: hi"));
    }
}
