//! A single sent text.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One text sent from one contact to another.
///
/// Messages are immutable: both the sender and the recipient keep their
/// own copy in their history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Message {
    /// Name of the sending contact.
    #[new(into)]
    sender: String,
    /// Name of the receiving contact.
    #[new(into)]
    recipient: String,
    /// Message body. May be empty.
    #[new(into)]
    content: String,
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "From: {}\nContent: {}", self.sender, self.content)
    }
}
