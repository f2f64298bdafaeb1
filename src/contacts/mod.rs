//! Contacts, their message histories, and the contacts file format.

mod contact;
mod message;
mod store;

pub use contact::Contact;
pub use message::Message;
pub use store::{decode_contacts, encode_contacts};
