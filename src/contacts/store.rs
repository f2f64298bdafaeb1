//! Plain-text contacts file format.
//!
//! One contact per line as `name phone_number`. No header, no escaping.
//! Reading splits the whole text on whitespace and pairs up tokens, so both
//! fields must be non-empty and free of whitespace. Message histories are
//! never written.

use super::Contact;
use crate::{PhoneError, PhoneErrorKind};
use tracing::{debug, instrument, warn};

/// Checks that a field survives a whitespace-split reload.
fn check_field(contact: &Contact, label: &str, value: &str) -> Result<(), PhoneError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(PhoneError::new(PhoneErrorKind::Format(format!(
            "{} of contact '{}' must be non-empty and contain no whitespace",
            label,
            contact.name()
        ))));
    }
    Ok(())
}

/// Serializes contacts into the file format.
///
/// # Errors
///
/// Returns a `Format` error naming the first contact whose name or phone
/// number is empty or contains whitespace. Nothing is produced in that case.
#[instrument(skip(contacts), fields(count = contacts.len()))]
pub fn encode_contacts(contacts: &[Contact]) -> Result<String, PhoneError> {
    let mut out = String::new();
    for contact in contacts {
        check_field(contact, "name", contact.name())?;
        check_field(contact, "phone number", contact.phone_number())?;
        out.push_str(contact.name());
        out.push(' ');
        out.push_str(contact.phone_number());
        out.push('\n');
    }
    debug!(bytes = out.len(), "Contacts encoded");
    Ok(out)
}

/// Parses contacts from the file format.
///
/// A trailing token without a partner is dropped.
#[instrument(skip(text))]
pub fn decode_contacts(text: &str) -> Vec<Contact> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let pairs = tokens.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        warn!(token = %dangling, "Ignoring unpaired trailing token in contacts file");
    }
    let contacts: Vec<Contact> = pairs
        .map(|pair| Contact::new(pair[0], pair[1]))
        .collect();
    debug!(count = contacts.len(), "Contacts decoded");
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_one_line_per_contact() {
        let contacts = vec![Contact::new("Alice", "111"), Contact::new("Bob", "222")];
        let text = encode_contacts(&contacts).expect("Valid contacts");
        assert_eq!(text, "Alice 111\nBob 222\n");
    }

    #[test]
    fn test_encode_rejects_whitespace_in_name() {
        let contacts = vec![Contact::new("Alice Smith", "111")];
        let err = encode_contacts(&contacts).expect_err("Name has a space");
        assert!(matches!(err.kind(), PhoneErrorKind::Format(_)));
    }

    #[test]
    fn test_encode_rejects_empty_phone_number() {
        let contacts = vec![Contact::new("Alice", "")];
        assert!(encode_contacts(&contacts).is_err());
    }

    #[test]
    fn test_decode_ignores_extra_whitespace() {
        let contacts = decode_contacts("  Alice   111\n\n\tBob 222  \n");
        let pairs: Vec<_> = contacts
            .iter()
            .map(|c| (c.name().as_str(), c.phone_number().as_str()))
            .collect();
        assert_eq!(pairs, vec![("Alice", "111"), ("Bob", "222")]);
    }

    #[test]
    fn test_decode_drops_dangling_token() {
        let contacts = decode_contacts("Alice 111\nBob\n");
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name(), "Alice");
    }

    #[test]
    fn test_decode_empty_text() {
        assert!(decode_contacts("").is_empty());
    }
}
