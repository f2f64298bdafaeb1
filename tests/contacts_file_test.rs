//! Tests for saving and loading contacts.

use tempfile::{NamedTempFile, TempDir};

use strictly_phone::{Contact, Device, PhoneErrorKind, ScriptedRandom};

fn device() -> Device {
    Device::new(Box::new(ScriptedRandom::new([1])))
}

fn names_and_numbers(phone: &Device) -> Vec<(String, String)> {
    phone
        .contacts()
        .iter()
        .map(|c| (c.name().clone(), c.phone_number().clone()))
        .collect()
}

#[test]
fn test_round_trip_into_empty_device() {
    let file = NamedTempFile::new().expect("Failed to create temp file");

    let mut original = device();
    original.add_contact(Contact::new("Alice", "111"));
    original.add_contact(Contact::new("Bob", "222"));
    original.add_contact(Contact::new("Carol", "+1-555-0100"));
    original.send_message("Alice", "Bob", "hi").expect("Both exist");

    let saved = original.save_contacts_to_file(file.path()).expect("Save failed");
    assert_eq!(saved, 3);

    let mut restored = device();
    let loaded = restored.load_contacts_from_file(file.path()).expect("Load failed");
    assert_eq!(loaded, 3);
    assert_eq!(names_and_numbers(&restored), names_and_numbers(&original));

    // Histories are never persisted.
    assert!(restored.contacts().iter().all(|c| c.history().is_empty()));
}

#[test]
fn test_saved_file_format() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let mut phone = device();
    phone.add_contact(Contact::new("Alice", "111"));
    phone.add_contact(Contact::new("Bob", "222"));
    phone.save_contacts_to_file(file.path()).expect("Save failed");

    let text = std::fs::read_to_string(file.path()).expect("Read failed");
    assert_eq!(text, "Alice 111\nBob 222\n");
}

#[test]
fn test_load_appends_to_existing_contacts() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), "Bob 222\nCarol 333\n").expect("Write failed");

    let mut phone = device();
    phone.add_contact(Contact::new("Alice", "111"));
    phone.load_contacts_from_file(file.path()).expect("Load failed");

    let names: Vec<&str> = phone.contacts().iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_save_rejects_whitespace_and_leaves_file_untouched() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), "Keep 000\n").expect("Write failed");

    let mut phone = device();
    phone.add_contact(Contact::new("Alice", "111"));
    phone.add_contact(Contact::new("Bob Smith", "222"));

    let err = phone.save_contacts_to_file(file.path()).expect_err("Name has a space");
    assert!(matches!(err.kind(), PhoneErrorKind::Format(_)));

    let text = std::fs::read_to_string(file.path()).expect("Read failed");
    assert_eq!(text, "Keep 000\n");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut phone = device();
    phone.add_contact(Contact::new("Alice", "111"));

    let err = phone
        .load_contacts_from_file(dir.path().join("missing.txt"))
        .expect_err("File does not exist");
    assert!(matches!(err.kind(), PhoneErrorKind::Io(_)));
    assert_eq!(phone.contacts().len(), 1);
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let phone = device();
    let err = phone
        .save_contacts_to_file(dir.path().join("no/such/dir/contacts.txt"))
        .expect_err("Parent directory does not exist");
    assert!(matches!(err.kind(), PhoneErrorKind::Io(_)));
}

#[test]
fn test_io_errors_carry_context_and_origin() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut phone = device();

    let err = phone
        .load_contacts_from_file(dir.path().join("missing.txt"))
        .expect_err("File does not exist");
    match err.kind() {
        PhoneErrorKind::Io(message) => {
            assert!(message.starts_with("Failed to open the file for reading: "))
        }
        other => panic!("Expected Io, got {:?}", other),
    }
    assert!(err.file.ends_with("device.rs"));

    let err = phone
        .save_contacts_to_file(dir.path().join("no/such/dir/contacts.txt"))
        .expect_err("Parent directory does not exist");
    match err.kind() {
        PhoneErrorKind::Io(message) => {
            assert!(message.starts_with("Failed to open the file for writing: "))
        }
        other => panic!("Expected Io, got {:?}", other),
    }
    assert!(err.file.ends_with("device.rs"));
}
