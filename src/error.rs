//! Device error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in a device operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PhoneErrorKind {
    /// A strategy slot (calculator or game) is empty.
    #[display("No {} installed", _0)]
    ConfigurationMissing(&'static str),

    /// No contact with the given name exists.
    #[display("Contact not found: {}", _0)]
    NotFound(String),

    /// The contacts file could not be opened, read or written.
    #[display("I/O failure: {}", _0)]
    Io(String),

    /// A contact cannot be represented in the contacts file format.
    #[display("Invalid contact record: {}", _0)]
    Format(String),
}

/// Device error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct PhoneError {
    /// Error kind.
    pub kind: PhoneErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PhoneError {
    /// Creates a new device error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: PhoneErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &PhoneErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_recorded() {
        let err = PhoneError::new(PhoneErrorKind::NotFound("Zed".to_string()));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = PhoneError::new(PhoneErrorKind::ConfigurationMissing("calculator"));
        assert!(err.to_string().starts_with("No calculator installed at "));
    }
}
