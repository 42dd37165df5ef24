use super::Error;

/// Error when a record has neither an explicit id nor values for all of its
/// identifier attributes.
///
/// Identifiers are never synthesized, so the record cannot be serialized.
#[derive(Debug)]
pub(super) struct MissingIdentifierError {
    type_name: Box<str>,
}

impl std::error::Error for MissingIdentifierError {}

impl core::fmt::Display for MissingIdentifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record of type `{}` has no identifier", self.type_name)
    }
}

impl Error {
    /// Creates a missing identifier error for a record of the given type.
    pub fn missing_identifier(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentifier(MissingIdentifierError {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identifier error.
    pub fn is_missing_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentifier(_))
    }
}
