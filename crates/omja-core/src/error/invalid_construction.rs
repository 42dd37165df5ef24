use super::Error;

/// Error when a mapper or translator cannot be constructed.
///
/// This occurs when:
/// - The requested adapter name is not recognized
/// - The base URL is empty or does not parse as an absolute URL
#[derive(Debug)]
pub(super) struct InvalidConstructionError {
    message: Box<str>,
}

impl std::error::Error for InvalidConstructionError {}

impl core::fmt::Display for InvalidConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid construction: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid construction error.
    pub fn invalid_construction(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConstruction(
            InvalidConstructionError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid construction error.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConstruction(_))
    }
}
