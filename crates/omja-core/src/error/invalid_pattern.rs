use super::Error;

/// Error when an attribute matcher pattern fails to compile.
#[derive(Debug)]
pub(super) struct InvalidPatternError {
    source: regex::Error,
}

impl std::error::Error for InvalidPatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid attribute pattern: {}", self.source)
    }
}

impl From<regex::Error> for Error {
    fn from(source: regex::Error) -> Error {
        Error::from(super::ErrorKind::InvalidPattern(InvalidPatternError {
            source,
        }))
    }
}

impl Error {
    /// Returns `true` if this error is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPattern(_))
    }
}
