use super::Error;

/// Error when an entry point is called without a required argument.
#[derive(Debug)]
pub(super) struct MissingArgumentError {
    operation: &'static str,
    argument: &'static str,
}

impl std::error::Error for MissingArgumentError {}

impl core::fmt::Display for MissingArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}(): `{}` is required", self.operation, self.argument)
    }
}

impl Error {
    /// Creates a missing argument error naming the operation and the
    /// argument that was not supplied.
    pub fn missing_argument(operation: &'static str, argument: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingArgument(MissingArgumentError {
            operation,
            argument,
        }))
    }

    /// Returns `true` if this error is a missing argument error.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingArgument(_))
    }
}
