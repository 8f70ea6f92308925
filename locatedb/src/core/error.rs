//! Error taxonomy for LOCATEDB decoding

use std::io;
use thiserror::Error;

/// Errors raised while decoding a LOCATEDB archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The header marker, version or flags are not supported. Only raised by
    /// the very first decode step.
    #[error("Incompatible archive: {0}")]
    IncompatibleFormat(String),

    /// A structural invariant of the format was violated.
    #[error("Corrupt archive: {0}")]
    CorruptArchive(String),

    #[error("Unexpected end of stream")]
    UnexpectedEndOfStream,

    /// The API was called out of order. The reader state is left untouched.
    #[error("Invalid usage: {0}")]
    InvalidUsage(&'static str),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl ArchiveError {
    /// Whether the error aborts the traversal. Only `InvalidUsage` is
    /// recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ArchiveError::InvalidUsage(_))
    }
}

impl From<io::Error> for ArchiveError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => ArchiveError::UnexpectedEndOfStream,
            _ => ArchiveError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_maps_to_unexpected_end() {
        let err: ArchiveError = io::Error::new(io::ErrorKind::UnexpectedEof, "short").into();
        assert!(matches!(err, ArchiveError::UnexpectedEndOfStream));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_other_io_errors_are_kept() {
        let err: ArchiveError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, ArchiveError::Io(_)));
    }

    #[test]
    fn test_invalid_usage_is_not_fatal() {
        assert!(!ArchiveError::InvalidUsage("skip").is_fatal());
        assert!(ArchiveError::CorruptArchive("x".into()).is_fatal());
    }
}
