//! Error taxonomy for the menu core.
//!
//! Deliberately small: indexing outside valid bounds, terminal I/O
//! failures, and failures raised by bound commands. Malformed interactive
//! input is NOT an error — the loop treats it as a silent no-op.

use std::fmt;
use std::io;

use crate::element::CommandError;

/// Errors surfaced by the menu model and its interaction loop.
#[derive(Debug)]
pub enum MenuError {
    /// An element or page was requested by a 1-based index outside
    /// `1..=len`. Surfaced to the caller, never recovered internally.
    OutOfRange {
        /// The index that was asked for.
        index: usize,
        /// Number of items actually present.
        len: usize,
    },

    /// The terminal boundary failed to read or write.
    Io(io::Error),

    /// A bound command failed during dispatch. Never swallowed — the
    /// caller embedding the command owns its error handling.
    Command(CommandError),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::OutOfRange { index, len } => {
                write!(f, "index {} out of range (valid: 1..={})", index, len)
            }
            MenuError::Io(e) => write!(f, "terminal I/O failed: {}", e),
            MenuError::Command(e) => write!(f, "bound command failed: {}", e),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::OutOfRange { .. } => None,
            MenuError::Io(e) => Some(e),
            MenuError::Command(e) => Some(e.as_ref()),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        MenuError::Io(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_index_and_bounds() {
        let err = MenuError::OutOfRange { index: 7, len: 3 };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains("1..=3"));
    }

    #[test]
    fn io_errors_convert_and_chain() {
        let err: MenuError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, MenuError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn command_errors_keep_their_message() {
        let inner: CommandError = "command exploded".into();
        let err = MenuError::Command(inner);
        assert!(err.to_string().contains("exploded"));
    }
}
