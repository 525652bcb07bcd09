//! Unified error type for textel operations.
//!
//! Every fallible operation in the crate returns [`Error`]. The variants
//! carry enough context for a precise message; [`Error::category`] collapses
//! them onto the fixed set of user-facing categories the command protocol
//! reports, so callers never have to match on individual variants.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// User-facing failure categories.
///
/// The REPL renders one banner per category. Every [`Error`] variant maps
/// onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The first token is not a recognized command name.
    Command,
    /// Wrong argument count for a recognized command.
    Syntax,
    /// A grid-dependent command was issued before any successful initialize.
    Empty,
    /// A coordinate, dimension, or paint-value token failed to decode.
    Value,
    /// A coordinate lies outside the current image extent.
    Bounds,
    /// A two-endpoint command had its first endpoint past the second.
    Interval,
    /// The save target fails the quoting/length rule.
    Filename,
    /// The persistence write failed for an environmental reason.
    File,
}

impl Category {
    /// Stable lowercase name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Syntax => "syntax",
            Self::Empty => "empty",
            Self::Value => "value",
            Self::Bounds => "bounds",
            Self::Interval => "interval",
            Self::Filename => "filename",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Main error type for textel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The first token is not a recognized command name.
    #[error("'{0}' is not a recognized command")]
    UnknownCommand(String),

    /// A recognized command received the wrong number of arguments.
    #[error("'{command}' takes {expected} argument(s), got {found}")]
    BadArity {
        /// The command letter.
        command: char,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments actually supplied.
        found: usize,
    },

    /// A grid-dependent operation was attempted on an uninitialized image.
    #[error("no image has been initialized")]
    Uninitialized,

    /// A token that should be an integer did not parse as one.
    #[error("'{0}' is not a valid integer")]
    BadInteger(String),

    /// An image dimension lies outside the supported range.
    #[error("image dimension {0} is outside the supported range")]
    BadDimension(i64),

    /// A paint value is not exactly one single-column character.
    #[error("'{0}' is not a single-column character")]
    BadPaintValue(String),

    /// A user coordinate can address no cell in any image.
    #[error("coordinate {0} cannot address any image cell")]
    CoordinateOutOfRange(i64),

    /// A position lies outside the current image extent.
    #[error("position ({col}, {row}) is outside the {columns}x{rows} image")]
    OutOfBounds {
        /// Offending column index (zero-indexed).
        col: u16,
        /// Offending row index (zero-indexed).
        row: u16,
        /// Current image width.
        columns: u16,
        /// Current image height.
        rows: u16,
    },

    /// A segment or rectangle had its endpoints reversed.
    #[error("interval start {start} is greater than end {end}")]
    BadInterval {
        /// First endpoint (zero-indexed).
        start: u16,
        /// Second endpoint (zero-indexed).
        end: u16,
    },

    /// The save target fails the quoting/length rule.
    #[error("'{0}' is not a usable file name")]
    BadFilename(String),

    /// The persistence write failed.
    #[error("failed to write '{path}': {source}")]
    File {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The user-facing category this error reports as.
    pub fn category(&self) -> Category {
        match self {
            Self::UnknownCommand(_) => Category::Command,
            Self::BadArity { .. } => Category::Syntax,
            Self::Uninitialized => Category::Empty,
            Self::BadInteger(_) | Self::BadDimension(_) | Self::BadPaintValue(_) => Category::Value,
            Self::CoordinateOutOfRange(_) | Self::OutOfBounds { .. } => Category::Bounds,
            Self::BadInterval { .. } => Category::Interval,
            Self::BadFilename(_) => Category::Filename,
            Self::File { .. } => Category::File,
        }
    }
}
