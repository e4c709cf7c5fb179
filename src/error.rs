//! Error types for caller-supplied input.
//!
//! Formatting and edit handling never fail. These errors only come from the
//! typed constructors that check a selection before it reaches the core.

use std::fmt;

/// Errors raised when constructing a selection from untrusted offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The selection start lies after its end.
    InvertedSelection {
        /// The requested start offset.
        start: usize,
        /// The requested end offset.
        end: usize,
    },

    /// The selection extends past the end of the value it indexes.
    SelectionOutOfBounds {
        /// The requested end offset.
        end: usize,
        /// Length of the value in characters.
        length: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedSelection { start, end } => {
                write!(
                    f,
                    "selection start {} is after selection end {}",
                    start, end
                )
            }

            Self::SelectionOutOfBounds { end, length } => {
                write!(
                    f,
                    "selection end {} is past the end of a {}-character value",
                    end, length
                )
            }
        }
    }
}

impl std::error::Error for InputError {}
