//! Error types for controller construction.
//!
//! A malformed configuration description is a programmer/integration fault:
//! construction fails and no controller instance exists. Game-domain
//! outcomes (loss, rejected food proposals) are never represented here;
//! they travel through the score and food channels as ordinary messages.

use std::error::Error;
use std::fmt;

/// Errors from parsing the textual configuration description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The description ended before the named field was read.
    UnexpectedEnd {
        /// Which field was being read.
        expected: &'static str,
    },
    /// A structural marker (`W`, `F` or `S`) was not the expected one.
    BadMarker {
        expected: char,
        found: String,
    },
    /// A numeric field did not parse as an integer.
    BadNumber {
        /// Which field was being read.
        field: &'static str,
        found: String,
    },
    /// The direction character was not one of `U`, `D`, `L`, `R`.
    BadDirection {
        found: String,
    },
    /// The declared body length was zero or negative.
    BadLength {
        found: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "configuration ended while reading {expected}")
            }
            Self::BadMarker { expected, found } => {
                write!(f, "expected marker '{expected}', found '{found}'")
            }
            Self::BadNumber { field, found } => {
                write!(f, "field {field} is not an integer: '{found}'")
            }
            Self::BadDirection { found } => {
                write!(f, "unrecognized direction character: '{found}'")
            }
            Self::BadLength { found } => {
                write!(f, "body length must be positive, got {found}")
            }
        }
    }
}

impl Error for ConfigError {}
