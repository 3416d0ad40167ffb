//! Error type for the iterator-style scanning surface.

use thiserror::Error;

use crate::Fault;

/// A recoverable scan failure.
///
/// Exhaustion is not an error here: [`ScannerState::next_parameter`]
/// returns `None` instead. Both variants leave the scanner positioned past
/// the offending argument, so iteration can simply continue.
///
/// [`ScannerState::next_parameter`]: crate::ScannerState::next_parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// An option required a following value argument, but the sequence ended.
    #[error("missing value for `{raw}` (argument {index})")]
    MissingValue { index: usize, raw: String },
    /// No lexical rule matched the argument.
    #[error("unrecognized parameter `{raw}` (argument {index})")]
    Unrecognized { index: usize, raw: String },
}

impl ScanError {
    /// The fault recorded on the scanner for this error.
    pub fn fault(&self) -> Fault {
        match self {
            Self::MissingValue { .. } => Fault::NoValueAvailable,
            Self::Unrecognized { .. } => Fault::NoMatch,
        }
    }

    /// Index of the argument that triggered the error.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingValue { index, .. } | Self::Unrecognized { index, .. } => *index,
        }
    }

    /// Raw text of the argument that triggered the error.
    pub fn raw(&self) -> &str {
        match self {
            Self::MissingValue { raw, .. } | Self::Unrecognized { raw, .. } => raw,
        }
    }
}
