//! Errors raised while constructing the target model.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeInfoError {
    /// The string is not a well-formed `[@repo]//package:name` label.
    InvalidLabel { label: String, reason: &'static str },
    /// The string does not name any known rule kind.
    UnknownKind(String),
    /// `build()` was called before a label was set.
    MissingLabel,
}

impl fmt::Display for IdeInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeInfoError::InvalidLabel { label, reason } => {
                write!(f, "Invalid label '{}': {}", label, reason)
            }
            IdeInfoError::UnknownKind(kind) => write!(f, "Unknown rule kind '{}'", kind),
            IdeInfoError::MissingLabel => write!(f, "Target has no label"),
        }
    }
}

impl std::error::Error for IdeInfoError {}

pub type Result<T, E = IdeInfoError> = std::result::Result<T, E>;
