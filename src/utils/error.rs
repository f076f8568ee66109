//! Error handling for texiconv
//!
//! Conversions themselves never fail: every converter is total over its
//! input and reports lossy output through flags or log records. The only
//! fallible operations are registry mutations.

use thiserror::Error;

/// Registry mutation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Command names must contain at least one character
    #[error("command name must not be empty")]
    EmptyName,
    /// The user-defined id range is exhausted
    #[error("too many user-defined commands (limit {limit})")]
    TooManyCommands { limit: usize },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
