//! Error types for the segdict library.
//!
//! All fallible lexicon operations return [`LexiconError`]. Duplicate
//! insertions, removals of unknown tokens and dead-end prefix walks are not
//! errors; they are resolved inside the lexicon.
//!
//! # Examples
//!
//! ```
//! use segdict::error::{LexiconError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiconError::invalid_config("max_lookup_matches must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for lexicon operations.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A lookup produced more matches than the output buffer can hold.
    #[error("Capacity exceeded: lookup buffer holds at most {capacity} matches")]
    CapacityExceeded { capacity: usize },

    /// A token with no symbols cannot be stored.
    #[error("Empty token: a token needs at least one symbol")]
    EmptyToken,

    /// The prefix-trie engine rejected an operation.
    #[error("Trie error: {0}")]
    Trie(String),

    /// The lexicon has been torn down with `close`.
    #[error("Lexicon is closed")]
    Closed,

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexiconError.
pub type Result<T> = std::result::Result<T, LexiconError>;

impl LexiconError {
    /// Create a new capacity error.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        LexiconError::CapacityExceeded { capacity }
    }

    /// Create a new trie error.
    pub fn trie<S: Into<String>>(msg: S) -> Self {
        LexiconError::Trie(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexiconError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiconError::Other(msg.into())
    }
}
