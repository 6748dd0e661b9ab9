//! # segdict
//!
//! A trie-backed token lexicon for dictionary-driven word segmentation.
//!
//! ## Features
//!
//! - Weighted tokens with stable identifiers
//! - Prefix lookup that walks the trie one input symbol at a time
//! - Concurrent lookups under a reader/writer lock
//! - Pluggable prefix-trie engines
//! - Whole-input scans on the rayon pool

pub mod error;
pub mod lexicon;
pub mod token;
pub mod trie;

pub mod prelude {
    pub use crate::error::{LexiconError, Result};
    pub use crate::lexicon::{Lexicon, LexiconConfig, LexiconStats, MatchBuffer, TokenMatch};
    pub use crate::token::{Symbol, Token, TokenId};
    pub use crate::trie::{MapTrie, PrefixTrie};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
