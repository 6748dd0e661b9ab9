//! Tokens, their stable identifiers and the symbol encoding used as trie keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a stored token.
///
/// An identifier pairs a store slot with the generation the slot had when the
/// token was inserted. Removing the token bumps the generation, so an old
/// identifier never resolves to whatever token later occupies the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    index: u32,
    generation: u32,
}

impl TokenId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        TokenId { index, generation }
    }

    /// Slot index inside the token store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot this identifier was issued for.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A dictionary entry: a sequence of symbols plus a frequency weight.
///
/// A symbol is usually a single character, but segmenters also treat runs of
/// latin letters or digits as one symbol, so tokens keep the symbol
/// boundaries they were built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TokenRepr")]
pub struct Token {
    symbols: Vec<String>,
    frequency: u64,
}

/// Serialized form of a [`Token`]; deserialization goes through
/// [`Token::from_symbols`] so empty symbols are dropped.
#[derive(Deserialize)]
struct TokenRepr {
    symbols: Vec<String>,
    frequency: u64,
}

impl From<TokenRepr> for Token {
    fn from(repr: TokenRepr) -> Self {
        Token::from_symbols(repr.symbols, repr.frequency)
    }
}

impl Token {
    /// Create a token with one symbol per character of `text`.
    pub fn new<S: AsRef<str>>(text: S, frequency: u64) -> Self {
        Token {
            symbols: text.as_ref().chars().map(String::from).collect(),
            frequency,
        }
    }

    /// Create a token from pre-split symbols. Empty symbols are dropped.
    pub fn from_symbols<I, S>(symbols: I, frequency: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Token {
            symbols: symbols
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
            frequency,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The token spelled out as a single string.
    pub fn text(&self) -> String {
        self.symbols.concat()
    }

    /// Trie key: the UTF-8 bytes of all symbols, concatenated.
    pub fn key(&self) -> Vec<u8> {
        self.symbols.concat().into_bytes()
    }

    /// Path weight derived from frequency: `log2(total) - log2(frequency)`.
    ///
    /// Rare tokens get long distances. Returns infinity when either count is 0.
    pub fn distance(&self, total_frequency: u64) -> f64 {
        if self.frequency == 0 || total_frequency == 0 {
            return f64::INFINITY;
        }
        (total_frequency as f64).log2() - (self.frequency as f64).log2()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// An input unit that can be fed to a prefix walk.
///
/// `encode` returns the bytes one trie step must consume. `char` needs the
/// scratch buffer for its UTF-8 form; byte and string types ignore it.
pub trait Symbol {
    fn encode<'a>(&'a self, scratch: &'a mut [u8; 4]) -> &'a [u8];
}

impl Symbol for char {
    fn encode<'a>(&'a self, scratch: &'a mut [u8; 4]) -> &'a [u8] {
        self.encode_utf8(scratch).as_bytes()
    }
}

impl Symbol for str {
    fn encode<'a>(&'a self, _scratch: &'a mut [u8; 4]) -> &'a [u8] {
        self.as_bytes()
    }
}

impl Symbol for String {
    fn encode<'a>(&'a self, _scratch: &'a mut [u8; 4]) -> &'a [u8] {
        self.as_bytes()
    }
}

impl Symbol for [u8] {
    fn encode<'a>(&'a self, _scratch: &'a mut [u8; 4]) -> &'a [u8] {
        self
    }
}

impl Symbol for Vec<u8> {
    fn encode<'a>(&'a self, _scratch: &'a mut [u8; 4]) -> &'a [u8] {
        self
    }
}

impl<T: Symbol + ?Sized> Symbol for &T {
    fn encode<'a>(&'a self, scratch: &'a mut [u8; 4]) -> &'a [u8] {
        (**self).encode(scratch)
    }
}
