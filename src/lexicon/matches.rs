//! Prefix lookup results.

use std::sync::Arc;

use crate::error::{LexiconError, Result};
use crate::token::{Token, TokenId};

/// One dictionary token found as a prefix of the input.
///
/// Holds its own reference to the token, so it stays valid after the
/// lexicon is mutated or closed.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    id: TokenId,
    token: Arc<Token>,
    consumed: usize,
}

impl TokenMatch {
    pub(crate) fn new(id: TokenId, token: Arc<Token>, consumed: usize) -> Self {
        TokenMatch {
            id,
            token,
            consumed,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn token(&self) -> &Arc<Token> {
        &self.token
    }

    pub fn text(&self) -> String {
        self.token.text()
    }

    pub fn frequency(&self) -> u64 {
        self.token.frequency()
    }

    /// Number of input symbols the match covers. This can differ from the
    /// token's own symbol count when the input splits text differently.
    pub fn len(&self) -> usize {
        self.consumed
    }

    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }
}

/// Fixed-capacity output buffer for prefix lookups.
///
/// Pushing past the capacity is an error rather than a silent truncation.
#[derive(Debug, Clone)]
pub struct MatchBuffer {
    matches: Vec<TokenMatch>,
    capacity: usize,
}

impl MatchBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchBuffer {
            matches: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, m: TokenMatch) -> Result<()> {
        if self.is_full() {
            return Err(LexiconError::capacity_exceeded(self.capacity));
        }
        self.matches.push(m);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.matches.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[TokenMatch] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenMatch> {
        self.matches.iter()
    }

    pub fn into_vec(self) -> Vec<TokenMatch> {
        self.matches
    }
}

impl<'a> IntoIterator for &'a MatchBuffer {
    type Item = &'a TokenMatch;
    type IntoIter = std::slice::Iter<'a, TokenMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
