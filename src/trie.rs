//! Prefix-trie capability consumed by the lexicon.
//!
//! The lexicon only needs exact get/insert/delete on byte keys plus
//! incremental navigation (`step` from a state, `value` of a state). Any
//! engine offering those five operations can back a [`crate::lexicon::Lexicon`].

pub mod map_trie;

pub use map_trie::MapTrie;

use crate::error::Result;
use crate::token::TokenId;

/// A byte-keyed trie mapping keys to token identifiers.
pub trait PrefixTrie: Send + Sync {
    /// Navigation handle; only meaningful for the trie that produced it and
    /// only until the next mutation.
    type State: Copy + Send + Sync;

    /// State for the empty prefix.
    fn root(&self) -> Self::State;

    /// Exact lookup.
    fn get(&self, key: &[u8]) -> Option<TokenId>;

    /// Map `key` to `id`, replacing any previous value.
    ///
    /// Fails on an empty key or when the engine cannot allocate more states.
    fn insert(&mut self, key: &[u8], id: TokenId) -> Result<()>;

    /// Remove `key`, returning the identifier it mapped to.
    fn delete(&mut self, key: &[u8]) -> Option<TokenId>;

    /// Follow every byte of `symbol` from `state`. `None` if any byte has no
    /// transition.
    fn step(&self, state: Self::State, symbol: &[u8]) -> Option<Self::State>;

    /// Identifier stored at `state`, if the state ends a complete key.
    fn value(&self, state: Self::State) -> Option<TokenId>;

    /// Number of stored keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every key and release node storage.
    fn clear(&mut self);
}
