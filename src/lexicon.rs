//! Token lexicon: token store, aggregate statistics and the prefix-trie index.
//!
//! A [`Lexicon`] is a passive, thread-safe structure. Mutations take an
//! exclusive write lock; lookups share a read lock and may run in parallel.
//!
//! # Examples
//!
//! ```
//! use segdict::lexicon::Lexicon;
//! use segdict::token::Token;
//!
//! let lexicon = Lexicon::new();
//! lexicon.insert(Token::new("中", 5)).unwrap();
//! lexicon.insert(Token::new("中国", 10)).unwrap();
//!
//! let matches = lexicon.lookup_str("中国人民").unwrap();
//! let texts: Vec<String> = matches.iter().map(|m| m.text()).collect();
//! assert_eq!(texts, vec!["中", "中国"]);
//! ```

pub mod config;
pub mod matches;
pub mod store;

pub use config::LexiconConfig;
pub use matches::{MatchBuffer, TokenMatch};
pub use store::TokenStore;

use std::sync::Arc;

use log::{debug, trace, warn};
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};
use crate::token::{Symbol, Token, TokenId};
use crate::trie::{MapTrie, PrefixTrie};

/// Snapshot of the lexicon's bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconStats {
    pub token_count: usize,
    pub total_frequency: u64,
    pub max_token_length: usize,
    pub trie_entries: usize,
    pub store_slots: usize,
    pub free_slots: usize,
}

#[derive(Debug)]
struct LexiconState<T> {
    trie: T,
    store: TokenStore,
    max_token_length: usize,
    total_frequency: u64,
    closed: bool,
}

impl<T: PrefixTrie> LexiconState<T> {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(LexiconError::Closed);
        }
        Ok(())
    }

    fn insert(&mut self, token: Token) -> Result<()> {
        if token.is_empty() {
            return Err(LexiconError::EmptyToken);
        }

        let key = token.key();
        if self.trie.get(&key).is_some() {
            trace!("token {token} already present, skipping");
            return Ok(());
        }

        let length = token.len();
        let total_frequency = self
            .total_frequency
            .checked_add(token.frequency())
            .ok_or_else(|| LexiconError::other("total frequency overflow"))?;

        let token = Arc::new(token);
        let id = self.store.insert(token.clone())?;
        if let Err(e) = self.trie.insert(&key, id) {
            self.store.remove(id);
            return Err(e);
        }

        self.total_frequency = total_frequency;
        if length > self.max_token_length {
            self.max_token_length = length;
        }
        debug!("inserted token {token} as {id}");
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) {
        let Some(id) = self.trie.delete(key) else {
            trace!("no token with key {key:?}, nothing to remove");
            return;
        };
        let Some(token) = self.store.remove(id) else {
            warn!("trie entry {id} had no stored token");
            return;
        };

        self.total_frequency -= token.frequency();
        if token.len() >= self.max_token_length {
            self.max_token_length = self.store.max_token_length();
            debug!(
                "removed longest token {token}, max token length is now {}",
                self.max_token_length
            );
        } else {
            debug!("removed token {token} ({id})");
        }
    }

    fn walk<S: Symbol>(&self, symbols: &[S], out: &mut MatchBuffer) -> Result<usize> {
        out.clear();
        let mut scratch = [0u8; 4];
        let mut state = self.trie.root();

        for (consumed, symbol) in symbols.iter().enumerate() {
            state = match self.trie.step(state, symbol.encode(&mut scratch)) {
                Some(next) => next,
                None => break,
            };
            let Some(id) = self.trie.value(state) else {
                continue;
            };
            if let Some(token) = self.store.get(id) {
                if let Err(e) = out.push(TokenMatch::new(id, token.clone(), consumed + 1)) {
                    warn!("prefix lookup overflowed a buffer of {} matches", out.capacity());
                    return Err(e);
                }
            }
        }
        Ok(out.len())
    }

    fn close(&mut self) {
        self.trie.clear();
        self.store.clear();
        self.max_token_length = 0;
        self.total_frequency = 0;
        self.closed = true;
    }
}

/// A set of weighted tokens indexed by a prefix trie.
#[derive(Debug)]
pub struct Lexicon<T: PrefixTrie = MapTrie> {
    config: LexiconConfig,
    state: RwLock<LexiconState<T>>,
}

impl Lexicon<MapTrie> {
    /// Create an empty lexicon with the default configuration.
    pub fn new() -> Self {
        Self::build(MapTrie::new(), LexiconConfig::default())
    }

    /// Create an empty lexicon from a validated configuration.
    pub fn with_config(config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        let trie = MapTrie::with_capacity(config.initial_capacity);
        Ok(Self::build(trie, config))
    }
}

impl Default for Lexicon<MapTrie> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrefixTrie> Lexicon<T> {
    /// Create an empty lexicon on top of a caller-supplied trie engine.
    ///
    /// The engine must be empty: identifiers it already holds would not
    /// refer to anything in the new token store.
    pub fn with_trie(trie: T, config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        if !trie.is_empty() {
            return Err(LexiconError::trie("trie engine must be empty"));
        }
        Ok(Self::build(trie, config))
    }

    fn build(trie: T, config: LexiconConfig) -> Self {
        let store = TokenStore::with_capacity(config.initial_capacity);
        Lexicon {
            config,
            state: RwLock::new(LexiconState {
                trie,
                store,
                max_token_length: 0,
                total_frequency: 0,
                closed: false,
            }),
        }
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Add a token. Adding a token whose key is already present changes
    /// nothing, not even the stored frequency.
    pub fn insert(&self, token: Token) -> Result<()> {
        let mut state = self.state.write();
        state.ensure_open()?;
        state.insert(token)
    }

    /// Add many tokens under a single write lock. Stops at the first error;
    /// tokens inserted before it stay.
    pub fn extend<I>(&self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut state = self.state.write();
        state.ensure_open()?;
        tokens.into_iter().try_for_each(|token| state.insert(token))
    }

    /// Remove the token with the same symbols as `token`.
    ///
    /// The stored frequency is subtracted from the total, whatever frequency
    /// `token` carries. Unknown tokens are ignored.
    pub fn remove(&self, token: &Token) -> Result<()> {
        self.remove_key(&token.key())
    }

    /// Remove the token spelled `text`. Unknown tokens are ignored.
    pub fn remove_text(&self, text: &str) -> Result<()> {
        self.remove_key(text.as_bytes())
    }

    fn remove_key(&self, key: &[u8]) -> Result<()> {
        let mut state = self.state.write();
        state.ensure_open()?;
        state.remove(key);
        Ok(())
    }

    /// Find every stored token that is a prefix of `symbols`, shortest first.
    ///
    /// `out` is cleared, then filled. The walk stops at the first symbol with
    /// no transition. Returns the number of matches, or `CapacityExceeded`
    /// if `out` cannot hold them all, in which case `out` keeps the matches
    /// that fit.
    pub fn lookup_into<S: Symbol>(&self, symbols: &[S], out: &mut MatchBuffer) -> Result<usize> {
        let state = self.state.read();
        state.ensure_open()?;
        state.walk(symbols, out)
    }

    /// Allocating form of [`Lexicon::lookup_into`].
    pub fn lookup<S: Symbol>(&self, symbols: &[S]) -> Result<Vec<TokenMatch>> {
        let mut out = MatchBuffer::with_capacity(self.lookup_capacity(symbols.len()));
        self.lookup_into(symbols, &mut out)?;
        Ok(out.into_vec())
    }

    /// Prefix lookup with one symbol per character of `text`.
    pub fn lookup_str(&self, text: &str) -> Result<Vec<TokenMatch>> {
        let symbols: Vec<char> = text.chars().collect();
        self.lookup(&symbols)
    }

    /// Prefix matches for every start position of `symbols`.
    ///
    /// Entry `i` holds what [`Lexicon::lookup`] returns for `&symbols[i..]`.
    /// Long inputs are split across the rayon pool; all positions see the
    /// same lexicon contents.
    pub fn scan<S: Symbol + Sync>(&self, symbols: &[S]) -> Result<Vec<Vec<TokenMatch>>> {
        let guard = self.state.read();
        guard.ensure_open()?;
        let state: &LexiconState<T> = &guard;

        let scan_at = |start: usize| -> Result<Vec<TokenMatch>> {
            let rest = &symbols[start..];
            let mut out = MatchBuffer::with_capacity(self.lookup_capacity(rest.len()));
            state.walk(rest, &mut out)?;
            Ok(out.into_vec())
        };

        if symbols.len() >= self.config.parallel_scan_threshold {
            (0..symbols.len()).into_par_iter().map(scan_at).collect()
        } else {
            (0..symbols.len()).map(scan_at).collect()
        }
    }

    fn lookup_capacity(&self, input_len: usize) -> usize {
        self.config.max_lookup_matches.unwrap_or(input_len)
    }

    /// Exact lookup by spelling.
    pub fn get(&self, text: &str) -> Option<Arc<Token>> {
        let state = self.state.read();
        let id = state.trie.get(text.as_bytes())?;
        state.store.get(id).cloned()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    pub fn frequency(&self, text: &str) -> Option<u64> {
        self.get(text).map(|token| token.frequency())
    }

    /// Share of the total frequency held by `text`; 0 for unknown tokens or
    /// an empty lexicon.
    pub fn probability(&self, text: &str) -> f64 {
        let state = self.state.read();
        if state.total_frequency == 0 {
            return 0.0;
        }
        match state.trie.get(text.as_bytes()).and_then(|id| state.store.get(id)) {
            Some(token) => token.frequency() as f64 / state.total_frequency as f64,
            None => 0.0,
        }
    }

    /// Token behind a previously issued identifier, if it is still live.
    pub fn resolve(&self, id: TokenId) -> Option<Arc<Token>> {
        self.state.read().store.get(id).cloned()
    }

    /// All live tokens, in store order.
    pub fn tokens(&self) -> Vec<Arc<Token>> {
        self.state
            .read()
            .store
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    /// Number of live tokens.
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_frequency(&self) -> u64 {
        self.state.read().total_frequency
    }

    /// Length, in symbols, of the longest live token.
    pub fn max_token_length(&self) -> usize {
        self.state.read().max_token_length
    }

    pub fn stats(&self) -> LexiconStats {
        let state = self.state.read();
        LexiconStats {
            token_count: state.store.len(),
            total_frequency: state.total_frequency,
            max_token_length: state.max_token_length,
            trie_entries: state.trie.len(),
            store_slots: state.store.slot_count(),
            free_slots: state.store.free_count(),
        }
    }

    /// Release the trie and the token store. Every later mutation or lookup
    /// fails with `Closed`; accessors report an empty lexicon.
    pub fn close(&self) {
        let mut state = self.state.write();
        if !state.closed {
            state.close();
            debug!("lexicon closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(matches: &[TokenMatch]) -> Vec<String> {
        matches.iter().map(TokenMatch::text).collect()
    }

    fn sample_lexicon() -> Lexicon {
        let lexicon = Lexicon::new();
        lexicon.insert(Token::new("中", 5)).unwrap();
        lexicon.insert(Token::new("中国", 10)).unwrap();
        lexicon.insert(Token::new("中国人", 3)).unwrap();
        lexicon
    }

    #[test]
    fn test_new_lexicon_is_empty() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.total_frequency(), 0);
        assert_eq!(lexicon.max_token_length(), 0);
        assert_eq!(lexicon.stats(), LexiconStats::default());
    }

    #[test]
    fn test_insert_updates_aggregates() {
        let lexicon = sample_lexicon();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.total_frequency(), 18);
        assert_eq!(lexicon.max_token_length(), 3);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let lexicon = sample_lexicon();
        lexicon.insert(Token::new("中国", 99)).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.total_frequency(), 18);
        assert_eq!(lexicon.max_token_length(), 3);
        assert_eq!(lexicon.frequency("中国"), Some(10));
    }

    #[test]
    fn test_duplicate_by_key_across_symbol_boundaries() {
        let lexicon = Lexicon::new();
        lexicon.insert(Token::from_symbols(["ab"], 1)).unwrap();
        lexicon.insert(Token::from_symbols(["a", "b"], 2)).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get("ab").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_token_rejected() {
        let lexicon = Lexicon::new();
        let err = lexicon.insert(Token::new("", 1)).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyToken));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_lookup_returns_prefixes_in_order() {
        let lexicon = sample_lexicon();
        let matches = lexicon.lookup_str("中国人民").unwrap();
        assert_eq!(texts(&matches), vec!["中", "中国", "中国人"]);
        assert_eq!(matches[1].frequency(), 10);
        assert_eq!(matches[2].len(), 3);
    }

    #[test]
    fn test_lookup_no_match() {
        let lexicon = sample_lexicon();
        assert!(lexicon.lookup_str("人民").unwrap().is_empty());
        assert!(lexicon.lookup_str("").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_stops_at_broken_prefix() {
        let lexicon = Lexicon::new();
        lexicon.insert(Token::new("ab", 1)).unwrap();
        lexicon.insert(Token::new("abcd", 1)).unwrap();

        assert_eq!(texts(&lexicon.lookup_str("abxd").unwrap()), vec!["ab"]);
        assert_eq!(texts(&lexicon.lookup_str("abcd").unwrap()), vec!["ab", "abcd"]);
    }

    #[test]
    fn test_lookup_with_multichar_symbols() {
        let lexicon = Lexicon::new();
        lexicon
            .insert(Token::from_symbols(["hello", "世界"], 4))
            .unwrap();
        lexicon.insert(Token::from_symbols(["hello"], 2)).unwrap();

        let matches = lexicon.lookup(&["hello", "世界", "!"]).unwrap();
        assert_eq!(texts(&matches), vec!["hello", "hello世界"]);

        // Matching is by bytes, so input symbols may split a stored symbol.
        let matches = lexicon.lookup(&["hel", "lo"]).unwrap();
        assert_eq!(texts(&matches), vec!["hello"]);
        assert_eq!(matches[0].len(), 2);
    }

    #[test]
    fn test_match_length_counts_input_symbols() {
        let lexicon = Lexicon::new();
        lexicon.insert(Token::from_symbols(["x", "y"], 1)).unwrap();
        lexicon.insert(Token::from_symbols(["xyz"], 1)).unwrap();

        for matches in [
            lexicon.lookup(&["x", "y", "z"]).unwrap(),
            lexicon.lookup_str("xyz").unwrap(),
        ] {
            assert_eq!(texts(&matches), vec!["xy", "xyz"]);
            let lengths: Vec<usize> = matches.iter().map(TokenMatch::len).collect();
            assert_eq!(lengths, vec![2, 3]);
            assert_eq!(matches[1].token().len(), 1);
        }

        let matches = lexicon.lookup(&["xy", "z"]).unwrap();
        let lengths: Vec<usize> = matches.iter().map(TokenMatch::len).collect();
        assert_eq!(lengths, vec![1, 2]);
    }

    #[test]
    fn test_deserialized_token_lengths() {
        let lexicon = Lexicon::new();
        let token: Token =
            serde_json::from_str(r#"{"symbols":["a",""],"frequency":1}"#).unwrap();
        lexicon.insert(token).unwrap();

        assert_eq!(lexicon.max_token_length(), 1);
        let matches = lexicon.lookup_str("a").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].len(), 1);
    }

    #[test]
    fn test_lookup_into_reports_overflow() {
        let lexicon = sample_lexicon();
        let symbols: Vec<char> = "中国人民".chars().collect();

        let mut out = MatchBuffer::with_capacity(2);
        let err = lexicon.lookup_into(&symbols, &mut out).unwrap_err();
        assert!(matches!(err, LexiconError::CapacityExceeded { capacity: 2 }));
        assert_eq!(texts(out.as_slice()), vec!["中", "中国"]);

        let mut out = MatchBuffer::with_capacity(3);
        assert_eq!(lexicon.lookup_into(&symbols, &mut out).unwrap(), 3);
    }

    #[test]
    fn test_lookup_capacity_from_config() {
        let config = LexiconConfig {
            max_lookup_matches: Some(1),
            ..LexiconConfig::default()
        };
        let lexicon = Lexicon::with_config(config).unwrap();
        lexicon.insert(Token::new("a", 1)).unwrap();
        lexicon.insert(Token::new("ab", 1)).unwrap();

        assert!(matches!(
            lexicon.lookup_str("ab"),
            Err(LexiconError::CapacityExceeded { capacity: 1 })
        ));
        assert_eq!(lexicon.lookup_str("ax").unwrap().len(), 1);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = LexiconConfig {
            max_lookup_matches: Some(0),
            ..LexiconConfig::default()
        };
        assert!(matches!(
            Lexicon::with_config(config),
            Err(LexiconError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_with_trie_requires_empty_engine() {
        let mut trie = MapTrie::new();
        trie.insert(b"a", TokenId::new(0, 0)).unwrap();
        assert!(Lexicon::with_trie(trie, LexiconConfig::default()).is_err());

        let lexicon = Lexicon::with_trie(MapTrie::new(), LexiconConfig::default()).unwrap();
        lexicon.insert(Token::new("a", 1)).unwrap();
        assert!(lexicon.contains("a"));
    }

    #[test]
    fn test_remove_scenarios() {
        let lexicon = sample_lexicon();

        lexicon.remove(&Token::new("中国", 10)).unwrap();
        assert_eq!(texts(&lexicon.lookup_str("中国人民").unwrap()), vec!["中", "中国人"]);
        assert_eq!(lexicon.max_token_length(), 3);
        assert_eq!(lexicon.total_frequency(), 8);

        lexicon.remove(&Token::new("中国人", 3)).unwrap();
        assert_eq!(lexicon.max_token_length(), 1);
        assert_eq!(lexicon.len(), 1);

        lexicon.remove_text("中").unwrap();
        assert_eq!(lexicon.max_token_length(), 0);
        assert_eq!(lexicon.total_frequency(), 0);
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let lexicon = sample_lexicon();
        let before = lexicon.stats();
        lexicon.remove(&Token::new("日本", 7)).unwrap();
        lexicon.remove_text("中国人民").unwrap();
        assert_eq!(lexicon.stats(), before);
    }

    #[test]
    fn test_remove_uses_stored_frequency() {
        let lexicon = sample_lexicon();
        lexicon.remove(&Token::new("中国", 1)).unwrap();
        assert_eq!(lexicon.total_frequency(), 8);
    }

    #[test]
    fn test_remove_shorter_token_keeps_max() {
        let lexicon = Lexicon::new();
        lexicon.insert(Token::new("abc", 1)).unwrap();
        lexicon.insert(Token::new("xyz", 1)).unwrap();
        lexicon.insert(Token::new("a", 1)).unwrap();

        lexicon.remove_text("a").unwrap();
        assert_eq!(lexicon.max_token_length(), 3);

        // Another token still has the maximum length.
        lexicon.remove_text("abc").unwrap();
        assert_eq!(lexicon.max_token_length(), 3);
    }

    #[test]
    fn test_identifiers_survive_other_removals() {
        let lexicon = sample_lexicon();
        let matches = lexicon.lookup_str("中国人").unwrap();
        let id_zhong = matches[0].id();
        let id_zhongguo = matches[1].id();
        let id_zhongguoren = matches[2].id();

        lexicon.remove_text("中").unwrap();
        assert!(lexicon.resolve(id_zhong).is_none());
        assert_eq!(lexicon.resolve(id_zhongguo).unwrap().text(), "中国");
        assert_eq!(lexicon.resolve(id_zhongguoren).unwrap().text(), "中国人");

        // The freed slot is reused under a new identifier.
        lexicon.insert(Token::new("日本", 2)).unwrap();
        assert!(lexicon.resolve(id_zhong).is_none());
        let lookup = lexicon.lookup_str("中国人").unwrap();
        assert_eq!(lookup[0].id(), id_zhongguo);
        assert_eq!(lookup[1].id(), id_zhongguoren);
    }

    #[test]
    fn test_exact_lookup_and_probability() {
        let lexicon = sample_lexicon();
        assert!(lexicon.contains("中国"));
        assert!(!lexicon.contains("国"));
        assert_eq!(lexicon.frequency("中国人"), Some(3));
        assert_eq!(lexicon.frequency("日本"), None);
        assert!((lexicon.probability("中") - 5.0 / 18.0).abs() < 1e-12);
        assert_eq!(lexicon.probability("日本"), 0.0);
        assert_eq!(Lexicon::new().probability("中"), 0.0);
    }

    #[test]
    fn test_tokens_snapshot() {
        let lexicon = sample_lexicon();
        lexicon.remove_text("中国").unwrap();
        let mut all: Vec<String> = lexicon.tokens().iter().map(|t| t.text()).collect();
        all.sort();
        assert_eq!(all, vec!["中", "中国人"]);
    }

    #[test]
    fn test_extend() {
        let lexicon = Lexicon::new();
        lexicon
            .extend(vec![
                Token::new("a", 1),
                Token::new("ab", 2),
                Token::new("a", 7),
            ])
            .unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.total_frequency(), 3);

        let err = lexicon
            .extend(vec![Token::new("b", 1), Token::new("", 1), Token::new("c", 1)])
            .unwrap_err();
        assert!(matches!(err, LexiconError::EmptyToken));
        assert!(lexicon.contains("b"));
        assert!(!lexicon.contains("c"));
    }

    #[test]
    fn test_scan_matches_per_position_lookup() {
        let lexicon = sample_lexicon();
        lexicon.insert(Token::new("国人", 2)).unwrap();
        lexicon.insert(Token::new("人民", 4)).unwrap();

        let symbols: Vec<char> = "中国人民".chars().collect();
        let scanned = lexicon.scan(&symbols).unwrap();
        assert_eq!(scanned.len(), 4);
        for (i, matches) in scanned.iter().enumerate() {
            assert_eq!(matches, &lexicon.lookup(&symbols[i..]).unwrap());
        }
        assert_eq!(texts(&scanned[1]), vec!["国人"]);
        assert_eq!(texts(&scanned[2]), vec!["人民"]);
        assert!(scanned[3].is_empty());
    }

    #[test]
    fn test_scan_parallel_path() {
        let config = LexiconConfig {
            parallel_scan_threshold: 1,
            ..LexiconConfig::default()
        };
        let lexicon = Lexicon::with_config(config).unwrap();
        lexicon.insert(Token::new("ab", 1)).unwrap();
        lexicon.insert(Token::new("b", 1)).unwrap();

        let scanned = lexicon.scan(&['a', 'b', 'a', 'b']).unwrap();
        assert_eq!(texts(&scanned[0]), vec!["ab"]);
        assert_eq!(texts(&scanned[1]), vec!["b"]);
        assert_eq!(texts(&scanned[2]), vec!["ab"]);
        assert_eq!(texts(&scanned[3]), vec!["b"]);
    }

    #[test]
    fn test_close() {
        let lexicon = sample_lexicon();
        let held = lexicon.lookup_str("中国").unwrap();
        lexicon.close();
        lexicon.close();

        assert!(lexicon.is_closed());
        assert_eq!(lexicon.len(), 0);
        assert_eq!(lexicon.total_frequency(), 0);
        assert_eq!(lexicon.max_token_length(), 0);
        assert!(lexicon.get("中").is_none());
        assert!(matches!(lexicon.insert(Token::new("a", 1)), Err(LexiconError::Closed)));
        assert!(matches!(lexicon.remove_text("中"), Err(LexiconError::Closed)));
        assert!(matches!(lexicon.lookup_str("中国"), Err(LexiconError::Closed)));
        assert!(matches!(lexicon.scan(&['中']), Err(LexiconError::Closed)));

        // Matches taken before teardown still hold their tokens.
        assert_eq!(held[1].text(), "中国");
    }
}
