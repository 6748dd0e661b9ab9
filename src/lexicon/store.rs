//! Generational slot arena holding the live tokens.

use std::sync::Arc;

use crate::error::{LexiconError, Result};
use crate::token::{Token, TokenId};

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    token: Option<Arc<Token>>,
}

/// Token storage with identifiers that survive unrelated removals.
///
/// Removal empties a slot and advances its generation instead of compacting
/// the vector, so no other identifier moves. A slot whose generation is
/// exhausted is retired and never handed out again.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenStore {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store a token and return its new identifier.
    pub fn insert(&mut self, token: Arc<Token>) -> Result<TokenId> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| LexiconError::other("token store exhausted"))?;
                self.slots.push(Slot::default());
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.token = Some(token);
        self.live += 1;
        Ok(TokenId::new(index, slot.generation))
    }

    /// Remove the token behind `id`. Stale or unknown identifiers yield `None`.
    pub fn remove(&mut self, id: TokenId) -> Option<Arc<Token>> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        let token = slot.token.take()?;
        self.live -= 1;

        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(id.index());
        }
        Some(token)
    }

    pub fn get(&self, id: TokenId) -> Option<&Arc<Token>> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.token.as_ref()
    }

    /// Live tokens in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Arc<Token>)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.token
                .as_ref()
                .map(|token| (TokenId::new(index as u32, slot.generation), token))
        })
    }

    /// Longest live token, by symbol count. Linear in the number of slots.
    pub fn max_token_length(&self) -> usize {
        self.iter().map(|(_, token)| token.len()).max().unwrap_or(0)
    }

    /// Number of live tokens.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocated slots, live or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slots waiting to be reused.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = Vec::new();
        self.live = 0;
    }
}
