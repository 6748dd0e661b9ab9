//! Hash-map-of-children trie backed by a node arena.

use ahash::AHashMap;

use crate::error::{LexiconError, Result};
use crate::token::TokenId;
use crate::trie::PrefixTrie;

/// Index of a node in the arena. Node 0 is the root.
pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: AHashMap<u8, NodeId>,
    value: Option<TokenId>,
}

impl Node {
    fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

/// A mutable byte trie whose nodes live in a `Vec`.
///
/// Deleting a key prunes the nodes that no longer lead anywhere and keeps
/// their slots on a free list for later insertions.
#[derive(Debug, Clone)]
pub struct MapTrie {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    len: usize,
}

impl MapTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        MapTrie {
            nodes: vec![Node::default()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty trie with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::default());
        MapTrie {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Nodes currently reachable from the root, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    fn alloc(&mut self) -> Result<NodeId> {
        if let Some(id) = self.free.pop() {
            return Ok(id);
        }
        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| LexiconError::trie("node space exhausted"))?;
        self.nodes.push(Node::default());
        Ok(id)
    }

    /// Walk `path` (pairs of parent node and edge byte) backwards, detaching
    /// vacant nodes until one is still in use.
    fn prune(&mut self, path: &[(NodeId, u8)], mut node: NodeId) {
        for &(parent, byte) in path.iter().rev() {
            if node == ROOT || !self.nodes[node as usize].is_vacant() {
                break;
            }
            self.nodes[parent as usize].children.remove(&byte);
            self.nodes[node as usize] = Node::default();
            self.free.push(node);
            node = parent;
        }
    }
}

impl Default for MapTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie for MapTrie {
    type State = NodeId;

    fn root(&self) -> NodeId {
        ROOT
    }

    fn get(&self, key: &[u8]) -> Option<TokenId> {
        if key.is_empty() {
            return None;
        }
        let state = self.step(ROOT, key)?;
        self.value(state)
    }

    fn insert(&mut self, key: &[u8], id: TokenId) -> Result<()> {
        if key.is_empty() {
            return Err(LexiconError::trie("cannot insert an empty key"));
        }

        let mut path = Vec::with_capacity(key.len());
        let mut node = ROOT;
        for &byte in key {
            let existing = self.nodes[node as usize].children.get(&byte).copied();
            let next = match existing {
                Some(child) => child,
                None => match self.alloc() {
                    Ok(child) => {
                        self.nodes[node as usize].children.insert(byte, child);
                        child
                    }
                    Err(e) => {
                        self.prune(&path, node);
                        return Err(e);
                    }
                },
            };
            path.push((node, byte));
            node = next;
        }

        if self.nodes[node as usize].value.replace(id).is_none() {
            self.len += 1;
        }
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Option<TokenId> {
        if key.is_empty() {
            return None;
        }

        let mut path = Vec::with_capacity(key.len());
        let mut node = ROOT;
        for &byte in key {
            let next = *self.nodes[node as usize].children.get(&byte)?;
            path.push((node, byte));
            node = next;
        }

        let id = self.nodes[node as usize].value.take()?;
        self.len -= 1;
        self.prune(&path, node);
        Some(id)
    }

    fn step(&self, state: NodeId, symbol: &[u8]) -> Option<NodeId> {
        if symbol.is_empty() {
            return None;
        }
        let mut node = state;
        for byte in symbol {
            node = *self.nodes.get(node as usize)?.children.get(byte)?;
        }
        Some(node)
    }

    fn value(&self, state: NodeId) -> Option<TokenId> {
        self.nodes.get(state as usize)?.value
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes = vec![Node::default()];
        self.free = Vec::new();
        self.len = 0;
    }
}
