//! Node implementation for the path value trie.
//!
//! Each node represents one code point of a key path. Unlike a classic trie
//! node it carries a ranked list of payloads whether or not a key ends here.

use super::ranked_list::RankedList;
use super::value::Value;

/// A node in the path value trie.
#[derive(Debug)]
pub struct TrieNode<V> {
    /// Code point on the edge into this node (`'\0'` for the root)
    pub symbol: char,

    /// Children sorted ascending by `symbol`, without duplicates
    pub children: Vec<TrieNode<V>>,

    /// Best payloads among all keys sharing this node's prefix
    pub values: RankedList<V>,
}

impl<V: Value> TrieNode<V> {
    /// Creates a childless node for `symbol` retaining at most `max_len` values.
    pub fn new(symbol: char, max_len: usize) -> Self {
        Self {
            symbol,
            children: Vec::new(),
            values: RankedList::new(max_len),
        }
    }

    /// Finds the child reached through `symbol`.
    pub fn child(&self, symbol: char) -> Option<&TrieNode<V>> {
        self.children
            .binary_search_by_key(&symbol, |child| child.symbol)
            .ok()
            .map(|idx| &self.children[idx])
    }

    /// Finds the child reached through `symbol`, creating it at its sorted
    /// position if missing. The flag is `true` when a node was created.
    pub fn child_or_insert(&mut self, symbol: char, max_len: usize) -> (&mut TrieNode<V>, bool) {
        match self
            .children
            .binary_search_by_key(&symbol, |child| child.symbol)
        {
            Ok(idx) => (&mut self.children[idx], false),
            Err(idx) => {
                self.children.insert(idx, TrieNode::new(symbol, max_len));
                (&mut self.children[idx], true)
            }
        }
    }
}
