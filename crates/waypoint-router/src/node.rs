//! Trie nodes

use crate::data::MatchData;
use smallvec::SmallVec;
use std::fmt;

/// Child slot key
///
/// The wildcard slot is its own variant, so a literal segment can never be
/// mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Key {
    Literal(String),
    Wildcard,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Literal(segment) => f.write_str(segment),
            Key::Wildcard => f.write_str("*"),
        }
    }
}

/// Registration stored on the node a pattern ends at
pub(crate) struct Terminal<T> {
    /// Pattern string exactly as registered
    pub route: String,
    /// Wildcard variable names, left to right
    pub vars: SmallVec<[String; 4]>,
    pub data: MatchData<T>,
    /// Registration sequence number (lower wins ties)
    pub order: u64,
}

/// Trie node
///
/// Children keep insertion order; listing and the tree dump depend on it.
pub(crate) struct Node<T> {
    pub children: Vec<(Key, Node<T>)>,
    pub terminal: Option<Terminal<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            terminal: None,
        }
    }
}

impl<T> Node<T> {
    pub fn literal_position(&self, segment: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|(key, _)| matches!(key, Key::Literal(s) if s == segment))
    }

    pub fn wildcard_position(&self) -> Option<usize> {
        self.children
            .iter()
            .position(|(key, _)| *key == Key::Wildcard)
    }

    pub fn literal(&self, segment: &str) -> Option<&Node<T>> {
        self.literal_position(segment).map(|i| &self.children[i].1)
    }

    pub fn wildcard(&self) -> Option<&Node<T>> {
        self.wildcard_position().map(|i| &self.children[i].1)
    }

    /// Child under `key`, created at the end of the child list if absent
    pub fn child_or_insert(&mut self, key: Key) -> &mut Node<T> {
        let index = match self.children.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.children.push((key, Node::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    /// No registration and no children: safe to detach from the parent
    pub fn is_prunable(&self) -> bool {
        self.terminal.is_none() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_or_insert_keeps_order() {
        let mut node: Node<()> = Node::default();
        node.child_or_insert(Key::Literal("b".into()));
        node.child_or_insert(Key::Wildcard);
        node.child_or_insert(Key::Literal("a".into()));
        node.child_or_insert(Key::Literal("b".into()));

        let keys: Vec<String> = node.children.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "*", "a"]);
    }

    #[test]
    fn test_literal_star_is_not_wildcard() {
        let mut node: Node<()> = Node::default();
        node.child_or_insert(Key::Literal("*".into()));

        assert!(node.wildcard().is_none());
        assert!(node.literal("*").is_some());
    }

    #[test]
    fn test_is_prunable() {
        let mut node: Node<()> = Node::default();
        assert!(node.is_prunable());

        node.child_or_insert(Key::Wildcard);
        assert!(!node.is_prunable());
    }
}
