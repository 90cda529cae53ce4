//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<Node>` with index-based references for efficiency and
//! cache-friendliness. The tree is built fresh for every decision and
//! returned to the caller as diagnostic metadata.

use crate::game::Game;

use super::node::{Node, NodeId};

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// The root is always node 0.
#[derive(Clone, Debug)]
pub struct SearchTree<G: Game> {
    /// All nodes in the tree.
    nodes: Vec<Node<G>>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl<G: Game> SearchTree<G> {
    /// Create a new tree with the given root node.
    pub fn new(root: Node<G>) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(root);
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: Node<G>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &Node<G> {
        self.get(self.root)
    }

    /// Get the root node mutably.
    pub fn root_node_mut(&mut self) -> &mut Node<G> {
        self.get_mut(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<G>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// The most-visited root child.
    ///
    /// Ties keep the earliest-created child: the comparison uses strict
    /// greater-than, so a later child with an equal visit count never
    /// displaces an earlier one. (`Iterator::max_by_key` keeps the last
    /// maximum, which is why this is a manual scan.)
    #[must_use]
    pub fn robust_child(&self) -> Option<NodeId> {
        let root = self.root_node();
        let mut best = *root.children.first()?;
        let mut best_visits = self.get(best).visits;

        for &child in &root.children[1..] {
            let visits = self.get(child).visits;
            if visits > best_visits {
                best = child;
                best_visits = visits;
            }
        }

        Some(best)
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let unexplored_moves: usize = self.nodes.iter().map(|n| n.untried.len()).sum();
        let child_links: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            unexplored_moves,
            child_links,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Moves still unexplored across all nodes.
    pub unexplored_moves: usize,

    /// Parent-child links (equals `node_count - 1` in a well-formed tree).
    pub child_links: usize,
}
