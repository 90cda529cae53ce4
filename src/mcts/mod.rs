//! Monte Carlo Tree Search with UCT selection.
//!
//! The bot builds a fresh arena-backed tree for every decision, runs a fixed
//! number of select/expand/playout/backpropagate iterations, and answers with
//! the most-visited root child (the "robust child"). Seeded instances are
//! bit-for-bit reproducible.

pub mod bot;
pub mod config;
pub mod node;
pub mod tree;

pub use bot::MctsBot;
pub use config::MctsConfig;
pub use node::{Node, NodeId};
pub use tree::{SearchTree, TreeStats};
