//! # turnwise
//!
//! Automated players for turn-based games driven by a pluggable reducer.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: the core never inspects game data. Games supply a
//!    reducer (state transition) and a legal-move enumerator via the `Game`
//!    trait; the core only reads the `ctx` envelope around the opaque state.
//!
//! 2. **Replayable**: a seeded bot threads its PRNG state through every draw
//!    as plain data (`GameRngState`), so a match can be serialized between
//!    decisions and resumed with an identical random stream.
//!
//! 3. **One Tree Per Decision**: the MCTS bot builds a fresh arena-backed
//!    search tree for every `play` call and returns it as diagnostic
//!    metadata; nothing persists across decisions except the RNG chain.
//!
//! ## Modules
//!
//! - `core`: player IDs, state envelope, game results, deterministic RNG
//! - `game`: the `Game` trait (reducer + enumerator) games implement
//! - `bots`: the `Bot` capability and the uniform-random bot
//! - `mcts`: the MCTS/UCT bot, its arena tree and configuration
//! - `harness`: `step` / `simulate` match drivers
//! - `games`: built-in demo game used by tests and benches

pub mod core;
pub mod game;
pub mod error;
pub mod bots;
pub mod mcts;
pub mod harness;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Ctx, GameResult, GameRng, GameRngState, GameState, PlayerId, RngChain,
};

pub use crate::game::{Game, Mover};

pub use crate::error::Error;

pub use crate::bots::{Bot, Decision, RandomBot};

pub use crate::mcts::{MctsBot, MctsConfig, Node, NodeId, SearchTree, TreeStats};

pub use crate::harness::{simulate, step, Bots, StepOutcome};
