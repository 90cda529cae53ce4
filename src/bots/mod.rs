//! The bot capability and its implementations.
//!
//! A bot holds a player identity and (optionally) a resumable PRNG chain,
//! and exposes a single capability: given a state, produce a move. Only two
//! concrete strategies exist - uniform-random and MCTS - so the seam is a
//! plain trait object rather than anything more open-ended.

pub mod random;

use crate::core::GameState;
use crate::error::Error;
use crate::game::Game;
use crate::mcts::SearchTree;

pub use random::RandomBot;

/// A bot's answer for one decision: the chosen move plus optional
/// diagnostic metadata.
#[derive(Debug)]
pub struct Decision<G: Game> {
    /// The chosen move.
    pub action: G::Move,

    /// The search tree that produced the move, for diagnostics.
    /// `None` for bots that do not search.
    pub tree: Option<SearchTree<G>>,
}

/// The move-selection capability.
pub trait Bot<G: Game> {
    /// Choose a move for the bot's player in the given state.
    ///
    /// # Errors
    ///
    /// Fails when no move can be produced - see [`Error`] for the taxonomy.
    /// Callers must not invoke `play` on a terminal state.
    fn play(&mut self, state: &GameState<G::G>) -> Result<Decision<G>, Error>;
}
