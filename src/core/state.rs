//! The game-state envelope the core reads, and terminal results.
//!
//! Game data itself (`G`) is opaque: the reducer produces it, the enumerator
//! interprets it, and this crate only passes it along. The two fields the
//! core does read live in [`Ctx`]: the game-over indicator and the ordered
//! list of players currently eligible to act.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Multiple winners (team games, shared victory).
    Winners(Vec<PlayerId>),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// Check if the game ended in a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

/// Contextual metadata around the opaque game data.
///
/// Produced and owned by the reducer; the core only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ctx {
    /// Players currently eligible to act, in order. The first entry is
    /// "the" acting player for single-actor decisions. Non-empty until the
    /// game is over.
    pub action_players: Vec<PlayerId>,

    /// Terminal result; `None` while the game continues.
    pub gameover: Option<GameResult>,

    /// Number of players the reducer was configured for.
    pub num_players: usize,
}

impl Ctx {
    /// Create a non-terminal context with the given acting players.
    #[must_use]
    pub fn new(num_players: usize, action_players: Vec<PlayerId>) -> Self {
        Self {
            action_players,
            gameover: None,
            num_players,
        }
    }

    /// The first acting player, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.action_players.first().copied()
    }

    /// True when the game is over or nobody may act.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.gameover.is_some() || self.action_players.is_empty()
    }
}

/// A full game state: opaque game data plus its context envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState<G> {
    /// Opaque game data, produced and interpreted by the game.
    pub g: G,

    /// Contextual metadata the core reads.
    pub ctx: Ctx,
}

impl<G> GameState<G> {
    /// Wrap game data in a context envelope.
    #[must_use]
    pub fn new(g: G, ctx: Ctx) -> Self {
        Self { g, ctx }
    }
}
