//! Uniform-random bot.

use crate::core::{GameState, PlayerId, RngChain};
use crate::error::Error;
use crate::game::Game;

use super::{Bot, Decision};

/// A bot that picks uniformly among its legal moves.
///
/// Seeded instances are fully reproducible: the RNG state is threaded
/// through every draw, so two bots with the same seed driven through the
/// same states produce identical move sequences.
#[derive(Clone, Debug)]
pub struct RandomBot<G: Game> {
    game: G,
    player: PlayerId,
    rng: RngChain,
}

impl<G: Game> RandomBot<G> {
    /// Create a non-deterministic random bot for a player.
    #[must_use]
    pub fn new(game: G, player: PlayerId) -> Self {
        Self {
            game,
            player,
            rng: RngChain::unseeded(),
        }
    }

    /// Seed the bot, making its choices reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RngChain::seeded(seed);
        self
    }

    /// The player this bot acts for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The bot's PRNG chain (for checkpointing between decisions).
    #[must_use]
    pub fn rng(&self) -> &RngChain {
        &self.rng
    }
}

impl<G: Game> Bot<G> for RandomBot<G> {
    fn play(&mut self, state: &GameState<G::G>) -> Result<Decision<G>, Error> {
        let moves = self.game.enumerate(state, self.player);
        let action = self
            .rng
            .choose(&moves)
            .ok_or(Error::NoLegalMoves {
                player: self.player,
            })?
            .clone();

        Ok(Decision { action, tree: None })
    }
}
