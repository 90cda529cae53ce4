//! Simulation harness: drive a game one ply forward or to completion.
//!
//! Both entry points consult the acting player's bot and apply its move
//! through the game's reducer. The harness never inspects game data; it only
//! reads the `ctx` envelope to decide whose turn it is and whether the game
//! is over.

use rustc_hash::FxHashMap;

use crate::bots::Bot;
use crate::core::{GameState, PlayerId};
use crate::error::Error;
use crate::game::Game;
use crate::mcts::SearchTree;

/// Bot table for a match: one bot per player.
pub type Bots<G> = FxHashMap<PlayerId, Box<dyn Bot<G>>>;

/// The state after a step (or a whole match), plus the metadata of the last
/// bot decision taken (`None` if no step ran).
#[derive(Debug)]
pub struct StepOutcome<G: Game> {
    /// The resulting state.
    pub state: GameState<G::G>,

    /// Diagnostic metadata from the deciding bot (the MCTS bot returns its
    /// search tree; the random bot returns nothing).
    pub metadata: Option<SearchTree<G>>,
}

/// Advance the game one ply.
///
/// If the state is non-terminal and has an acting player, that player's bot
/// chooses a move and the reducer applies it. Already-terminal states (or
/// states with no acting players) come back unchanged with no metadata.
///
/// # Errors
///
/// Fails when no bot is registered for the acting player, or when the bot
/// itself fails to produce a move.
pub fn step<G: Game>(
    game: &G,
    bots: &mut Bots<G>,
    state: &GameState<G::G>,
) -> Result<StepOutcome<G>, Error> {
    if state.ctx.is_over() {
        return Ok(StepOutcome {
            state: state.clone(),
            metadata: None,
        });
    }

    // is_over() guarantees an acting player here.
    let player = state.ctx.current_player().ok_or(Error::Stalled)?;
    let bot = bots.get_mut(&player).ok_or(Error::MissingBot { player })?;

    let decision = bot.play(state)?;
    let next = game.apply(state, &decision.action);

    Ok(StepOutcome {
        state: next,
        metadata: decision.tree,
    })
}

/// Run the game to completion.
///
/// Identical single-step logic, looped until the state is terminal or no
/// acting players remain. The returned metadata comes from the last step
/// taken (`None` if zero steps ran).
///
/// # Errors
///
/// Propagates the first [`step`] failure.
pub fn simulate<G: Game>(
    game: &G,
    bots: &mut Bots<G>,
    state: &GameState<G::G>,
) -> Result<StepOutcome<G>, Error> {
    let mut current = state.clone();
    let mut metadata = None;

    while !current.ctx.is_over() {
        let outcome = step(game, bots, &current)?;
        current = outcome.state;
        metadata = outcome.metadata;
    }

    Ok(StepOutcome {
        state: current,
        metadata,
    })
}
