//! Error types for the turnwise crate.

use thiserror::Error;

use crate::core::PlayerId;

/// Main error type for the turnwise crate.
///
/// Every operation here is a pure, synchronous computation: failure is
/// immediate and terminal for the current decision. There is no retry or
/// pass-move substitution.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The enumerator returned no legal moves for a player who must act.
    #[error("no legal moves for {player}")]
    NoLegalMoves { player: PlayerId },

    /// MCTS `play` was invoked on a state that produced no root children
    /// (already terminal, or zero legal actions).
    #[error("search produced no candidate moves: root state is terminal or has no legal actions")]
    NoCandidates,

    /// The harness needed a bot for the acting player but none was registered.
    #[error("no bot registered for {player}")]
    MissingBot { player: PlayerId },

    /// A playout reached a state with no game-over result and no acting
    /// players; the game can make no further progress.
    #[error("state has no acting players and no game-over result")]
    Stalled,
}
