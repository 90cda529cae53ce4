//! The `Game` trait: the reducer and move enumerator games implement.
//!
//! Games implement [`Game`] to define their rules:
//! - How moves transform state (`apply`, the reducer)
//! - What moves are legal for a player (`enumerate`)
//!
//! The core treats both as opaque oracles. A `Game` value is constructed for
//! a fixed player count, so the reducer arrives pre-bound and never needs
//! reconfiguring per call.

use std::fmt::Debug;

use crate::core::{GameState, PlayerId};

/// A move that can name the player who makes it.
///
/// Result attribution during backpropagation scores a move against the
/// player who took it, so every move type must expose its mover.
pub trait Mover {
    /// The player taking this move.
    fn player(&self) -> PlayerId;
}

/// Rules trait games implement: a deterministic reducer plus a legal-move
/// enumerator.
///
/// ## Implementation Notes
///
/// - `apply`: must be pure and deterministic over legal moves - MCTS
///   replays it thousands of times per decision
/// - `enumerate`: must be deterministic given the state; return an empty
///   vec when the player cannot act (a terminal state in particular)
pub trait Game {
    /// Opaque game data owned by the reducer.
    type G: Clone + Debug;

    /// The game's move type.
    type Move: Mover + Clone + PartialEq + Debug;

    /// Apply a move to a state, producing the next state.
    fn apply(&self, state: &GameState<Self::G>, mv: &Self::Move) -> GameState<Self::G>;

    /// Enumerate the legal moves for a player, in a stable order.
    fn enumerate(&self, state: &GameState<Self::G>, player: PlayerId) -> Vec<Self::Move>;
}
