//! Core types: player identification, the game-state envelope, terminal
//! results, and deterministic RNG.

pub mod player;
pub mod rng;
pub mod state;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState, RngChain};
pub use state::{Ctx, GameResult, GameState};
