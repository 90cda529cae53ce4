//! Built-in games.
//!
//! Small complete `Game` implementations used by the integration tests and
//! benchmarks, and as reference implementations for game authors.

pub mod tictactoe;

pub use tictactoe::{Board, Place, TicTacToe};
