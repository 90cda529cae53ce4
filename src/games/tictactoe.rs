//! Classic 3x3 tic-tac-toe as a `Game` implementation.
//!
//! Two players alternate placing marks; three in a row wins, a full board
//! draws. Small enough that MCTS converges quickly, which makes it the
//! workhorse of the integration tests and benches.

use serde::{Deserialize, Serialize};

use crate::core::{Ctx, GameResult, GameState, PlayerId};
use crate::game::{Game, Mover};

/// The eight winning lines: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 board; `None` cells are empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Option<PlayerId>; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self { cells: [None; 9] }
    }

    fn winner(&self) -> Option<PlayerId> {
        for line in LINES {
            if let Some(p) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(p) && self.cells[line[2]] == Some(p) {
                    return Some(p);
                }
            }
        }
        None
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// Place a mark on a cell (0-8, row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub player: PlayerId,
    pub cell: usize,
}

impl Mover for Place {
    fn player(&self) -> PlayerId {
        self.player
    }
}

/// The tic-tac-toe rules: a pure reducer plus a move enumerator.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// The opening state: empty board, player 0 to act.
    #[must_use]
    pub fn initial() -> GameState<Board> {
        GameState::new(Board::empty(), Ctx::new(2, vec![PlayerId::new(0)]))
    }
}

impl Game for TicTacToe {
    type G = Board;
    type Move = Place;

    fn apply(&self, state: &GameState<Board>, mv: &Place) -> GameState<Board> {
        let mut board = state.g.clone();
        board.cells[mv.cell] = Some(mv.player);

        let mut ctx = Ctx::new(state.ctx.num_players, vec![]);
        if let Some(winner) = board.winner() {
            ctx.gameover = Some(GameResult::Winner(winner));
        } else if board.is_full() {
            ctx.gameover = Some(GameResult::Draw);
        } else {
            ctx.action_players = vec![PlayerId::new(1 - mv.player.0)];
        }

        GameState::new(board, ctx)
    }

    fn enumerate(&self, state: &GameState<Board>, player: PlayerId) -> Vec<Place> {
        if state.ctx.gameover.is_some() || !state.ctx.action_players.contains(&player) {
            return vec![];
        }

        state
            .g
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(cell, _)| Place { player, cell })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_cells(cells: &[usize]) -> GameState<Board> {
        let game = TicTacToe;
        let mut state = TicTacToe::initial();
        for &cell in cells {
            let player = state.ctx.current_player().unwrap();
            state = game.apply(&state, &Place { player, cell });
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = TicTacToe::initial();
        assert_eq!(state.ctx.current_player(), Some(PlayerId::new(0)));
        assert!(state.ctx.gameover.is_none());
        assert_eq!(TicTacToe.enumerate(&state, PlayerId::new(0)).len(), 9);
    }

    #[test]
    fn test_turns_alternate() {
        let state = play_cells(&[4]);
        assert_eq!(state.ctx.current_player(), Some(PlayerId::new(1)));

        let state = play_cells(&[4, 0]);
        assert_eq!(state.ctx.current_player(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_enumerate_skips_taken_cells() {
        let state = play_cells(&[4, 0]);
        let moves = TicTacToe.enumerate(&state, PlayerId::new(0));

        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.cell != 4 && m.cell != 0));
    }

    #[test]
    fn test_enumerate_empty_for_waiting_player() {
        let state = TicTacToe::initial();
        assert!(TicTacToe.enumerate(&state, PlayerId::new(1)).is_empty());
    }

    #[test]
    fn test_row_win() {
        // P0: 0, 1, 2 across the top; P1 elsewhere.
        let state = play_cells(&[0, 3, 1, 4, 2]);

        assert_eq!(
            state.ctx.gameover,
            Some(GameResult::Winner(PlayerId::new(0)))
        );
        assert!(state.ctx.action_players.is_empty());
    }

    #[test]
    fn test_diagonal_win() {
        let state = play_cells(&[0, 1, 4, 2, 8]);
        assert_eq!(
            state.ctx.gameover,
            Some(GameResult::Winner(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_draw() {
        // A known drawn sequence filling all nine cells.
        let state = play_cells(&[0, 4, 8, 1, 7, 6, 2, 5, 3]);

        assert_eq!(state.ctx.gameover, Some(GameResult::Draw));
        assert!(state.ctx.action_players.is_empty());
    }

    #[test]
    fn test_terminal_enumeration_is_empty() {
        let state = play_cells(&[0, 3, 1, 4, 2]);
        assert!(TicTacToe.enumerate(&state, PlayerId::new(0)).is_empty());
        assert!(TicTacToe.enumerate(&state, PlayerId::new(1)).is_empty());
    }

    #[test]
    fn test_board_serialization() {
        let state = play_cells(&[4, 0]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState<Board> = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
