//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (`NodeId`): parent
//! links are plain indices, child lists are owned index collections, so the
//! tree needs no manual lifetime management.

use smallvec::SmallVec;

use crate::core::GameState;
use crate::game::Game;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// Each node owns a distinct state snapshot produced by the reducer, the
/// ordered list of moves not yet explored from it, and the children created
/// so far (insertion order = exploration order).
#[derive(Clone, Debug)]
pub struct Node<G: Game> {
    /// The game state at this point in the tree.
    pub state: GameState<G::G>,

    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The move that produced this node from its parent (`None` for the root).
    pub parent_action: Option<G::Move>,

    /// Legal moves not yet expanded from this node, in enumeration order.
    /// Shrinks by exactly one element per expansion.
    pub untried: Vec<G::Move>,

    /// Children created so far, one per expanded move.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,

    /// Simulations that passed through this node.
    pub visits: u32,

    /// Accumulated simulation-outcome credit (at most 1 per simulation).
    pub value: f64,

    /// Depth in the tree (root = 0). Diagnostic only.
    pub depth: u16,
}

impl<G: Game> Node<G> {
    /// Create a new node.
    pub fn new(
        state: GameState<G::G>,
        parent: NodeId,
        parent_action: Option<G::Move>,
        untried: Vec<G::Move>,
        depth: u16,
    ) -> Self {
        Self {
            state,
            parent,
            parent_action,
            untried,
            children: SmallVec::new(),
            visits: 0,
            value: 0.0,
            depth,
        }
    }

    /// Create a root node.
    pub fn root(state: GameState<G::G>, untried: Vec<G::Move>) -> Self {
        Self::new(state, NodeId::NONE, None, untried, 0)
    }

    /// Check if this node is the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node's state is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.ctx.gameover.is_some()
    }

    /// Mean simulation credit per visit (0 before any visit).
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ctx, GameResult, PlayerId};

    // Minimal move/game pair for node-level tests.
    #[derive(Clone, Debug, PartialEq)]
    struct Mv(PlayerId);

    impl crate::game::Mover for Mv {
        fn player(&self) -> PlayerId {
            self.0
        }
    }

    #[derive(Clone, Debug)]
    struct Noop;

    impl Game for Noop {
        type G = ();
        type Move = Mv;

        fn apply(&self, state: &GameState<()>, _mv: &Mv) -> GameState<()> {
            state.clone()
        }

        fn enumerate(&self, _state: &GameState<()>, player: PlayerId) -> Vec<Mv> {
            vec![Mv(player)]
        }
    }

    fn state(gameover: Option<GameResult>) -> GameState<()> {
        let mut ctx = Ctx::new(2, vec![PlayerId::new(0)]);
        ctx.gameover = gameover;
        GameState::new((), ctx)
    }

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node: Node<Noop> = Node::root(state(None), vec![Mv(PlayerId::new(0))]);

        assert!(node.is_root());
        assert!(node.parent_action.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.visits, 0);
        assert_eq!(node.value, 0.0);
        assert_eq!(node.untried.len(), 1);
        assert!(node.children.is_empty());
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_node_terminal() {
        let node: Node<Noop> = Node::root(state(Some(GameResult::Draw)), vec![]);
        assert!(node.is_terminal());
    }

    #[test]
    fn test_mean_value() {
        let mut node: Node<Noop> = Node::root(state(None), vec![]);
        assert_eq!(node.mean_value(), 0.0);

        node.visits = 4;
        node.value = 3.0;
        assert_eq!(node.mean_value(), 0.75);
    }
}
