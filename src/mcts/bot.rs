//! The MCTS bot: select, expand, playout, backpropagate.

use crate::bots::{Bot, Decision};
use crate::core::{GameResult, GameState, PlayerId, RngChain};
use crate::error::Error;
use crate::game::{Game, Mover};

use super::config::MctsConfig;
use super::node::{Node, NodeId};
use super::tree::SearchTree;

/// A bot that searches with Monte Carlo Tree Search under UCT selection.
///
/// Every `play` call builds a fresh tree, runs exactly
/// `config.iterations` rounds of select/expand/playout/backpropagate, and
/// answers with the most-visited root child. The tree is returned as
/// diagnostic metadata. Seeded instances are bit-for-bit reproducible; the
/// PRNG state is threaded through the bot's [`RngChain`] so a match can be
/// checkpointed between decisions.
///
/// Turn handling is strictly-alternating: interior nodes aggregate the
/// moves of every player in `ctx.action_players`, but playouts consult only
/// the first entry each round. Games with genuinely simultaneous moves are
/// only partially modeled.
#[derive(Clone, Debug)]
pub struct MctsBot<G: Game> {
    game: G,
    player: PlayerId,
    config: MctsConfig,
    rng: RngChain,
}

impl<G: Game> MctsBot<G> {
    /// Create an MCTS bot with the default configuration (500 iterations,
    /// unseeded).
    #[must_use]
    pub fn new(game: G, player: PlayerId) -> Self {
        Self::with_config(game, player, MctsConfig::default())
    }

    /// Create an MCTS bot with a custom configuration.
    #[must_use]
    pub fn with_config(game: G, player: PlayerId, config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => RngChain::seeded(seed),
            None => RngChain::unseeded(),
        };
        Self {
            game,
            player,
            config,
            rng,
        }
    }

    /// The player this bot acts for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// The bot's PRNG chain (for checkpointing between decisions).
    #[must_use]
    pub fn rng(&self) -> &RngChain {
        &self.rng
    }

    /// Build a node for a state.
    ///
    /// With an explicit `player` the untried list is that player's moves -
    /// used only for the root, representing the bot's own choices. Without
    /// one, the untried list concatenates the moves of every player
    /// currently eligible to act, in `action_players` order.
    fn create_node(
        &self,
        state: GameState<G::G>,
        parent: NodeId,
        parent_action: Option<G::Move>,
        player: Option<PlayerId>,
        depth: u16,
    ) -> Node<G> {
        let untried = match player {
            Some(p) => self.game.enumerate(&state, p),
            None => state
                .ctx
                .action_players
                .iter()
                .flat_map(|&p| self.game.enumerate(&state, p))
                .collect(),
        };

        Node::new(state, parent, parent_action, untried, depth)
    }

    /// Descend from the root to the node the next iteration should work on.
    ///
    /// A node with untried moves is the frontier; a fully-expanded node with
    /// no children is terminal and is returned as-is. Otherwise descend into
    /// the child with the greatest UCT score. The comparison is strict
    /// greater-than with the first child as baseline, so ties keep the
    /// earliest-created child. A zero-visit child is treated as infinitely
    /// attractive rather than risking a division by zero.
    fn select(&self, tree: &SearchTree<G>) -> NodeId {
        let c = self.config.exploration_constant;
        let mut id = tree.root();

        loop {
            let node = tree.get(id);
            if !node.untried.is_empty() || node.children.is_empty() {
                return id;
            }

            let ln_parent = f64::from(node.visits).ln();
            let uct = |child: &Node<G>| -> f64 {
                if child.visits == 0 {
                    f64::INFINITY
                } else {
                    child.mean_value() + c * (ln_parent / f64::from(child.visits)).sqrt()
                }
            };

            let mut best = node.children[0];
            let mut best_score = uct(tree.get(best));
            for &child in &node.children[1..] {
                let score = uct(tree.get(child));
                if score > best_score {
                    best = child;
                    best_score = score;
                }
            }

            id = best;
        }
    }

    /// Expand one untried move of `id`, returning the new child.
    ///
    /// Returns `id` unchanged when there is nothing to expand (no untried
    /// moves, or the state is already terminal). The move is drawn uniformly
    /// and removed order-preservingly, so each move is expanded exactly once.
    fn expand(&mut self, tree: &mut SearchTree<G>, id: NodeId) -> NodeId {
        {
            let node = tree.get(id);
            if node.untried.is_empty() || node.is_terminal() {
                return id;
            }
        }

        let idx = self.rng.draw_index(tree.get(id).untried.len());
        let action = tree.get_mut(id).untried.remove(idx);

        let child_state = self.game.apply(&tree.get(id).state, &action);
        let depth = tree.get(id).depth + 1;
        let child = self.create_node(child_state, id, Some(action), None, depth);

        let child_id = tree.alloc(child);
        tree.get_mut(id).children.push(child_id);
        child_id
    }

    /// Play random moves from `state` until the game ends, returning the
    /// terminal result.
    ///
    /// Each round consults only the first acting player - strictly
    /// alternating single-actor turns.
    fn playout(&mut self, mut state: GameState<G::G>) -> Result<GameResult, Error> {
        loop {
            if let Some(result) = &state.ctx.gameover {
                return Ok(result.clone());
            }

            let player = state.ctx.current_player().ok_or(Error::Stalled)?;
            let moves = self.game.enumerate(&state, player);
            let mv = self
                .rng
                .choose(&moves)
                .ok_or(Error::NoLegalMoves { player })?;

            state = self.game.apply(&state, mv);
        }
    }

    /// Walk from `id` up to the root, crediting each node on the path.
    ///
    /// A draw is worth 0.5 to every node. Otherwise a node earns 1.0 when
    /// the mover of its `parent_action` is a winner in the result - credit
    /// goes to the action that led to the node, scored against the player
    /// who took it.
    fn backpropagate(&self, tree: &mut SearchTree<G>, id: NodeId, result: &GameResult) {
        let mut id = id;
        loop {
            let node = tree.get_mut(id);
            node.visits += 1;

            if result.is_draw() {
                node.value += 0.5;
            } else if let Some(action) = &node.parent_action {
                if result.is_winner(action.player()) {
                    node.value += 1.0;
                }
            }

            if node.parent.is_none() {
                return;
            }
            id = node.parent;
        }
    }
}

impl<G: Game> Bot<G> for MctsBot<G> {
    fn play(&mut self, state: &GameState<G::G>) -> Result<Decision<G>, Error> {
        let root = self.create_node(
            state.clone(),
            NodeId::NONE,
            None,
            Some(self.player),
            0,
        );
        let mut tree = SearchTree::new(root);

        for _ in 0..self.config.iterations {
            let frontier = self.select(&tree);
            let target = self.expand(&mut tree, frontier);
            let result = self.playout(tree.get(target).state.clone())?;
            self.backpropagate(&mut tree, target, &result);
        }

        let best = tree.robust_child().ok_or(Error::NoCandidates)?;
        let action = tree
            .get(best)
            .parent_action
            .clone()
            .ok_or(Error::NoCandidates)?;

        Ok(Decision {
            action,
            tree: Some(tree),
        })
    }
}
