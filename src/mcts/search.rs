//! Core MCTS search algorithm.
//!
//! Both players are searched: each node records who is to move and
//! selection maximizes that player's mean reward. Boards are perfect
//! information, so there is no opponent sampling.

use std::time::Instant;

use crate::core::{Configuration, GameRng, Move, PlayerMap, PlayerName};
use crate::engine::GameResult;

use super::config::MCTSConfig;
use super::node::{Edge, MCTSNode, NodeId};
use super::policy::{
    draw_rewards, result_to_rewards, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1,
};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// MCTS search context.
///
/// Owns the tree, RNG and policies. Reused across searches; each call to
/// `search` starts a fresh tree.
pub struct MCTSSearch {
    config: MCTSConfig,
    tree: MCTSTree,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy>,
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new search context.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            tree: MCTSTree::with_capacity(PlayerName::Player1, config.max_nodes.min(4096)),
            rng: GameRng::new(config.seed),
            config,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Search for `player`'s best move on `configuration`.
    ///
    /// Returns `None` only if the board is empty.
    pub fn search(&mut self, configuration: &Configuration, player: PlayerName) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.tree.reset(player);

        let root = self.tree.root();
        self.expand_node(root, configuration, player);

        let root_node = self.tree.root_node();
        if root_node.is_terminal() || root_node.edges.is_empty() {
            return None;
        }
        if root_node.edges.len() == 1 {
            return Some(root_node.edges[0].mv);
        }

        for _ in 0..self.config.iterations {
            self.iteration(configuration);
            self.stats.iterations += 1;

            if self.tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if log::log_enabled!(log::Level::Trace) {
            let line: Vec<String> = self.tree.principal_variation().iter().map(|mv| mv.to_string()).collect();
            log::trace!(
                "mcts: {} iterations, {} nodes, expecting {}",
                self.stats.iterations,
                self.tree.len(),
                line.join(", ")
            );
        }

        self.best_move()
    }

    /// Single iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, configuration: &Configuration) {
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.tree.root();
        let mut board = configuration.clone();

        loop {
            let node = self.tree.get(current);

            if let Some(rewards) = &node.terminal_reward {
                let rewards = rewards.clone();
                self.stats.terminal_hits += 1;
                self.backpropagate(&path, &rewards);
                return;
            }

            if self.config.max_depth > 0 && node.depth >= self.config.max_depth {
                self.backpropagate(&path, &draw_rewards());
                return;
            }

            let to_move = node.to_move;

            if node.has_unexpanded() {
                let edge_idx = self.select_unexpanded(current);
                path.push((current, edge_idx));

                board = board.apply_legal(&self.tree.get(current).edges[edge_idx].mv);
                let child = self.expand_child(current, edge_idx, &board);

                let rewards = match &self.tree.get(child).terminal_reward {
                    Some(rewards) => rewards.clone(),
                    None => {
                        self.stats.simulations += 1;
                        let mut sim_rng = self.rng.fork();
                        self.simulation.simulate(
                            &board,
                            to_move.other(),
                            &mut sim_rng,
                            self.config.max_depth,
                        )
                    }
                };
                self.backpropagate(&path, &rewards);
                return;
            }

            let edge_idx = self.selection.select(node, to_move, &self.config);
            path.push((current, edge_idx));

            let edge = &self.tree.get(current).edges[edge_idx];
            board = board.apply_legal(&edge.mv);
            current = edge.child;
        }
    }

    /// Mark a node terminal or add one edge per legal move.
    fn expand_node(&mut self, node_id: NodeId, board: &Configuration, to_move: PlayerName) {
        let node = self.tree.get_mut(node_id);

        if board.is_empty() {
            // The player before `to_move` emptied the board.
            node.terminal_reward = Some(result_to_rewards(&GameResult::emptied_by(to_move.other())));
            return;
        }

        let moves = board.candidate_moves(self.config.max_branching);
        node.edges.extend(moves.into_iter().map(Edge::new));
        self.stats.nodes_expanded += 1;
    }

    /// Pick one unexpanded edge at random.
    fn select_unexpanded(&mut self, node_id: NodeId) -> usize {
        let unexpanded: Vec<usize> = self.tree.get(node_id).unexpanded_edges().collect();
        match unexpanded.len() {
            0 => 0,
            1 => unexpanded[0],
            n => unexpanded[self.rng.gen_index(n)],
        }
    }

    /// Allocate and expand the child behind an edge.
    fn expand_child(&mut self, parent_id: NodeId, edge_idx: usize, board: &Configuration) -> NodeId {
        let parent = self.tree.get(parent_id);
        let depth = parent.depth.saturating_add(1);
        let to_move = parent.to_move.other();

        self.stats.max_depth = self.stats.max_depth.max(depth);

        let child_id = self.tree.alloc(MCTSNode::new(parent_id, to_move, depth));
        self.tree.get_mut(parent_id).edges[edge_idx].child = child_id;
        self.expand_node(child_id, board, to_move);

        child_id
    }

    /// Add rewards along the path.
    fn backpropagate(&mut self, path: &[(NodeId, usize)], rewards: &PlayerMap<f64>) {
        for &(node_id, edge_idx) in path.iter().rev() {
            let node = self.tree.get_mut(node_id);
            node.visits += 1;

            let edge = &mut node.edges[edge_idx];
            edge.visits += 1;
            for player in PlayerName::ALL {
                edge.total_reward[player] += rewards[player];
            }
        }
    }

    /// Choose the final move from the root.
    fn best_move(&mut self) -> Option<Move> {
        let root = self.tree.root_node();

        if self.config.temperature <= 0.0 {
            return root.best_edge_by_visits().map(|e| e.mv);
        }

        // Scale by the top count first so the power stays within [0, 1].
        let most = root.edges.iter().map(|e| e.visits).max().unwrap_or(0).max(1);
        let weights: Vec<f64> = root
            .edges
            .iter()
            .map(|e| (f64::from(e.visits) / f64::from(most)).powf(1.0 / self.config.temperature))
            .collect();

        match self.rng.choose_weighted(&weights) {
            Some(idx) => Some(root.edges[idx].mv),
            None => root.best_edge_by_visits().map(|e| e.mv),
        }
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Visit counts per root move.
    pub fn move_visits(&self) -> Vec<(Move, u32)> {
        self.tree
            .root_node()
            .edges
            .iter()
            .map(|e| (e.mv, e.visits))
            .collect()
    }

    /// Root visit counts normalized to probabilities.
    pub fn move_probabilities(&self) -> Vec<(Move, f64)> {
        let root = self.tree.root_node();
        let total: u32 = root.edges.iter().map(|e| e.visits).sum();

        if total == 0 {
            let uniform = 1.0 / root.edges.len().max(1) as f64;
            return root.edges.iter().map(|e| (e.mv, uniform)).collect();
        }

        root.edges
            .iter()
            .map(|e| (e.mv, e.visits as f64 / total as f64))
            .collect()
    }
}
