//! MCTS policies for selection and simulation.
//!
//! - `SelectionPolicy`: which child to descend into (UCB1)
//! - `SimulationPolicy`: how to estimate a leaf (random rollouts)

use crate::core::{Configuration, GameRng, PlayerMap, PlayerName};
use crate::engine::GameResult;

use super::config::MCTSConfig;
use super::node::{Edge, MCTSNode};

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select an edge index from a node, from `player`'s point of view.
    fn select(&self, node: &MCTSNode, player: PlayerName, config: &MCTSConfig) -> usize;
}

/// UCB1: mean reward for the player on turn plus an exploration bonus,
/// `c * sqrt(ln N / n)`. Unvisited edges are tried first, in order.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &MCTSNode, player: PlayerName, config: &MCTSConfig) -> usize {
        if let Some(fresh) = node.edges.iter().position(|e| e.visits == 0) {
            return fresh;
        }

        let log_visits = f64::from(node.visits.max(1)).ln();
        let score = |edge: &Edge| {
            edge.mean_reward(player)
                + config.exploration_constant * (log_visits / f64::from(edge.visits)).sqrt()
        };

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, edge) in node.edges.iter().enumerate() {
            let s = score(edge);
            if s > best_score {
                best = i;
                best_score = s;
            }
        }
        best
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for estimating the value of a non-terminal board.
pub trait SimulationPolicy: Send + Sync {
    /// Estimate per-player rewards with `to_move` on turn.
    fn simulate(
        &self,
        configuration: &Configuration,
        to_move: PlayerName,
        rng: &mut GameRng,
        max_depth: u32,
    ) -> PlayerMap<f64>;
}

/// Plays uniformly random legal moves until the board empties.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl SimulationPolicy for RandomSimulation {
    fn simulate(
        &self,
        configuration: &Configuration,
        to_move: PlayerName,
        rng: &mut GameRng,
        max_depth: u32,
    ) -> PlayerMap<f64> {
        let mut board = configuration.clone();
        let mut mover = to_move;
        let mut depth = 0;

        loop {
            let Some(mv) = board.random_move(rng) else {
                // Only reachable when called on an empty board
                return draw_rewards();
            };
            board = board.apply_legal(&mv);

            if board.is_empty() {
                return result_to_rewards(&GameResult::emptied_by(mover));
            }

            depth += 1;
            if max_depth > 0 && depth >= max_depth {
                return draw_rewards();
            }
            mover = mover.other();
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// 1.0 for the winner, 0.0 for the loser.
pub fn result_to_rewards(result: &GameResult) -> PlayerMap<f64> {
    PlayerMap::new(|player| if result.is_winner(player) { 1.0 } else { 0.0 })
}

/// Even split, used when a search is cut off before the board empties.
pub fn draw_rewards() -> PlayerMap<f64> {
    PlayerMap::with_value(0.5)
}
