//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Iterations per search.
    pub iterations: u32,

    /// Maximum tree and rollout depth (0 = unlimited).
    pub max_depth: u32,

    /// Maximum nodes to allocate in the tree.
    pub max_nodes: usize,

    /// Moves considered per node. Larger boards are thinned with
    /// `Configuration::candidate_moves`.
    pub max_branching: usize,

    /// Random seed for selection and rollouts.
    pub seed: u64,

    /// Temperature for the final move choice (0 = most visited).
    pub temperature: f64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            iterations: 1000,
            max_depth: 0,
            max_nodes: 100_000,
            max_branching: 1024,
            seed: 42,
            temperature: 0.0,
        }
    }
}

impl MCTSConfig {
    /// Set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set iterations per search.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Cap the arena size. Search stops early once it is reached.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the per-node move limit.
    pub fn with_max_branching(mut self, max_branching: usize) -> Self {
        self.max_branching = max_branching;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_exploration(2.0)
            .with_iterations(50)
            .with_seed(123)
            .with_max_depth(8);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
