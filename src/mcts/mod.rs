//! Monte Carlo Tree Search for the hard computer player.
//!
//! Each search grows a fresh arena tree from the current board. Nodes
//! record whose turn it is, and selection scores edges from that player's
//! side, so one tree serves both players. A rollout that ends with an
//! empty board scores 0 for whoever emptied it and 1 for the opponent.
//!
//! Selection and simulation are traits (`SelectionPolicy`,
//! `SimulationPolicy`); the defaults are `UCB1` and `RandomSimulation`.
//! A fixed `MCTSConfig::seed` reproduces the same search.
//!
//! ```
//! use last_teddy::core::{Configuration, Move, PlayerName};
//! use last_teddy::mcts::{MCTSConfig, MCTSSearch};
//!
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(2000));
//!
//! // Clearing the second bin leaves the opponent the last object.
//! let board = Configuration::from(vec![1, 4]);
//! assert_eq!(search.search(&board, PlayerName::Player1), Some(Move::new(1, 4)));
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use node::{Edge, MCTSNode, NodeId};
pub use policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::MCTSTree;
