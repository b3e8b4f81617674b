//! Search tree nodes and the edges between them.
//!
//! Statistics live on edges rather than children, so a node's outgoing
//! moves can be scored without touching the arena again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, PlayerMap, PlayerName};

/// Slot in the `MCTSTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marks an edge whose child has not been allocated yet.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// One legal move out of a node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub mv: Move,
    pub child: NodeId,
    pub visits: u32,
    /// Summed rollout rewards, kept for both players so either side can
    /// read its own value.
    pub total_reward: PlayerMap<f64>,
}

impl Edge {
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            child: NodeId::NONE,
            visits: 0,
            total_reward: PlayerMap::with_value(0.0),
        }
    }

    /// Average reward for `player`, 0 before the first visit.
    #[must_use]
    pub fn mean_reward(&self, player: PlayerName) -> f64 {
        match self.visits {
            0 => 0.0,
            n => self.total_reward[player] / f64::from(n),
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A board position reached during search.
///
/// The board itself is not stored; search replays moves from the root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    pub parent: NodeId,
    pub to_move: PlayerName,
    pub depth: u32,
    pub visits: u32,
    /// Set when the board here is empty. The game is decided, so the
    /// rewards are exact.
    pub terminal_reward: Option<PlayerMap<f64>>,
    pub edges: SmallVec<[Edge; 8]>,
}

impl MCTSNode {
    pub fn new(parent: NodeId, to_move: PlayerName, depth: u32) -> Self {
        Self {
            parent,
            to_move,
            depth,
            visits: 0,
            terminal_reward: None,
            edges: SmallVec::new(),
        }
    }

    pub fn root(to_move: PlayerName) -> Self {
        Self::new(NodeId::NONE, to_move, 0)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal_reward.is_some()
    }

    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.edges.iter().any(|e| !e.is_expanded())
    }

    /// Indices of edges without a child node.
    pub fn unexpanded_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| (!e.is_expanded()).then_some(i))
    }

    /// Most visited edge; ties go to the later move.
    #[must_use]
    pub fn best_edge_by_visits(&self) -> Option<&Edge> {
        self.edges.iter().max_by_key(|e| e.visits)
    }
}
