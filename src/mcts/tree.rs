//! Node arena for one search.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};
use crate::core::{Move, PlayerName};

/// Flat vector of nodes addressed by `NodeId`. The root is always slot 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    nodes: Vec<MCTSNode>,
}

impl MCTSTree {
    pub fn new(root_player: PlayerName) -> Self {
        Self::with_capacity(root_player, 256)
    }

    pub fn with_capacity(root_player: PlayerName, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(MCTSNode::root(root_player));
        Self { nodes }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Push a node and return its id.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true in practice: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node and start over from a fresh root. Keeps the
    /// allocation for the next search.
    pub fn reset(&mut self, root_player: PlayerName) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root(root_player));
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root())
    }

    /// The line of play the search currently expects: from the root,
    /// follow the most visited edge until reaching an unexpanded one.
    #[must_use]
    pub fn principal_variation(&self) -> Vec<Move> {
        let mut line = Vec::new();
        let mut current = self.root();

        while let Some(edge) = self.get(current).best_edge_by_visits() {
            if edge.visits == 0 {
                break;
            }
            line.push(edge.mv);
            if !edge.is_expanded() {
                break;
            }
            current = edge.child;
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::node::Edge;

    #[test]
    fn test_alloc_and_reset() {
        let mut tree = MCTSTree::new(PlayerName::Player1);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().to_move, PlayerName::Player1);

        let child = tree.alloc(MCTSNode::new(tree.root(), PlayerName::Player2, 1));
        assert_eq!(child, NodeId::new(1));
        assert_eq!(tree.get(child).depth, 1);

        tree.reset(PlayerName::Player2);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().to_move, PlayerName::Player2);
    }

    #[test]
    fn test_principal_variation() {
        let mut tree = MCTSTree::new(PlayerName::Player1);
        let root = tree.root();

        let mut quiet = Edge::new(Move::new(0, 1));
        quiet.visits = 2;
        let mut busy = Edge::new(Move::new(1, 2));
        busy.visits = 9;
        tree.get_mut(root).edges.extend([quiet, busy]);

        let child = tree.alloc(MCTSNode::new(root, PlayerName::Player2, 1));
        tree.get_mut(root).edges[1].child = child;

        let mut reply = Edge::new(Move::new(0, 1));
        reply.visits = 8;
        tree.get_mut(child).edges.push(reply);
        tree.get_mut(child).edges.push(Edge::new(Move::new(1, 1)));

        assert_eq!(tree.principal_variation(), vec![Move::new(1, 2), Move::new(0, 1)]);
    }

    #[test]
    fn test_principal_variation_of_fresh_tree() {
        let mut tree = MCTSTree::new(PlayerName::Player1);
        let root = tree.root();
        tree.get_mut(root).edges.push(Edge::new(Move::new(0, 1)));

        assert!(tree.principal_variation().is_empty());
    }
}
