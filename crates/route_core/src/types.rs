//! Type definitions for `route_core`.
//!
//! Capacity constants, node records, and the position/id newtypes shared by
//! the parser, the graph, and the solver.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ---------------------------------------------------------------------------
// Capacities
// ---------------------------------------------------------------------------

/// Maximum number of node records kept from one document.
pub const MAX_NODES: usize = 10;
/// Maximum number of neighbor ids kept per node.
pub const MAX_NEIGHBORS: usize = 10;
/// Maximum number of characters kept from a node name.
pub const MAX_NAME_LEN: usize = 49;

pub type NeighborIds = SmallVec<[i64; MAX_NEIGHBORS]>;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// External node identifier, as declared in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub i64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 0-based index into node storage, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub usize);

impl Position {
    /// 1-based id shown to operators.
    pub fn display_id(self) -> usize {
        self.0 + 1
    }

    /// Inverse of [`Position::display_id`]. `None` for 0.
    pub fn from_display_id(display_id: usize) -> Option<Self> {
        display_id.checked_sub(1).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_id())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One parsed entry of the `anchors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// `None` when the source entry has no numeric `id`.
    pub id: Option<NodeId>,
    pub name: String,
    /// Neighbor ids in source order, at most [`MAX_NEIGHBORS`].
    pub neighbor_ids: NeighborIds,
}

/// Parser output: the retained records plus what was dropped to stay within
/// capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<NodeRecord>,
    /// `anchors` entries past [`MAX_NODES`].
    pub skipped_nodes: usize,
    /// Numeric neighbor entries past [`MAX_NEIGHBORS`], summed over all nodes.
    pub skipped_neighbors: usize,
}

impl GraphDescription {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.skipped_nodes > 0 || self.skipped_neighbors > 0
    }
}

/// An edge whose neighbor id does not resolve to any stored node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedEdge {
    pub from: Position,
    pub neighbor_id: i64,
}

/// A node id declared more than once. The first declaration keeps the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateId {
    pub id: NodeId,
    pub first: Position,
    pub duplicate: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_id_is_one_based() {
        assert_eq!(Position(0).display_id(), 1);
        assert_eq!(Position(9).to_string(), "10");
    }

    #[test]
    fn from_display_id_rejects_zero() {
        assert_eq!(Position::from_display_id(0), None);
        assert_eq!(Position::from_display_id(6), Some(Position(5)));
    }
}
