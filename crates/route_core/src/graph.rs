use std::collections::hash_map::Entry;

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    DuplicateId, GraphDescription, MalformedEdge, NodeId, NodeRecord, Position, QueryError,
    MAX_NEIGHBORS, MAX_NODES,
};

type Adjacency = SmallVec<[Position; MAX_NEIGHBORS]>;

/// Read-only adjacency view built from one [`GraphDescription`].
///
/// Neighbor ids are resolved through an id → position index, so declaration
/// order and id values may diverge. Ids that resolve to nothing are kept as
/// [`MalformedEdge`]s and left out of the adjacency.
///
/// Capacities hold whatever the description carries: records past
/// [`MAX_NODES`] and neighbor ids past [`MAX_NEIGHBORS`] are dropped and
/// added to the skip counts.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeRecord>,
    adjacency: Vec<Adjacency>,
    index: AHashMap<NodeId, Position>,
    malformed_edges: Vec<MalformedEdge>,
    duplicate_ids: Vec<DuplicateId>,
    unset_ids: Vec<Position>,
    skipped_nodes: usize,
    skipped_neighbors: usize,
}

impl Graph {
    pub fn from_description(description: GraphDescription) -> Self {
        let mut nodes = description.nodes;
        let skipped_nodes = description.skipped_nodes + nodes.len().saturating_sub(MAX_NODES);
        nodes.truncate(MAX_NODES);
        let mut skipped_neighbors = description.skipped_neighbors;
        for node in &mut nodes {
            skipped_neighbors += node.neighbor_ids.len().saturating_sub(MAX_NEIGHBORS);
            node.neighbor_ids.truncate(MAX_NEIGHBORS);
        }

        let mut index: AHashMap<NodeId, Position> = AHashMap::with_capacity(nodes.len());
        let mut duplicate_ids = Vec::new();
        let mut unset_ids = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            let position = Position(i);
            let Some(id) = node.id else {
                unset_ids.push(position);
                continue;
            };
            match index.entry(id) {
                Entry::Occupied(first) => duplicate_ids.push(DuplicateId {
                    id,
                    first: *first.get(),
                    duplicate: position,
                }),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let mut malformed_edges = Vec::new();
        let adjacency: Vec<Adjacency> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                node.neighbor_ids
                    .iter()
                    .filter_map(|&neighbor_id| {
                        let resolved = index.get(&NodeId(neighbor_id)).copied();
                        if resolved.is_none() {
                            malformed_edges.push(MalformedEdge {
                                from: Position(i),
                                neighbor_id,
                            });
                        }
                        resolved
                    })
                    .collect::<Adjacency>()
            })
            .collect();

        Self {
            nodes,
            adjacency,
            index,
            malformed_edges,
            duplicate_ids,
            unset_ids,
            skipped_nodes,
            skipped_neighbors,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, position: Position) -> Option<&NodeRecord> {
        self.nodes.get(position.0)
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Neighbor ids as declared, including ones that did not resolve.
    pub fn neighbor_ids(&self, position: Position) -> Option<&[i64]> {
        self.node(position).map(|node| node.neighbor_ids.as_slice())
    }

    /// Resolved neighbors. Empty for an out-of-range position.
    pub fn neighbors(&self, position: Position) -> &[Position] {
        self.adjacency
            .get(position.0)
            .map(|adjacent| adjacent.as_slice())
            .unwrap_or_default()
    }

    pub fn position_of(&self, id: NodeId) -> Option<Position> {
        self.index.get(&id).copied()
    }

    pub fn check_position(&self, position: Position) -> Result<Position, QueryError> {
        if position.0 < self.node_count() {
            Ok(position)
        } else {
            Err(QueryError::PositionOutOfRange {
                position,
                node_count: self.node_count(),
            })
        }
    }

    pub fn malformed_edges(&self) -> &[MalformedEdge] {
        &self.malformed_edges
    }

    pub fn duplicate_ids(&self) -> &[DuplicateId] {
        &self.duplicate_ids
    }

    /// Positions whose record has no numeric id; nothing can link to them.
    pub fn unset_ids(&self) -> &[Position] {
        &self.unset_ids
    }

    /// Records dropped to stay within [`MAX_NODES`], by the parser or here.
    pub fn skipped_nodes(&self) -> usize {
        self.skipped_nodes
    }

    /// Neighbor ids dropped to stay within [`MAX_NEIGHBORS`].
    pub fn skipped_neighbors(&self) -> usize {
        self.skipped_neighbors
    }
}
