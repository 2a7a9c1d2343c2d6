//! Unit-weight Dijkstra over a [`Graph`].
//!
//! Every edge costs one hop. The frontier is scanned left to right on each
//! round, so ties on distance always go to the lowest position.

use serde::Serialize;

use crate::{Graph, Position, QueryError};

/// Outcome of a single-destination query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathResult {
    Unreachable,
    /// `positions` runs from start to destination; `hops == positions.len() - 1`.
    Path { positions: Vec<Position>, hops: u32 },
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Path { .. })
    }

    pub fn hops(&self) -> Option<u32> {
        match self {
            PathResult::Unreachable => None,
            PathResult::Path { hops, .. } => Some(*hops),
        }
    }
}

/// Working set of one query: distances, finalized flags and predecessors for
/// every position, relative to a single start.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: Position,
    /// `None` is infinite.
    distance: Vec<Option<u32>>,
    visited: Vec<bool>,
    predecessor: Vec<Option<Position>>,
}

impl ShortestPaths {
    fn new(node_count: usize, start: Position) -> Self {
        let mut distance = vec![None; node_count];
        distance[start.0] = Some(0);
        Self {
            start,
            distance,
            visited: vec![false; node_count],
            predecessor: vec![None; node_count],
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn distance(&self, position: Position) -> Option<u32> {
        self.distance.get(position.0).copied().flatten()
    }

    pub fn predecessor(&self, position: Position) -> Option<Position> {
        self.predecessor.get(position.0).copied().flatten()
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.get(position.0).copied().unwrap_or(false)
    }

    /// Unvisited position with the smallest finite distance.
    fn closest_unvisited(&self) -> Option<Position> {
        let mut best: Option<(usize, u32)> = None;
        for (i, (&distance, &visited)) in self.distance.iter().zip(&self.visited).enumerate() {
            let Some(distance) = distance else { continue };
            if visited {
                continue;
            }
            if best.map_or(true, |(_, min)| distance < min) {
                best = Some((i, distance));
            }
        }
        best.map(|(i, _)| Position(i))
    }

    fn relax(&mut self, graph: &Graph, x: Position) {
        let Some(through) = self.distance[x.0].map(|d| d + 1) else {
            return;
        };
        for &neighbor in graph.neighbors(x) {
            let Some(slot) = self.distance.get_mut(neighbor.0) else {
                continue;
            };
            if slot.map_or(true, |current| through < current) {
                *slot = Some(through);
                self.predecessor[neighbor.0] = Some(x);
            }
        }
    }

    /// Walks predecessors back from `dest` and returns the path in
    /// start → destination order.
    pub fn path_to(&self, dest: Position) -> Result<PathResult, QueryError> {
        if dest.0 >= self.distance.len() {
            return Err(QueryError::PositionOutOfRange {
                position: dest,
                node_count: self.distance.len(),
            });
        }
        let Some(hops) = self.distance[dest.0] else {
            return Ok(PathResult::Unreachable);
        };
        let mut positions = Vec::with_capacity(hops as usize + 1);
        let mut current = dest;
        positions.push(current);
        while current != self.start {
            let Some(previous) = self.predecessor[current.0] else {
                // A finite distance always has a predecessor chain back to start.
                return Ok(PathResult::Unreachable);
            };
            current = previous;
            positions.push(current);
        }
        positions.reverse();
        Ok(PathResult::Path { positions, hops })
    }
}

/// Runs the search from `start` over the whole graph.
pub fn solve(graph: &Graph, start: Position) -> Result<ShortestPaths, QueryError> {
    let start = graph.check_position(start)?;
    let node_count = graph.node_count();
    let mut paths = ShortestPaths::new(node_count, start);
    for _ in 0..node_count {
        let Some(x) = paths.closest_unvisited() else {
            break;
        };
        paths.visited[x.0] = true;
        paths.relax(graph, x);
    }
    Ok(paths)
}

pub fn shortest_path(
    graph: &Graph,
    start: Position,
    dest: Position,
) -> Result<PathResult, QueryError> {
    let dest = graph.check_position(dest)?;
    solve(graph, start)?.path_to(dest)
}
