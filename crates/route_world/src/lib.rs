//! Graph document loading shared by the CLI and tests.
//!
//! Everything the core recovers from on its own (truncation, dangling edges,
//! duplicate or missing ids) is reported here as a warning.

use anyhow::{Context, Result};
use route_core::{
    parse_description, DuplicateId, Graph, MalformedEdge, Position, MAX_NEIGHBORS, MAX_NODES,
};
use std::fmt;
use std::path::Path;

/// A recoverable problem found while loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NodesSkipped(usize),
    NeighborsSkipped(usize),
    MalformedEdge(MalformedEdge),
    DuplicateId(DuplicateId),
    UnsetId(Position),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NodesSkipped(count) => write!(
                f,
                "{count} anchors past the {MAX_NODES}-node capacity were ignored"
            ),
            Diagnostic::NeighborsSkipped(count) => write!(
                f,
                "{count} neighbor ids past the {MAX_NEIGHBORS}-per-node capacity were ignored"
            ),
            Diagnostic::MalformedEdge(edge) => write!(
                f,
                "node {} lists neighbor id {} which matches no node; edge dropped",
                edge.from, edge.neighbor_id
            ),
            Diagnostic::DuplicateId(dup) => write!(
                f,
                "node {} repeats id {} already declared by node {}; only the first is linked",
                dup.duplicate, dup.id, dup.first
            ),
            Diagnostic::UnsetId(position) => write!(
                f,
                "node {position} has no numeric id; no edge can reach it"
            ),
        }
    }
}

/// A built graph together with everything recovered while building it.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn diagnose(graph: &Graph) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if graph.skipped_nodes() > 0 {
        diagnostics.push(Diagnostic::NodesSkipped(graph.skipped_nodes()));
    }
    if graph.skipped_neighbors() > 0 {
        diagnostics.push(Diagnostic::NeighborsSkipped(graph.skipped_neighbors()));
    }
    diagnostics.extend(graph.unset_ids().iter().copied().map(Diagnostic::UnsetId));
    diagnostics.extend(
        graph
            .duplicate_ids()
            .iter()
            .copied()
            .map(Diagnostic::DuplicateId),
    );
    diagnostics.extend(
        graph
            .malformed_edges()
            .iter()
            .copied()
            .map(Diagnostic::MalformedEdge),
    );
    diagnostics
}

/// Reads the whole document into memory.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Parses and builds a graph from document text already in memory.
pub fn build_graph(json: &str) -> Result<LoadedGraph> {
    let graph = Graph::from_description(parse_description(json)?);
    let diagnostics = diagnose(&graph);
    for diagnostic in &diagnostics {
        tracing::warn!("{diagnostic}");
    }
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph
            .nodes()
            .iter()
            .map(|node| node.neighbor_ids.len())
            .sum::<usize>(),
        "graph built"
    );
    Ok(LoadedGraph { graph, diagnostics })
}

pub fn load_graph(path: impl AsRef<Path>) -> Result<LoadedGraph> {
    let path = path.as_ref();
    let json = read_document(path)?;
    build_graph(&json).with_context(|| format!("parsing {}", path.display()))
}
