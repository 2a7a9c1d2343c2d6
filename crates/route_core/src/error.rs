use thiserror::Error;

use crate::Position;

/// Failure to turn a document into a [`GraphDescription`](crate::GraphDescription).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed graph document: {0}")]
    MalformedDocument(String),
}

/// A query that names a position the graph does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("node {} is out of range (graph has {node_count} nodes)", .position.display_id())]
    PositionOutOfRange {
        position: Position,
        node_count: usize,
    },
}
