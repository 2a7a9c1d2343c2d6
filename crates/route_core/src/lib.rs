//! `route_core` — floor graph model and hop-count shortest paths.
//!
//! No IO. Text in, paths out.

mod error;
mod graph;
mod parse;
mod report;
mod solver;
#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;
mod types;

pub use error::{ParseError, QueryError};
pub use graph::Graph;
pub use parse::parse_description;
pub use report::{render, QueryReport};
pub use solver::{shortest_path, solve, PathResult, ShortestPaths};
pub use types::*;
