use serde::Serialize;

use crate::{PathResult, Position};

const ARROW: &str = " <- ";

/// Human-readable rendering: the path from destination back to start, or a
/// one-line unreachability notice. Positions are shown as display ids.
pub fn render(result: &PathResult, start: Position, dest: Position) -> String {
    match result {
        PathResult::Unreachable => format!(
            "Node {} is unreachable from node {}.",
            dest.display_id(),
            start.display_id()
        ),
        PathResult::Path { positions, .. } => positions
            .iter()
            .rev()
            .map(|position| position.display_id().to_string())
            .collect::<Vec<_>>()
            .join(ARROW),
    }
}

/// Machine-readable form of one query outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub start: usize,
    pub dest: usize,
    pub reachable: bool,
    pub hops: Option<u32>,
    /// Display ids, destination first.
    pub path: Vec<usize>,
}

impl QueryReport {
    pub fn new(result: &PathResult, start: Position, dest: Position) -> Self {
        let path = match result {
            PathResult::Unreachable => Vec::new(),
            PathResult::Path { positions, .. } => {
                positions.iter().rev().map(|p| p.display_id()).collect()
            }
        };
        Self {
            start: start.display_id(),
            dest: dest.display_id(),
            reachable: result.is_reachable(),
            hops: result.hops(),
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path_runs_destination_to_start() {
        let result = PathResult::Path {
            positions: vec![Position(0), Position(1)],
            hops: 1,
        };
        assert_eq!(render(&result, Position(0), Position(1)), "2 <- 1");
    }

    #[test]
    fn test_render_trivial_path_has_no_arrow() {
        let result = PathResult::Path {
            positions: vec![Position(4)],
            hops: 0,
        };
        assert_eq!(render(&result, Position(4), Position(4)), "5");
    }

    #[test]
    fn test_render_unreachable_names_both_nodes() {
        assert_eq!(
            render(&PathResult::Unreachable, Position(9), Position(5)),
            "Node 6 is unreachable from node 10."
        );
    }

    #[test]
    fn test_query_report_uses_display_ids() {
        let result = PathResult::Path {
            positions: vec![Position(9), Position(8), Position(7)],
            hops: 2,
        };
        let report = QueryReport::new(&result, Position(9), Position(7));
        assert_eq!(report.path, vec![8, 9, 10]);
        assert_eq!(report.hops, Some(2));
        assert!(report.reachable);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["start"], 10);
        assert_eq!(json["dest"], 8);
    }

    #[test]
    fn test_query_report_unreachable_has_empty_path() {
        let report = QueryReport::new(&PathResult::Unreachable, Position(0), Position(1));
        assert!(!report.reachable);
        assert_eq!(report.hops, None);
        assert!(report.path.is_empty());
    }
}
