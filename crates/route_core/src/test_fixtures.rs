//! Shared test fixtures for route_core and downstream crates.
//!
//! `chain_document()` is the reference ten-node corridor. `random_document()`
//! builds seeded, arbitrary documents (including dangling neighbor ids) for
//! oracle comparisons.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::{parse_description, Graph, MAX_NEIGHBORS};

/// Ten nodes, ids 1..=10, each linked to the ids directly before and after it.
pub fn chain_document() -> String {
    let anchors: Vec<serde_json::Value> = (1..=10_i64)
        .map(|id| {
            let neighbors: Vec<i64> = [id - 1, id + 1]
                .into_iter()
                .filter(|n| (1..=10).contains(n))
                .collect();
            json!({ "id": id, "name": format!("anchor {id}"), "neighbors": neighbors })
        })
        .collect();
    json!({ "anchors": anchors }).to_string()
}

pub fn chain_graph() -> Graph {
    graph_from(&chain_document())
}

/// Panics on a malformed document; fixtures are expected to be valid.
pub fn graph_from(json: &str) -> Graph {
    Graph::from_description(parse_description(json).expect("fixture document should parse"))
}

/// `node_count` nodes with ids 1..=node_count in order. Each node gets up to
/// [`MAX_NEIGHBORS`] neighbor ids drawn from `0..=node_count + 1`, so some
/// edges dangle.
pub fn random_document(rng: &mut impl Rng, node_count: usize) -> String {
    let upper = i64::try_from(node_count).unwrap_or(i64::MAX) + 1;
    let anchors: Vec<serde_json::Value> = (1..=upper - 1)
        .map(|id| {
            let degree = rng.gen_range(0..=MAX_NEIGHBORS / 3);
            let neighbors: Vec<i64> = (0..degree).map(|_| rng.gen_range(0..=upper)).collect();
            json!({ "id": id, "neighbors": neighbors })
        })
        .collect();
    json!({ "anchors": anchors }).to_string()
}

pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}
