//! JSON document → [`GraphDescription`].
//!
//! Only the top-level shape is strict: the root must be an object with an
//! `anchors` array. Every per-node field is best-effort and falls back to a
//! default when absent or of the wrong type.

use serde_json::{Map, Value};

use crate::{
    GraphDescription, NeighborIds, NodeId, NodeRecord, ParseError, MAX_NAME_LEN, MAX_NEIGHBORS,
    MAX_NODES,
};

const ANCHORS_FIELD: &str = "anchors";

pub fn parse_description(json: &str) -> Result<GraphDescription, ParseError> {
    let root: Value = serde_json::from_str(json)
        .map_err(|err| ParseError::MalformedDocument(format!("invalid JSON: {err}")))?;
    let root = root.as_object().ok_or_else(|| {
        ParseError::MalformedDocument("document root is not an object".to_string())
    })?;
    let anchors = match root.get(ANCHORS_FIELD) {
        Some(Value::Array(anchors)) => anchors,
        Some(_) => {
            return Err(ParseError::MalformedDocument(format!(
                "`{ANCHORS_FIELD}` is not an array"
            )))
        }
        None => {
            return Err(ParseError::MalformedDocument(format!(
                "missing `{ANCHORS_FIELD}` field"
            )))
        }
    };

    let mut description = GraphDescription {
        nodes: Vec::with_capacity(anchors.len().min(MAX_NODES)),
        skipped_nodes: anchors.len().saturating_sub(MAX_NODES),
        skipped_neighbors: 0,
    };
    for anchor in anchors.iter().take(MAX_NODES) {
        let (record, skipped) = match anchor.as_object() {
            Some(fields) => parse_record(fields),
            None => (NodeRecord::default(), 0),
        };
        description.skipped_neighbors += skipped;
        description.nodes.push(record);
    }
    Ok(description)
}

/// Returns the record and how many numeric neighbor entries were dropped.
fn parse_record(fields: &Map<String, Value>) -> (NodeRecord, usize) {
    let id = fields.get("id").and_then(as_integer).map(NodeId);
    let name = match fields.get("name") {
        Some(Value::String(name)) => name.chars().take(MAX_NAME_LEN).collect(),
        _ => String::new(),
    };
    let mut neighbor_ids = NeighborIds::new();
    let mut skipped = 0;
    if let Some(Value::Array(neighbors)) = fields.get("neighbors") {
        for neighbor_id in neighbors.iter().filter_map(as_integer) {
            if neighbor_ids.len() < MAX_NEIGHBORS {
                neighbor_ids.push(neighbor_id);
            } else {
                skipped += 1;
            }
        }
    }
    (
        NodeRecord {
            id,
            name,
            neighbor_ids,
        },
        skipped,
    )
}

/// Numeric values only. Fractions truncate toward zero, out-of-range floats
/// saturate.
#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|float| float as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_node_document() {
        let desc =
            parse_description(r#"{"anchors":[{"id":1,"neighbors":[2]},{"id":2,"neighbors":[1]}]}"#)
                .unwrap();
        assert_eq!(desc.node_count(), 2);
        assert_eq!(desc.nodes[0].id, Some(NodeId(1)));
        assert_eq!(desc.nodes[0].neighbor_ids.as_slice(), &[2]);
        assert_eq!(desc.nodes[1].neighbor_ids.as_slice(), &[1]);
        assert!(!desc.is_truncated());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_description("{\"anchors\": [").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_missing_anchors_is_malformed() {
        let err = parse_description(r#"{"nodes": []}"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDocument("missing `anchors` field".to_string())
        );
    }

    #[test]
    fn test_anchors_not_array_is_malformed() {
        let err = parse_description(r#"{"anchors": {"id": 1}}"#).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn test_root_not_object_is_malformed() {
        assert!(parse_description("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_empty_anchors_is_an_empty_description() {
        let desc = parse_description(r#"{"anchors": []}"#).unwrap();
        assert_eq!(desc.node_count(), 0);
    }

    #[test]
    fn test_missing_neighbors_gives_zero_neighbors() {
        let desc = parse_description(r#"{"anchors":[{"id":1,"name":"hall"}]}"#).unwrap();
        assert!(desc.nodes[0].neighbor_ids.is_empty());
        assert_eq!(desc.nodes[0].name, "hall");
    }

    #[test]
    fn test_non_numeric_id_is_unset() {
        let desc = parse_description(r#"{"anchors":[{"id":"one"},{}]}"#).unwrap();
        assert_eq!(desc.nodes[0].id, None);
        assert_eq!(desc.nodes[1].id, None);
    }

    #[test]
    fn test_fractional_id_truncates() {
        let desc = parse_description(r#"{"anchors":[{"id":3.9,"neighbors":[1.2]}]}"#).unwrap();
        assert_eq!(desc.nodes[0].id, Some(NodeId(3)));
        assert_eq!(desc.nodes[0].neighbor_ids.as_slice(), &[1]);
    }

    #[test]
    fn test_non_string_name_is_empty() {
        let desc = parse_description(r#"{"anchors":[{"id":1,"name":42}]}"#).unwrap();
        assert_eq!(desc.nodes[0].name, "");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long = "é".repeat(MAX_NAME_LEN + 20);
        let json = format!(r#"{{"anchors":[{{"id":1,"name":"{long}"}}]}}"#);
        let desc = parse_description(&json).unwrap();
        assert_eq!(desc.nodes[0].name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_non_numeric_neighbors_are_skipped() {
        let desc =
            parse_description(r#"{"anchors":[{"id":1,"neighbors":[2,"x",null,3,{"id":4}]}]}"#)
                .unwrap();
        assert_eq!(desc.nodes[0].neighbor_ids.as_slice(), &[2, 3]);
        assert_eq!(desc.skipped_neighbors, 0);
    }

    #[test]
    fn test_neighbors_over_capacity_keep_first() {
        let neighbors: Vec<String> = (1..=15).map(|n| n.to_string()).collect();
        let json = format!(
            r#"{{"anchors":[{{"id":1,"neighbors":[{}]}}]}}"#,
            neighbors.join(",")
        );
        let desc = parse_description(&json).unwrap();
        let kept: Vec<i64> = (1..=10).collect();
        assert_eq!(desc.nodes[0].neighbor_ids.as_slice(), kept.as_slice());
        assert_eq!(desc.skipped_neighbors, 5);
    }

    #[test]
    fn test_non_numeric_entries_do_not_use_neighbor_capacity() {
        let mut entries: Vec<String> = vec!["\"pad\"".to_string(); 12];
        entries.extend((1..=10).map(|n| n.to_string()));
        let json = format!(
            r#"{{"anchors":[{{"id":1,"neighbors":[{}]}}]}}"#,
            entries.join(",")
        );
        let desc = parse_description(&json).unwrap();
        assert_eq!(desc.nodes[0].neighbor_ids.len(), MAX_NEIGHBORS);
        assert_eq!(desc.skipped_neighbors, 0);
    }

    #[test]
    fn test_nodes_over_capacity_keep_first_in_order() {
        let anchors: Vec<String> = (1..=13)
            .map(|id| format!(r#"{{"id":{id},"neighbors":[]}}"#))
            .collect();
        let json = format!(r#"{{"anchors":[{}]}}"#, anchors.join(","));
        let desc = parse_description(&json).unwrap();
        assert_eq!(desc.node_count(), MAX_NODES);
        assert_eq!(desc.skipped_nodes, 3);
        let ids: Vec<i64> = desc.nodes.iter().map(|n| n.id.unwrap().0).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_object_anchor_is_default_record() {
        let desc = parse_description(r#"{"anchors":[7, {"id":2}]}"#).unwrap();
        assert_eq!(desc.nodes[0], NodeRecord::default());
        assert_eq!(desc.nodes[1].id, Some(NodeId(2)));
    }
}
