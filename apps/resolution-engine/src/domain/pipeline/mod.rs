//! Pipeline Graph Types and Input Extraction
//!
//! A strategy is modeled on the canvas as a directed graph of processing
//! nodes. Filter nodes carry an ordered condition list; each condition
//! either compares against a static literal or against a named runtime
//! input the user supplies when running the strategy.
//!
//! Node payloads are typed variants: only `filter` nodes carry conditions,
//! and every other node kind collapses to [`NodeKind::Other`] at
//! deserialization time. Shape validation therefore happens when a graph
//! document is parsed, and [`extract_inputs`] can match exhaustively.

use serde::{Deserialize, Serialize};

// =============================================================================
// Graph Types
// =============================================================================

/// A strategy pipeline: an ordered list of nodes.
///
/// Node ids are unique within one graph; the strategy store owns that
/// invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineGraph {
    /// Nodes in canvas order.
    #[serde(default)]
    pub nodes: Vec<PipelineNode>,
}

/// One node of a pipeline graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineNode {
    /// Node identifier, unique within the graph.
    pub id: String,
    /// The node's typed payload.
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Typed node payload, tagged by the store's `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    /// A filter node: an ordered list of conditions applied to transactions.
    Filter {
        /// Conditions in canvas order. Absent in the document means none.
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    /// Any other node kind. Carries no user-configurable inputs.
    #[serde(other)]
    Other,
}

/// How a condition's comparison value is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionValueType {
    /// Compare against the literal `value`.
    #[default]
    Static,
    /// Compare against a named runtime input supplied by the user.
    Input,
}

/// One filter predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Literal vs. input-bound evaluation. Absent means static.
    #[serde(default)]
    pub value_type: ConditionValueType,
    /// The literal value, doubling as the input's default.
    #[serde(default)]
    pub value: Option<String>,
    /// User-facing name for an input-bound condition.
    #[serde(default)]
    pub input_label: Option<String>,
}

// =============================================================================
// Input Extraction
// =============================================================================

/// A user-configurable input binding discovered in a pipeline graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineInputDef {
    /// Positional identity: `{node_id}_{cond_index}`.
    ///
    /// Unique within one graph while node ids are unique, and stable while
    /// node ids and condition order are unchanged. Reordering, inserting,
    /// or removing conditions reassigns keys.
    pub input_key: String,
    /// Display label: the condition's label, or `Filter {n}` by position.
    pub label: String,
    /// Default value shown to the user (the condition's literal, or empty).
    pub default_value: String,
    /// Id of the node the condition belongs to.
    pub node_id: String,
    /// Index of the condition within its node's condition list.
    pub cond_index: usize,
}

/// Walk a pipeline graph and collect every input-bound condition.
///
/// Output order is node order, then condition order within a node, so the
/// result is deterministic for a fixed graph. An absent graph yields no
/// inputs. Pure and infallible.
#[must_use]
pub fn extract_inputs(graph: Option<&PipelineGraph>) -> Vec<PipelineInputDef> {
    let Some(graph) = graph else {
        return Vec::new();
    };

    let mut inputs = Vec::new();
    for node in &graph.nodes {
        let NodeKind::Filter { conditions } = &node.kind else {
            continue;
        };
        for (index, condition) in conditions.iter().enumerate() {
            if condition.value_type != ConditionValueType::Input {
                continue;
            }
            inputs.push(PipelineInputDef {
                input_key: format!("{}_{index}", node.id),
                label: condition
                    .input_label
                    .clone()
                    .unwrap_or_else(|| format!("Filter {}", index + 1)),
                default_value: condition.value.clone().unwrap_or_default(),
                node_id: node.id.clone(),
                cond_index: index,
            });
        }
    }
    inputs
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input_condition(label: Option<&str>, value: Option<&str>) -> Condition {
        Condition {
            value_type: ConditionValueType::Input,
            value: value.map(str::to_string),
            input_label: label.map(str::to_string),
        }
    }

    fn filter_node(id: &str, conditions: Vec<Condition>) -> PipelineNode {
        PipelineNode {
            id: id.to_string(),
            kind: NodeKind::Filter { conditions },
        }
    }

    #[test]
    fn absent_graph_yields_no_inputs() {
        assert!(extract_inputs(None).is_empty());
    }

    #[test]
    fn empty_graph_yields_no_inputs() {
        let graph = PipelineGraph::default();
        assert!(extract_inputs(Some(&graph)).is_empty());
    }

    #[test]
    fn static_conditions_are_skipped() {
        let graph = PipelineGraph {
            nodes: vec![filter_node(
                "n1",
                vec![Condition::default(), Condition::default()],
            )],
        };
        assert!(extract_inputs(Some(&graph)).is_empty());
    }

    #[test]
    fn input_conditions_keyed_by_position() {
        let graph = PipelineGraph {
            nodes: vec![
                filter_node(
                    "n1",
                    vec![Condition::default(), input_condition(Some("Size"), None)],
                ),
                filter_node("n2", vec![input_condition(None, Some("42"))]),
            ],
        };

        let inputs = extract_inputs(Some(&graph));
        assert_eq!(inputs.len(), 2);

        assert_eq!(inputs[0].input_key, "n1_1");
        assert_eq!(inputs[0].label, "Size");
        assert_eq!(inputs[0].default_value, "");
        assert_eq!(inputs[0].node_id, "n1");
        assert_eq!(inputs[0].cond_index, 1);

        assert_eq!(inputs[1].input_key, "n2_0");
        assert_eq!(inputs[1].label, "Filter 1");
        assert_eq!(inputs[1].default_value, "42");
    }

    #[test]
    fn non_filter_nodes_are_skipped() {
        let graph = PipelineGraph {
            nodes: vec![
                PipelineNode {
                    id: "src".to_string(),
                    kind: NodeKind::Other,
                },
                filter_node("f1", vec![input_condition(None, None)]),
            ],
        };

        let inputs = extract_inputs(Some(&graph));
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].input_key, "f1_0");
    }

    #[test]
    fn unknown_node_type_deserializes_as_other() {
        let node: PipelineNode =
            serde_json::from_str(r#"{"id": "n9", "type": "indicator", "period": 14}"#).unwrap();
        assert!(matches!(node.kind, NodeKind::Other));
    }

    #[test]
    fn filter_node_without_conditions_deserializes_empty() {
        let node: PipelineNode = serde_json::from_str(r#"{"id": "n1", "type": "filter"}"#).unwrap();
        let NodeKind::Filter { conditions } = node.kind else {
            panic!("expected filter node");
        };
        assert!(conditions.is_empty());
    }

    #[test]
    fn condition_value_type_defaults_to_static() {
        let condition: Condition = serde_json::from_str(r#"{"value": "100"}"#).unwrap();
        assert_eq!(condition.value_type, ConditionValueType::Static);
        assert_eq!(condition.value.as_deref(), Some("100"));
    }
}
