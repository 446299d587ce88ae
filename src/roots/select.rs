//! Turning a command-line target string into graph nodes.

use crate::graph::{GraphAttribs, NodeId, SimpleGraph};
use regex::Regex;

/// Label prefix the collector uses for string values.
const STRING_LABEL_PREFIX: &str = "string ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// A single object by address.
    Address(NodeId),
    /// Every object whose label starts with this text (usually a class name).
    LabelPrefix(String),
    /// Every string object whose contents equal this text.
    StringValue(String),
}

impl TargetSpec {
    /// Interpret a raw target. A target made only of hex digits (optionally
    /// 0x-prefixed) is an address; anything else is a label prefix.
    pub fn parse(raw: &str, string_mode: bool) -> Result<Self, regex::Error> {
        if string_mode {
            return Ok(TargetSpec::StringValue(raw.to_string()));
        }
        let addr = Regex::new(r"^(?:0x)?[0-9a-fA-F]+$")?;
        Ok(if addr.is_match(raw) {
            TargetSpec::Address(NodeId::new(raw))
        } else {
            TargetSpec::LabelPrefix(raw.to_string())
        })
    }
}

/// Resolve a target spec against the graph.
///
/// Addresses are returned as-is even when absent from the graph, so that the
/// caller can report them as missing.
pub fn select_targets(graph: &SimpleGraph, attribs: &GraphAttribs, spec: &TargetSpec) -> Vec<NodeId> {
    match spec {
        TargetSpec::Address(addr) => vec![addr.clone()],
        TargetSpec::LabelPrefix(prefix) => graph
            .keys()
            .filter(|node| attribs.label(node).unwrap_or("").starts_with(prefix.as_str()))
            .cloned()
            .collect(),
        TargetSpec::StringValue(value) => attribs
            .node_labels
            .iter()
            .filter(|(_, label)| label.strip_prefix(STRING_LABEL_PREFIX) == Some(value.as_str()))
            .map(|(node, _)| node.clone())
            .collect(),
    }
}
