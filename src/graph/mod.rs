//! Graph layer: node identity, graph shapes and the attribute bundle.
//!
//! Everything here works on parsed data only; neither the log format nor
//! any output format leaks in. Contents:
//! - NodeId (log address)
//! - Multigraph / SimpleGraph / ReverseGraph aliases
//! - GraphAttribs (labels, groups, roots)
//! - collapse / reverse transformations

pub mod node;
pub mod ops;

pub use node::NodeId;
pub use ops::{collapse, reverse, reverse_multigraph};

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Source -> (destination -> number of edges seen between the pair).
///
/// Every declared node is a key, even when it has no outgoing edges.
pub type Multigraph = BTreeMap<NodeId, BTreeMap<NodeId, u32>>;

/// Source -> distinct destinations.
pub type SimpleGraph = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// Destination -> sources pointing at it. Nodes with no predecessors are absent.
pub type ReverseGraph = BTreeMap<NodeId, BTreeSet<NodeId>>;

/// Root strength as inferred from the roots section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootColor {
    /// Definitely live.
    Black,
    /// Conservatively live.
    Gray,
}

impl RootColor {
    pub fn is_black(self) -> bool {
        self == RootColor::Black
    }
}

/// Root membership and color. Membership implies the node is a root.
pub type RootSet = BTreeMap<NodeId, RootColor>;

/// Everything the log says about nodes and edges besides the edge counts.
///
/// All maps are partial: a missing entry means "unknown", which callers must
/// keep apart from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphAttribs {
    pub node_labels: BTreeMap<NodeId, String>,
    pub groups: BTreeMap<NodeId, String>,
    pub edge_labels: BTreeMap<NodeId, BTreeMap<NodeId, Vec<String>>>,
    pub roots: RootSet,
    pub root_labels: BTreeMap<NodeId, String>,
}

impl GraphAttribs {
    pub fn label(&self, node: &NodeId) -> Option<&str> {
        self.node_labels.get(node).map(String::as_str)
    }

    pub fn root_label(&self, node: &NodeId) -> Option<&str> {
        self.root_labels.get(node).map(String::as_str)
    }

    /// Labels recorded on the edges from `src` to `dst`, in log order.
    pub fn edge_labels(&self, src: &NodeId, dst: &NodeId) -> &[String] {
        self.edge_labels
            .get(src)
            .and_then(|dsts| dsts.get(dst))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_root(&self, node: &NodeId) -> bool {
        self.roots.contains_key(node)
    }
}
