//! Simplifying a set of rooting paths for drawing.
//!
//! Paths through JS objects tend to run through long chains of shape
//! (property descriptor) objects. Those carry little information in a
//! picture, so each chain is folded into a single node.

pub mod union_find;

pub use union_find::UnionFind;

use crate::graph::{GraphAttribs, NodeId};
use crate::roots::RootingPath;
use std::collections::{BTreeMap, BTreeSet};

/// Label of a descriptor node.
pub const DESCRIPTOR_LABEL: &str = "shape";
/// Label of the base descriptor a chain usually ends in.
pub const BASE_DESCRIPTOR_LABEL: &str = "base_shape";

/// Nodes and edges used by a set of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGraph {
    pub nodes: BTreeSet<NodeId>,
    pub edges: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl PathGraph {
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a RootingPath>) -> Self {
        let mut out = PathGraph::default();
        for path in paths {
            let nodes = path.nodes();
            out.nodes.extend(nodes.iter().map(|n| (*n).clone()));
            for pair in nodes.windows(2) {
                out.edges
                    .entry(pair[0].clone())
                    .or_default()
                    .insert(pair[1].clone());
            }
        }
        out
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}

/// Fold descriptor chains into one node each.
///
/// A descriptor is merged into the first of its successors that is itself a
/// descriptor or a base descriptor; the successor names the merged node.
/// Edges are rewritten to the surviving nodes and resulting self-loops
/// dropped.
pub fn merge_descriptor_chains(graph: &PathGraph, attribs: &GraphAttribs) -> PathGraph {
    let mut merged = UnionFind::new();

    for node in &graph.nodes {
        if attribs.label(node) != Some(DESCRIPTOR_LABEL) {
            continue;
        }
        let Some(succs) = graph.edges.get(node) else {
            continue;
        };
        let next = succs.iter().find(|succ| {
            matches!(
                attribs.label(succ),
                Some(DESCRIPTOR_LABEL) | Some(BASE_DESCRIPTOR_LABEL)
            )
        });
        if let Some(next) = next {
            merged.union(next, node);
        }
    }

    let members: Vec<NodeId> = merged.members().cloned().collect();
    let mut nodes = graph.nodes.clone();
    for x in &members {
        if merged.canonical(x) != *x {
            nodes.remove(x);
        }
    }

    let mut edges: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for (src, dsts) in &graph.edges {
        let src = merged.canonical(src);
        let mut new_dsts: BTreeSet<NodeId> = dsts.iter().map(|d| merged.canonical(d)).collect();
        new_dsts.remove(&src);
        edges.entry(src).or_default().extend(new_dsts);
    }

    tracing::debug!(
        before = graph.nodes.len(),
        after = nodes.len(),
        "merged descriptor chains"
    );
    PathGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::Hop;
    use pretty_assertions::assert_eq;

    fn n(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn path(nodes: &[&str]) -> RootingPath {
        let hops = nodes
            .windows(2)
            .map(|w| Hop {
                from: n(w[0]),
                to: n(w[1]),
            })
            .collect();
        RootingPath {
            root: n(nodes[0]),
            target: n(nodes[nodes.len() - 1]),
            hops,
        }
    }

    fn attribs(labels: &[(&str, &str)]) -> GraphAttribs {
        let mut a = GraphAttribs::default();
        for (node, label) in labels {
            a.node_labels.insert(n(node), label.to_string());
        }
        a
    }

    #[test]
    fn builds_nodes_and_edges_from_paths() {
        let paths = [path(&["r", "a", "t"]), path(&["t"]), path(&["q", "a", "t"])];
        let g = PathGraph::from_paths(&paths);
        assert_eq!(g.nodes.len(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges[&n("a")], BTreeSet::from([n("t")]));
    }

    #[test]
    fn shape_chain_collapses_into_its_last_member() {
        let paths = [path(&["obj", "s1", "s2", "base", "t"])];
        let labels = attribs(&[
            ("obj", "Object"),
            ("s1", "shape"),
            ("s2", "shape"),
            ("base", "base_shape"),
            ("t", "Function"),
        ]);

        let merged = merge_descriptor_chains(&PathGraph::from_paths(&paths), &labels);

        assert_eq!(
            merged.nodes,
            BTreeSet::from([n("base"), n("obj"), n("t")])
        );
        assert_eq!(merged.edges[&n("obj")], BTreeSet::from([n("base")]));
        assert_eq!(merged.edges[&n("base")], BTreeSet::from([n("t")]));
        assert_eq!(merged.edge_count(), 2);
    }

    #[test]
    fn shape_without_shape_successor_is_kept() {
        let paths = [path(&["s1", "obj", "s2"])];
        let labels = attribs(&[("s1", "shape"), ("obj", "Object"), ("s2", "shape")]);

        let g = PathGraph::from_paths(&paths);
        assert_eq!(merge_descriptor_chains(&g, &labels), g);
    }

    #[test]
    fn labels_must_match_exactly() {
        let paths = [path(&["s1", "s2"])];
        let labels = attribs(&[("s1", "shape"), ("s2", "shape (dictionary)")]);

        let g = PathGraph::from_paths(&paths);
        assert_eq!(merge_descriptor_chains(&g, &labels).nodes.len(), 2);
    }
}
