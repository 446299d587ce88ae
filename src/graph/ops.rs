//! Pure graph transformations used before root search.

use crate::graph::{Multigraph, ReverseGraph, SimpleGraph};

/// Drop edge multiplicities, keeping one membership per (src, dst) pair.
///
/// Sources with no outgoing edges are kept as keys with an empty set.
pub fn collapse(graph: &Multigraph) -> SimpleGraph {
    graph
        .iter()
        .map(|(src, dsts)| (src.clone(), dsts.keys().cloned().collect()))
        .collect()
}

/// Build the predecessor map of a simple graph.
pub fn reverse(graph: &SimpleGraph) -> ReverseGraph {
    let mut out = ReverseGraph::new();
    for (src, dsts) in graph {
        for dst in dsts {
            out.entry(dst.clone()).or_default().insert(src.clone());
        }
    }
    out
}

/// Reverse a multigraph, keeping multiplicities and every source as a key.
///
/// Unlike [`reverse`], applying this twice gives back the input exactly as
/// long as every destination is itself a key. An edge to an undeclared node
/// leaves that node as an extra key with no edges after the round trip.
pub fn reverse_multigraph(graph: &Multigraph) -> Multigraph {
    let mut out = Multigraph::new();
    for (src, dsts) in graph {
        out.entry(src.clone()).or_default();
        for (dst, count) in dsts {
            out.entry(dst.clone())
                .or_default()
                .insert(src.clone(), *count);
        }
    }
    out
}
