//! Raw graph listing for eyeballing small logs.

use crate::graph::{GraphAttribs, Multigraph};
use std::fmt::Write;

/// One line per node: `R ` marks roots, and each destination is repeated
/// once per edge. A root list follows.
pub fn render_dump(graph: &Multigraph, attribs: &GraphAttribs) -> String {
    let mut out = String::new();
    for (node, dsts) in graph {
        let marker = if attribs.is_root(node) { "R" } else { " " };
        let _ = write!(out, "{} {}: ", marker, node);
        for (dst, count) in dsts {
            for _ in 0..*count {
                let _ = write!(out, "{}, ", dst);
            }
        }
        out.push('\n');
    }

    out.push_str("Roots: ");
    for (root, color) in &attribs.roots {
        let _ = write!(out, "{} ({:?}), ", root, color);
    }
    out.push('\n');
    out
}
