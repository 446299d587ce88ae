//! Graphviz output for a merged path set.
//!
//! Render with e.g. `sfdp -Gsize=67! -Goverlap=prism -Tpdf -O graph.dot`.

use crate::graph::GraphAttribs;
use crate::merge::PathGraph;
use std::fmt::Write;

/// Longest label drawn inside a node, in characters.
const MAX_LABEL_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeStyle {
    label: String,
    shape: &'static str,
    color: &'static str,
}

/// Pick a shape and color from the label and shorten the label to match.
fn classify(label: &str) -> NodeStyle {
    let (label, shape, color) = if let Some(rest) = label.strip_prefix("Object") {
        (rest.to_string(), "square", "black")
    } else if let Some(rest) = label.strip_prefix("Function") {
        (rest.trim_start_matches(' ').to_string(), "ellipse", "black")
    } else if let Some(rest) = label.strip_prefix("HTML") {
        (rest.to_string(), "diamond", "blue")
    } else if let Some(rest) = label.strip_prefix("XPCWrappedNative") {
        (format!("XPCWN{rest}"), "diamond", "black")
    } else if label.starts_with("script") {
        let rest = label
            .strip_prefix("script app://system.gaiamobile.org/")
            .or_else(|| label.strip_prefix("script "))
            .unwrap_or(&label["script".len()..]);
        (rest.to_string(), "ellipse", "red")
    } else {
        (label.to_string(), "circle", "black")
    };

    let label = label.strip_suffix(" <no private>").unwrap_or(label.as_str());
    NodeStyle {
        label: label.chars().take(MAX_LABEL_CHARS).collect(),
        shape,
        color,
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render `graph` as a dot digraph. Node ids are the addresses prefixed
/// with `q` so they are valid identifiers.
pub fn render_dot(graph: &PathGraph, attribs: &GraphAttribs) -> String {
    let mut out = String::from("digraph {\n");

    for node in &graph.nodes {
        let style = classify(attribs.label(node).unwrap_or(""));
        let _ = writeln!(
            out,
            "  node [color = {}, shape = {}, label=\"{}\"] q{};",
            style.color,
            style.shape,
            escape(&style.label),
            node
        );
    }

    for (src, dsts) in &graph.edges {
        for dst in dsts {
            let _ = writeln!(out, "  q{} -> q{};", src, dst);
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, BTreeSet};

    fn style(label: &str, shape: &'static str, color: &'static str) -> NodeStyle {
        NodeStyle {
            label: label.to_string(),
            shape,
            color,
        }
    }

    #[test]
    fn classifies_by_label_prefix() {
        assert_eq!(classify("Object (Array)"), style(" (Array)", "square", "black"));
        assert_eq!(classify("Function onload"), style("onload", "ellipse", "black"));
        assert_eq!(classify("HTMLDivElement"), style("DivElement", "diamond", "blue"));
        assert_eq!(
            classify("XPCWrappedNative (Window)"),
            style("XPCWN (Window)", "diamond", "black")
        );
        assert_eq!(
            classify("script app://system.gaiamobile.org/js/app.js"),
            style("js/app.js", "ellipse", "red")
        );
        assert_eq!(classify("script foo.js"), style("foo.js", "ellipse", "red"));
        assert_eq!(classify("nsDocument"), style("nsDocument", "circle", "black"));
    }

    #[test]
    fn strips_no_private_and_truncates() {
        assert_eq!(
            classify("Object Window <no private>"),
            style(" Window", "square", "black")
        );
        assert_eq!(
            classify("nsGenericElement (xhtml) div"),
            style("nsGenericElemen", "circle", "black")
        );
    }

    #[test]
    fn renders_nodes_then_edges() {
        let n = |s: &str| NodeId::from(s);
        let mut attribs = GraphAttribs::default();
        attribs.node_labels.insert(n("0x1"), "Object \"quoted\"".to_string());
        let graph = PathGraph {
            nodes: BTreeSet::from([n("0x1"), n("0x2")]),
            edges: BTreeMap::from([(n("0x1"), BTreeSet::from([n("0x2")]))]),
        };

        assert_eq!(
            render_dot(&graph, &attribs),
            "digraph {\n\
             \x20 node [color = black, shape = square, label=\" \\\"quoted\\\"\"] q0x1;\n\
             \x20 node [color = black, shape = circle, label=\"\"] q0x2;\n\
             \x20 q0x1 -> q0x2;\n\
             }\n"
        );
    }
}
