//! Human-readable path output, plus the notices printed for targets
//! without paths.

use crate::graph::{GraphAttribs, NodeId};
use crate::roots::{RootingPath, SearchOutcome};
use regex::Regex;
use std::fmt::Write;

/// Shown in place of a label the log never gave.
const UNKNOWN: &str = "?";

fn node_label<'a>(attribs: &'a GraphAttribs, node: &NodeId) -> &'a str {
    attribs.label(node).unwrap_or(UNKNOWN)
}

fn root_label<'a>(attribs: &'a GraphAttribs, node: &NodeId) -> &'a str {
    attribs.root_label(node).unwrap_or(UNKNOWN)
}

/// `--[label, label]->`, or a bare `--->` when the edge is unlabelled.
fn edge(attribs: &GraphAttribs, from: &NodeId, to: &NodeId) -> String {
    let labels = attribs.edge_labels(from, to);
    if labels.is_empty() {
        "--->".to_string()
    } else {
        format!("--[{}]->", labels.join(", "))
    }
}

/// Multi-line rendering with addresses:
///
/// ```text
/// via nsDocument normal :
/// 0xa [nsDocument normal]
///     --[mScriptGlobalObject]-> 0xb [JS Object (Window)]
/// ```
pub fn render_path(attribs: &GraphAttribs, path: &RootingPath) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "via {} :", root_label(attribs, &path.root));
    for hop in &path.hops {
        let _ = write!(
            out,
            "{} [{}]\n    {} ",
            hop.from,
            node_label(attribs, &hop.from),
            edge(attribs, &hop.from, &hop.to)
        );
    }
    let _ = writeln!(out, "{} [{}]", path.target, node_label(attribs, &path.target));
    out.push('\n');
    out
}

/// Single-line rendering without addresses, so that paths from different
/// runs or objects can be compared with sort/uniq.
pub struct SimplePathRenderer {
    addr: Regex,
}

impl SimplePathRenderer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            addr: Regex::new(r"0x[0-9a-fA-F]+")?,
        })
    }

    pub fn render(&self, attribs: &GraphAttribs, path: &RootingPath) -> String {
        let mut out = String::new();
        let via = self.addr.replace_all(root_label(attribs, &path.root), "*");
        let _ = write!(out, "via {} : ", via);
        for hop in &path.hops {
            let _ = write!(
                out,
                "[{}], {} ",
                node_label(attribs, &hop.from),
                edge(attribs, &hop.from, &hop.to)
            );
        }
        let _ = writeln!(out, "[{}]", node_label(attribs, &path.target));
        out
    }
}

/// Notice for a target whose search produced no paths. `None` for `Found`.
pub fn render_notice(target: &NodeId, outcome: &SearchOutcome) -> Option<String> {
    match outcome {
        SearchOutcome::NotInGraph => Some(format!("{} is not in the graph.\n", target)),
        SearchOutcome::NoPredecessors => Some(format!("No other nodes point to {}.\n\n", target)),
        SearchOutcome::NoRootsFound => Some("No roots found.\n".to_string()),
        SearchOutcome::Found(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::Hop;
    use pretty_assertions::assert_eq;

    fn n(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn fixture() -> (GraphAttribs, RootingPath) {
        let mut a = GraphAttribs::default();
        a.node_labels.insert(n("0xa"), "nsDocument normal".to_string());
        a.node_labels.insert(n("0xb"), "JS Object (Window)".to_string());
        a.root_labels
            .insert(n("0xa"), "nsXPCWrappedJS 0x7f001234 (nsIObserver)".to_string());
        a.edge_labels
            .entry(n("0xa"))
            .or_default()
            .insert(n("0xb"), vec!["mGlobal".to_string(), "mOwner".to_string()]);
        let path = RootingPath {
            root: n("0xa"),
            target: n("0xc"),
            hops: vec![
                Hop {
                    from: n("0xa"),
                    to: n("0xb"),
                },
                Hop {
                    from: n("0xb"),
                    to: n("0xc"),
                },
            ],
        };
        (a, path)
    }

    #[test]
    fn plain_path_lists_addresses_and_edge_labels() {
        let (attribs, path) = fixture();
        assert_eq!(
            render_path(&attribs, &path),
            "via nsXPCWrappedJS 0x7f001234 (nsIObserver) :\n\
             0xa [nsDocument normal]\n    --[mGlobal, mOwner]-> \
             0xb [JS Object (Window)]\n    ---> \
             0xc [?]\n\n"
        );
    }

    #[test]
    fn simple_path_hides_addresses() {
        let (attribs, path) = fixture();
        let r = SimplePathRenderer::new().unwrap();
        assert_eq!(
            r.render(&attribs, &path),
            "via nsXPCWrappedJS * (nsIObserver) : [nsDocument normal], --[mGlobal, mOwner]-> \
             [JS Object (Window)], ---> [?]\n"
        );
    }

    #[test]
    fn target_that_is_a_root_renders_alone() {
        let (attribs, _) = fixture();
        let path = RootingPath {
            root: n("0xa"),
            target: n("0xa"),
            hops: vec![],
        };
        assert_eq!(
            render_path(&attribs, &path),
            "via nsXPCWrappedJS 0x7f001234 (nsIObserver) :\n0xa [nsDocument normal]\n\n"
        );
    }

    #[test]
    fn notices_for_targets_without_paths() {
        let t = n("0xa");
        assert_eq!(
            render_notice(&t, &SearchOutcome::NotInGraph).as_deref(),
            Some("0xa is not in the graph.\n")
        );
        assert_eq!(
            render_notice(&t, &SearchOutcome::NoPredecessors).as_deref(),
            Some("No other nodes point to 0xa.\n\n")
        );
        assert_eq!(
            render_notice(&t, &SearchOutcome::NoRootsFound).as_deref(),
            Some("No roots found.\n")
        );
        assert_eq!(render_notice(&t, &SearchOutcome::Found(vec![])), None);
    }
}
