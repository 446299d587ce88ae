//! Backward search from a target to the roots that keep it alive.
//!
//! The search is a depth-first walk over the reverse graph with a single
//! visited set for the whole query. Each node is expanded once, so a node
//! reachable from several roots only contributes the path found first. The
//! walk does not stop at the first root; it keeps going to find roots
//! reachable through other, not yet visited, predecessors.

use crate::graph::{GraphAttribs, NodeId, ReverseGraph, SimpleGraph};
use serde::Serialize;
use std::collections::BTreeMap;

/// One edge of a rooting path, pointing from the root side toward the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
}

/// Chain of hops from `root` to `target`. Empty when the target is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootingPath {
    pub root: NodeId,
    pub target: NodeId,
    pub hops: Vec<Hop>,
}

impl RootingPath {
    /// Nodes along the path, root first and target last.
    pub fn nodes(&self) -> Vec<&NodeId> {
        let mut out = vec![&self.root];
        out.extend(self.hops.iter().map(|h| &h.to));
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Ignore gray roots.
    pub black_roots_only: bool,
}

/// Paths found by one search plus the nodes it expanded.
#[derive(Debug, Clone, Default)]
pub struct RootSearch {
    pub paths: Vec<RootingPath>,
    /// Visited node -> the node it was reached from (None for the target).
    pub visited: BTreeMap<NodeId, Option<NodeId>>,
}

/// What happened for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NotInGraph,
    NoPredecessors,
    NoRootsFound,
    Found(Vec<RootingPath>),
}

/// Run the visited-once search from `target` over `reverse`.
pub fn find_rooting_paths(
    reverse: &ReverseGraph,
    attribs: &GraphAttribs,
    target: &NodeId,
    options: SearchOptions,
) -> RootSearch {
    let mut search = RootSearch::default();

    // Worklist of (node, node it was reached from). Predecessors are pushed in
    // reverse so they pop in ascending order, as a recursive walk would.
    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(target.clone(), None)];

    while let Some((node, parent)) = stack.pop() {
        if search.visited.contains_key(&node) {
            continue;
        }
        search.visited.insert(node.clone(), parent);

        let is_root = attribs
            .roots
            .get(&node)
            .is_some_and(|color| !options.black_roots_only || color.is_black());
        if is_root {
            search.paths.push(path_to_target(&search.visited, &node, target));
        }

        let Some(preds) = reverse.get(&node) else {
            continue;
        };
        for pred in preds.iter().rev() {
            if !search.visited.contains_key(pred) {
                stack.push((pred.clone(), Some(node.clone())));
            }
        }
    }

    search
}

/// Follow the reached-from links from `root` back to `target`.
fn path_to_target(
    visited: &BTreeMap<NodeId, Option<NodeId>>,
    root: &NodeId,
    target: &NodeId,
) -> RootingPath {
    let mut hops = Vec::new();
    let mut cur = root;
    while let Some(Some(next)) = visited.get(cur) {
        hops.push(Hop {
            from: cur.clone(),
            to: next.clone(),
        });
        cur = next;
    }
    RootingPath {
        root: root.clone(),
        target: target.clone(),
        hops,
    }
}

/// Root search over one graph, reporting per-target outcomes.
pub struct RootFinder<'g> {
    graph: &'g SimpleGraph,
    reverse: &'g ReverseGraph,
    attribs: &'g GraphAttribs,
    options: SearchOptions,
}

impl<'g> RootFinder<'g> {
    pub fn new(
        graph: &'g SimpleGraph,
        reverse: &'g ReverseGraph,
        attribs: &'g GraphAttribs,
        options: SearchOptions,
    ) -> Self {
        Self {
            graph,
            reverse,
            attribs,
            options,
        }
    }

    pub fn search(&self, target: &NodeId) -> SearchOutcome {
        if !self.graph.contains_key(target) {
            return SearchOutcome::NotInGraph;
        }

        let eligible_root = self
            .attribs
            .roots
            .get(target)
            .is_some_and(|color| !self.options.black_roots_only || color.is_black());
        if !self.reverse.contains_key(target) && !eligible_root {
            return SearchOutcome::NoPredecessors;
        }

        let result = find_rooting_paths(self.reverse, self.attribs, target, self.options);
        tracing::debug!(
            node = %target,
            visited = result.visited.len(),
            paths = result.paths.len(),
            "root search finished"
        );
        if result.paths.is_empty() {
            SearchOutcome::NoRootsFound
        } else {
            SearchOutcome::Found(result.paths)
        }
    }
}
