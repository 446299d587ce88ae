//! Output formats for search results and graphs.
//!
//! Renderers only format; they never change which paths were found.

pub mod dot;
pub mod dump;
pub mod text;

pub use dot::render_dot;
pub use dump::render_dump;
pub use text::{SimplePathRenderer, render_notice, render_path};

use crate::graph::NodeId;
use crate::roots::{RootingPath, SearchOutcome};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    NotInGraph,
    NoPredecessors,
    NoRootsFound,
    Found,
}

/// Per-target record for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub target: NodeId,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<RootingPath>,
}

impl TargetReport {
    pub fn new(target: NodeId, outcome: SearchOutcome) -> Self {
        let (outcome, paths) = match outcome {
            SearchOutcome::NotInGraph => (OutcomeKind::NotInGraph, vec![]),
            SearchOutcome::NoPredecessors => (OutcomeKind::NoPredecessors, vec![]),
            SearchOutcome::NoRootsFound => (OutcomeKind::NoRootsFound, vec![]),
            SearchOutcome::Found(paths) => (OutcomeKind::Found, paths),
        };
        Self {
            target,
            outcome,
            paths,
        }
    }
}

/// Render search results as pretty-printed JSON.
pub fn render_json(reports: &[TargetReport]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
