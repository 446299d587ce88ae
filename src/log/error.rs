//! Errors raised while reading a collector log, and the non-fatal
//! unrecognized-line warning.

use crate::graph::NodeId;
use std::fmt;
use thiserror::Error;

/// Which part of the log a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Groups,
    Roots,
    Graph,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Groups => "groups",
            Section::Roots => "roots",
            Section::Graph => "graph",
        };
        f.write_str(name)
    }
}

/// Fatal problems found while parsing a collector log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("{section} section parse error at line {line_no}: cannot parse line: {line:?}")]
    MalformedLog {
        section: Section,
        line_no: usize,
        line: String,
    },

    #[error("node {node} declared twice (second declaration at line {line_no})")]
    DuplicateNodeDeclaration { line_no: usize, node: NodeId },

    #[error("edge at line {line_no} appears before any node declaration: {line:?}")]
    EdgeBeforeNode { line_no: usize, line: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// A graph section line that is neither a node nor an edge. Skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine {
    pub line_no: usize,
    pub line: String,
}

impl fmt::Display for UnrecognizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown line {}: {:?}", self.line_no, self.line)
    }
}
