//! Line shapes of the collector log.
//!
//! Roots section:   <addr> <description>
//! Graph section:   <addr> <group-addr> <label>     (node declaration)
//!                  > <addr> <label>                (edge from current node)
//!
//! Example:
//! 0x7f1c2a3b4c50 0x7f1c20000000 JS Object (Window)
//! > 0x7f1c2a3b9d20 shape

use regex::Regex;

/// Section delimiter: exactly ten '='.
pub const SECTION_DELIMITER: &str = "==========";

/// A parsed graph section line, borrowing from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphLine<'a> {
    Node {
        addr: &'a str,
        group: &'a str,
        label: &'a str,
    },
    Edge {
        addr: &'a str,
        label: &'a str,
    },
}

/// Compiled patterns for one parse.
pub struct LinePatterns {
    root: Regex,
    node: Regex,
    edge: Regex,
}

impl LinePatterns {
    pub fn new() -> Result<Self, regex::Error> {
        // Addresses are hex, optionally 0x-prefixed. The group token always
        // carries 0x, so two bare words never read as a node declaration.
        // The free-text part after the separating space may be empty or
        // missing altogether.
        const ADDR: &str = r"(?:0x)?[0-9a-fA-F]+";
        const GROUP: &str = r"0x[0-9a-fA-F]+";
        Ok(Self {
            root: Regex::new(&format!(r"^({ADDR}) (.*)$"))?,
            node: Regex::new(&format!(r"^({ADDR}) ({GROUP})(?: (.*))?$"))?,
            edge: Regex::new(&format!(r"^> ({ADDR})(?: (.*))?$"))?,
        })
    }

    /// Split a roots section line into (addr, description).
    pub fn root<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.root.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    /// Classify a graph section line. Edges are tried first.
    pub fn graph<'a>(&self, line: &'a str) -> Option<GraphLine<'a>> {
        if let Some(caps) = self.edge.captures(line) {
            return Some(GraphLine::Edge {
                addr: caps.get(1)?.as_str(),
                label: caps.get(2).map_or("", |m| m.as_str()),
            });
        }
        let caps = self.node.captures(line)?;
        Some(GraphLine::Node {
            addr: caps.get(1)?.as_str(),
            group: caps.get(2)?.as_str(),
            label: caps.get(3).map_or("", |m| m.as_str()),
        })
    }
}
