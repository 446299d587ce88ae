use crate::graph::{GraphAttribs, Multigraph, NodeId};
use crate::log::error::{LogError, Section, UnrecognizedLine};
use crate::log::line::{GraphLine, LinePatterns, SECTION_DELIMITER};
use crate::log::roots::RootClassifier;
use anyhow::Context;
use std::fs;

/// Result of parsing one collector log.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub graph: Multigraph,
    pub attribs: GraphAttribs,
    /// Graph section lines that were skipped.
    pub warnings: Vec<UnrecognizedLine>,
}

/// Read and parse a collector log file.
pub fn parse_log_file(path: &str) -> anyhow::Result<ParsedLog> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;
    tracing::info!(path, "parsing collector log");
    let parsed = parse_log(&text).with_context(|| format!("parse log file {}", path))?;
    tracing::info!(
        nodes = parsed.graph.len(),
        roots = parsed.attribs.roots.len(),
        skipped = parsed.warnings.len(),
        "done loading graph"
    );
    Ok(parsed)
}

/// Parse collector log text.
///
/// Sections are read strictly in order: groups (ignored), roots, graph.
/// The first two end at a line of ten '='. Running out of input early just
/// leaves the later sections empty.
pub fn parse_log(text: &str) -> Result<ParsedLog, LogError> {
    let patterns = LinePatterns::new()?;

    let mut section = Section::Groups;
    let mut classifier = RootClassifier::default();
    let mut builder = GraphBuilder::default();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        match section {
            Section::Groups => {
                if line == SECTION_DELIMITER {
                    section = Section::Roots;
                }
            }
            Section::Roots => {
                if let Some((addr, description)) = patterns.root(line) {
                    let color = classifier.classify(description);
                    let node = NodeId::new(addr);
                    builder.attribs.roots.insert(node.clone(), color);
                    builder
                        .attribs
                        .root_labels
                        .insert(node, description.to_string());
                } else if line == SECTION_DELIMITER {
                    section = Section::Graph;
                } else {
                    return Err(LogError::MalformedLog {
                        section,
                        line_no: lno,
                        line: line.to_string(),
                    });
                }
            }
            Section::Graph => match patterns.graph(line) {
                Some(GraphLine::Edge { addr, label }) => builder.add_edge(lno, line, addr, label)?,
                Some(GraphLine::Node { addr, group, label }) => {
                    builder.add_node(lno, addr, group, label)?
                }
                None => {
                    let warning = UnrecognizedLine {
                        line_no: lno,
                        line: line.to_string(),
                    };
                    tracing::warn!("{}", warning);
                    builder.warnings.push(warning);
                }
            },
        }
    }

    Ok(ParsedLog {
        graph: builder.edges,
        attribs: builder.attribs,
        warnings: builder.warnings,
    })
}

/// Accumulates the graph section; edges attach to the last declared node.
#[derive(Default)]
struct GraphBuilder {
    edges: Multigraph,
    attribs: GraphAttribs,
    warnings: Vec<UnrecognizedLine>,
    current: Option<NodeId>,
}

impl GraphBuilder {
    fn add_node(&mut self, lno: usize, addr: &str, group: &str, label: &str) -> Result<(), LogError> {
        let node = NodeId::new(addr);
        if self.edges.contains_key(&node) {
            return Err(LogError::DuplicateNodeDeclaration { line_no: lno, node });
        }
        self.edges.insert(node.clone(), Default::default());
        self.attribs.groups.insert(node.clone(), group.to_string());
        if !label.is_empty() {
            self.attribs.node_labels.insert(node.clone(), label.to_string());
        }
        self.current = Some(node);
        Ok(())
    }

    fn add_edge(&mut self, lno: usize, line: &str, addr: &str, label: &str) -> Result<(), LogError> {
        let Some(src) = self.current.as_ref() else {
            return Err(LogError::EdgeBeforeNode {
                line_no: lno,
                line: line.to_string(),
            });
        };
        let dst = NodeId::new(addr);

        *self
            .edges
            .entry(src.clone())
            .or_default()
            .entry(dst.clone())
            .or_insert(0) += 1;

        if !label.is_empty() {
            self.attribs
                .edge_labels
                .entry(src.clone())
                .or_default()
                .entry(dst)
                .or_default()
                .push(label.to_string());
        }
        Ok(())
    }
}
