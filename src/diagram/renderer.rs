//! Flowchart rendering
//!
//! Turns a [`Graph`] into Mermaid flowchart lines. Names and labels are
//! emitted verbatim, without escaping.

use super::Graph;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Separator between statements in the flowchart dialect
pub const STATEMENT_SEPARATOR: &str = ";";

/// Layout token placed after `flowchart` in the header (LR, TD, ...)
///
/// The token is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramType(String);

impl DiagramType {
    pub const LEFT_TO_RIGHT: &'static str = "LR";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DiagramType {
    fn default() -> Self {
        Self::new(Self::LEFT_TO_RIGHT)
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiagramType {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for DiagramType {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Render the graph as flowchart statements, one per line, without separators.
pub fn render(graph: &Graph, diagram_type: &DiagramType) -> Vec<String> {
    let mut lines = vec![format!("flowchart {}", diagram_type)];

    for (node, edges) in graph.nodes() {
        if edges.is_empty() {
            lines.push(node.to_string());
            continue;
        }

        for edge in edges {
            lines.push(format!("{} -->|{}|{}", node, edge.label, edge.to));
        }
    }

    lines
}

/// Join rendered lines into the single-string form.
pub fn render_string(lines: &[String]) -> String {
    lines.join(STATEMENT_SEPARATOR)
}

/// Write each line terminated by the separator and a newline.
pub fn write_lines(w: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(w, "{}{}", line, STATEMENT_SEPARATOR)?;
    }
    Ok(())
}

/// Persist rendered lines to `path`, creating or truncating the file.
///
/// I/O failures are returned as-is; a failed write may leave a truncated file.
pub fn save(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, lines)?;
    writer.flush()?;

    tracing::info!("Diagram saved to {:?} ({} lines)", path, lines.len());
    Ok(())
}
