//! Output formatting module
//!
//! This module handles formatting diagrams and graph statistics for the
//! different output formats.

use crate::{Diagram, Graph, Result};
use serde_json::json;

/// Output the diagram one statement per line
pub fn output_mermaid(w: &mut impl std::io::Write, diagram: &Diagram) -> Result<()> {
    diagram.write_to(w)
}

/// Output the diagram as a single `;`-joined line
pub fn output_inline(w: &mut impl std::io::Write, diagram: &Diagram) -> Result<()> {
    writeln!(w, "{}", diagram)?;
    Ok(())
}

/// Output the graph as JSON
pub fn output_json(w: &mut impl std::io::Write, diagram: &Diagram) -> Result<()> {
    let output = json!({
        "type": diagram.diagram_type(),
        "summary": diagram.graph().stats(),
        "nodes": diagram.graph(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output graph statistics as text table
pub fn output_table(w: &mut impl std::io::Write, graph: &Graph) -> Result<()> {
    let stats = graph.stats();

    writeln!(w, "State Machine Flowchart - Graph Summary")?;
    writeln!(w, "{}", "=".repeat(60))?;
    writeln!(w)?;

    writeln!(w, "Summary:")?;
    writeln!(w, "  Total States:      {}", stats.total_states)?;
    writeln!(w, "  Total Transitions: {}", stats.total_transitions)?;
    writeln!(w, "  Isolated States:   {}", stats.isolated_states)?;
    writeln!(w)?;

    if !graph.is_empty() {
        writeln!(w, "States:")?;
        writeln!(w, "{:-<60}", "")?;
        writeln!(w, "{:<30} {:>12}", "State", "Outgoing")?;
        writeln!(w, "{:-<60}", "")?;

        for (node, edges) in graph.nodes() {
            let name = if node.chars().count() > 28 {
                format!("{}...", node.chars().take(25).collect::<String>())
            } else {
                node.to_string()
            };
            writeln!(w, "{:<30} {:>12}", name, edges.len())?;
        }
    }

    Ok(())
}
