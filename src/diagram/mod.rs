//! Diagram module - Build a flowchart graph from a state machine and render it

use crate::{Result, state_machine::StateMachine};
use std::fmt;
use std::path::Path;

pub mod graph;
pub mod renderer;

// Re-export key types
pub use graph::{Edge, Graph, GraphStats};
pub use renderer::DiagramType;

/// A rendered flowchart for one state machine snapshot.
///
/// The graph and its lines are computed once at construction; `Display`
/// yields the `;`-joined form and [`Diagram::save`] the line-terminated one.
#[derive(Debug, Clone)]
pub struct Diagram {
    graph: Graph,
    diagram_type: DiagramType,
    lines: Vec<String>,
}

impl Diagram {
    /// Left-to-right diagram of `machine`
    pub fn new(machine: &impl StateMachine) -> Self {
        Self::with_type(machine, DiagramType::default())
    }

    pub fn with_type(machine: &impl StateMachine, diagram_type: impl Into<DiagramType>) -> Self {
        Self::from_graph(Graph::build(machine), diagram_type)
    }

    pub fn from_graph(graph: Graph, diagram_type: impl Into<DiagramType>) -> Self {
        let diagram_type = diagram_type.into();
        let lines = renderer::render(&graph, &diagram_type);
        Self {
            graph,
            diagram_type,
            lines,
        }
    }

    /// Build, render and immediately persist to `path`
    pub fn generate(
        machine: &impl StateMachine,
        path: impl AsRef<Path>,
        diagram_type: impl Into<DiagramType>,
    ) -> Result<Self> {
        let diagram = Self::with_type(machine, diagram_type);
        diagram.save(path)?;
        Ok(diagram)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn diagram_type(&self) -> &DiagramType {
        &self.diagram_type
    }

    /// Rendered statements without separators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the line-terminated form to any writer
    pub fn write_to(&self, w: &mut impl std::io::Write) -> Result<()> {
        renderer::write_lines(w, &self.lines)
    }

    /// Persist to `path`, creating or overwriting the file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        renderer::save(path, &self.lines)
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&renderer::render_string(&self.lines))
    }
}
