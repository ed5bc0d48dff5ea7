//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::state_machine::MachineDefinition;
use crate::{Diagram, Result};
use std::path::{Path, PathBuf};

fn load_definition(path: &Path) -> Result<MachineDefinition> {
    tracing::info!("Loading definition from {:?}", path);
    let definition = MachineDefinition::from_file(path)?;
    tracing::info!(
        "Found {} states and {} events",
        definition.states.len(),
        definition.events.len()
    );
    Ok(definition)
}

/// Render command implementation
pub mod render {
    use super::*;
    use crate::cli::{OutputFormat, output};
    use crate::{Config, DiagramType};
    use std::io::Write;

    /// Execute the render command
    pub fn execute(
        definition: PathBuf,
        diagram_type: Option<String>,
        output_path: Option<PathBuf>,
        format: OutputFormat,
        config: &Config,
    ) -> Result<()> {
        let machine = load_definition(&definition)?;

        let diagram_type = diagram_type
            .map(DiagramType::from)
            .unwrap_or_else(|| config.diagram.diagram_type.clone());
        let diagram = Diagram::with_type(&machine, diagram_type);

        let output_path = output_path.or_else(|| config.diagram.output.clone());

        match (format, output_path) {
            // The persisted form goes through the diagram's own save
            (OutputFormat::Mermaid, Some(path)) => diagram.save(path),
            (format, Some(path)) => {
                let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
                write_format(&mut file, format, &diagram)?;
                file.flush()?;
                tracing::info!("Output written to {:?}", path);
                Ok(())
            }
            (format, None) => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                write_format(&mut lock, format, &diagram)
            }
        }
    }

    fn write_format(
        w: &mut impl Write,
        format: OutputFormat,
        diagram: &Diagram,
    ) -> Result<()> {
        match format {
            OutputFormat::Mermaid => output::output_mermaid(w, diagram),
            OutputFormat::Inline => output::output_inline(w, diagram),
            OutputFormat::Json => output::output_json(w, diagram),
            OutputFormat::Table => output::output_table(w, diagram.graph()),
        }
    }

}

/// Inspect command implementation
pub mod inspect {
    use super::*;
    use crate::Graph;
    use crate::cli::output;

    /// Execute the inspect command
    pub fn execute(definition: PathBuf) -> Result<()> {
        let machine = load_definition(&definition)?;
        let graph = Graph::build(&machine);

        if let Some(name) = &machine.name {
            println!("Machine: {}", name);
        }

        let stdout = std::io::stdout();
        output::output_table(&mut stdout.lock(), &graph)
    }
}
