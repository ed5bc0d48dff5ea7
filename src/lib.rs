//! Finite State Machine Flowchart Generator
//!
//! Converts a state machine description (states, events, transitions) into a
//! Mermaid flowchart.
//!
//! This library provides functionality for:
//! - Loading state machine definitions from TOML or JSON files
//! - Building an ordered graph of states and labeled edges
//! - Rendering the graph as flowchart markup, as a string or to a file
//!
//! ```
//! use fsm_flowchart::{Diagram, state_machine::{Event, MachineDefinition}};
//!
//! let machine = MachineDefinition::new()
//!     .with_states(["sleeping", "running"])
//!     .with_event(Event::new("run").with_transition("sleeping", "running"));
//!
//! let diagram = Diagram::new(&machine);
//! assert_eq!(diagram.to_string(), "flowchart LR;sleeping -->|run|running;running");
//! ```

pub mod cli;
pub mod config;
pub mod diagram;
pub mod error;
pub mod state_machine;

pub use config::Config;
pub use diagram::{Diagram, DiagramType, Graph};
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
///
/// Logs go to stderr so diagrams printed on stdout stay clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "fsm-flowchart");
    }
}
