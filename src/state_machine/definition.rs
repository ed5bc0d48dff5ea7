//! Machine definitions loaded from TOML or JSON files

use super::{Event, State, StateMachine};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete state machine: declared states plus the full event table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition {
    /// Optional human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub states: Vec<State>,

    #[serde(default)]
    pub events: Vec<Event>,
}

impl MachineDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: impl Into<State>) -> Self {
        self.states.push(state.into());
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Parse a definition from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a definition from JSON text
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| Error::definition("<json>", e.to_string()))
    }

    /// Load a definition from file
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let definition = if is_toml {
            toml::from_str::<Self>(&contents).map_err(|e| Error::definition(path, e.to_string()))?
        } else {
            serde_json::from_str::<Self>(&contents)
                .map_err(|e| Error::definition(path, e.to_string()))?
        };

        tracing::debug!(
            "Loaded definition {:?} from {:?}: {} states, {} events",
            definition.name,
            path,
            definition.states.len(),
            definition.events.len()
        );

        Ok(definition)
    }
}

impl StateMachine for MachineDefinition {
    fn states(&self) -> &[State] {
        &self.states
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}
