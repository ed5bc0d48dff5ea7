//! State representation

use serde::{Deserialize, Serialize};
use std::fmt;

pub type StateId = String;

/// A declared state of the machine
///
/// Definitions may list a state either as a bare name or as a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateRepr")]
pub struct State {
    pub name: StateId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StateRepr {
    Name(StateId),
    Table { name: StateId },
}

impl From<StateRepr> for State {
    fn from(repr: StateRepr) -> Self {
        match repr {
            StateRepr::Name(name) | StateRepr::Table { name } => Self { name },
        }
    }
}

impl State {
    pub fn new(name: impl Into<StateId>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
