//! Event representation

use super::{StateId, Transition};
use serde::{Deserialize, Serialize};

/// A named event and the transitions it triggers, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,

    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    pub fn with_transition(mut self, from: impl Into<StateId>, to: impl Into<StateId>) -> Self {
        self.transitions.push(Transition::new(from, to));
        self
    }

    pub fn with_any_transition(mut self, to: impl Into<StateId>) -> Self {
        self.transitions.push(Transition::from_any(to));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}
