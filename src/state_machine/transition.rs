//! Transition representation

use crate::state_machine::StateId;
use serde::{Deserialize, Serialize};

/// A transition declared by an event
///
/// `from` is `None` for transitions that apply from any state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default)]
    pub from: Option<StateId>,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: impl Into<StateId>, to: impl Into<StateId>) -> Self {
        Self {
            from: Some(from.into()),
            to: to.into(),
        }
    }

    /// Transition reachable from any state
    pub fn from_any(to: impl Into<StateId>) -> Self {
        Self {
            from: None,
            to: to.into(),
        }
    }

    pub fn is_from_any(&self) -> bool {
        self.from.is_none()
    }

    /// Source and destination as a `(from, to)` pair, if the source is known
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        self.from.as_deref().map(|from| (from, self.to.as_str()))
    }
}
