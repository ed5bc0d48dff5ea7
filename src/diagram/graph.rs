use crate::state_machine::{StateId, StateMachine};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A labeled outgoing edge: the destination state and the event that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub to: StateId,
    pub label: String,
}

impl Edge {
    pub fn new(to: impl Into<StateId>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
        }
    }
}

/// Adjacency view of a state machine, ready to be rendered as a flowchart.
///
/// Every declared state is a node, even when it has no outgoing edges. Node
/// order follows the source state list and each edge list follows the source
/// event and transition order; rendering depends on both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: IndexMap<StateId, Vec<Edge>>,
}

impl Graph {
    /// Build the graph from a machine snapshot.
    ///
    /// Transitions without a source state are dropped, since they cannot be
    /// drawn as a single edge. Duplicates and self-loops are kept verbatim.
    pub fn build(machine: &impl StateMachine) -> Self {
        let mut nodes: IndexMap<StateId, Vec<Edge>> = IndexMap::new();

        for state in machine.states() {
            nodes.entry(state.name.clone()).or_default();
        }

        let mut dropped = 0usize;
        for event in machine.events() {
            for transition in event.transitions() {
                let Some((from, to)) = transition.endpoints() else {
                    tracing::debug!(
                        "Skipping transition to {:?} on event {:?}: no source state",
                        transition.to,
                        event.name
                    );
                    dropped += 1;
                    continue;
                };

                if !nodes.contains_key(from) {
                    tracing::debug!("Transition source {:?} is not a declared state", from);
                }

                nodes
                    .entry(from.to_string())
                    .or_default()
                    .push(Edge::new(to, event.name.clone()));
            }
        }

        let graph = Self { nodes };
        tracing::debug!(
            "Built graph: {} nodes, {} edges, {} any-state transitions dropped",
            graph.node_count(),
            graph.edge_count(),
            dropped
        );
        graph
    }

    /// Nodes with their outgoing edges, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &[Edge])> {
        self.nodes
            .iter()
            .map(|(name, edges)| (name.as_str(), edges.as_slice()))
    }

    /// Outgoing edges of a state, or `None` if the state is not a node
    pub fn edges(&self, state: &str) -> Option<&[Edge]> {
        self.nodes.get(state).map(Vec::as_slice)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.nodes.contains_key(state)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without outgoing edges
    pub fn isolated_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|(_, edges)| edges.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_states: self.node_count(),
            total_transitions: self.edge_count(),
            isolated_states: self.isolated_nodes().count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub isolated_states: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::{Event, MachineDefinition};

    fn node_names(graph: &Graph) -> Vec<&str> {
        graph.nodes().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::build(&MachineDefinition::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_states_without_events() {
        let machine = MachineDefinition::new().with_states(["a", "b", "c"]);
        let graph = Graph::build(&machine);

        assert_eq!(node_names(&graph), ["a", "b", "c"]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.isolated_nodes().count(), 3);
    }

    #[test]
    fn test_build_preserves_source_order() {
        let machine = MachineDefinition::new()
            .with_states(["zeta", "alpha", "mid"])
            .with_event(
                Event::new("second")
                    .with_transition("alpha", "zeta")
                    .with_transition("zeta", "mid"),
            )
            .with_event(Event::new("first").with_transition("alpha", "mid"));

        let graph = Graph::build(&machine);
        assert_eq!(node_names(&graph), ["zeta", "alpha", "mid"]);
        assert_eq!(
            graph.edges("alpha").unwrap(),
            [Edge::new("zeta", "second"), Edge::new("mid", "first")]
        );
        assert_eq!(graph.edges("zeta").unwrap(), [Edge::new("mid", "second")]);
        assert!(graph.edges("mid").unwrap().is_empty());
    }

    #[test]
    fn test_any_state_transitions_are_dropped() {
        let machine = MachineDefinition::new()
            .with_states(["idle", "failed"])
            .with_event(Event::new("fail").with_any_transition("failed"));

        let graph = Graph::build(&machine);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_duplicates_and_self_loops_are_kept() {
        let machine = MachineDefinition::new()
            .with_states(["on"])
            .with_event(
                Event::new("poke")
                    .with_transition("on", "on")
                    .with_transition("on", "on"),
            );

        let graph = Graph::build(&machine);
        assert_eq!(
            graph.edges("on").unwrap(),
            [Edge::new("on", "poke"), Edge::new("on", "poke")]
        );
    }

    #[test]
    fn test_duplicate_states_collapse_to_one_node() {
        let machine = MachineDefinition::new().with_states(["a", "b", "a"]);
        let graph = Graph::build(&machine);
        assert_eq!(node_names(&graph), ["a", "b"]);
    }

    #[test]
    fn test_undeclared_source_gets_a_node() {
        let machine = MachineDefinition::new()
            .with_states(["a"])
            .with_event(Event::new("jump").with_transition("ghost", "a"));

        let graph = Graph::build(&machine);
        assert_eq!(node_names(&graph), ["a", "ghost"]);
        assert_eq!(graph.edges("ghost").unwrap(), [Edge::new("a", "jump")]);
    }

    #[test]
    fn test_graph_stats() {
        let machine = MachineDefinition::new()
            .with_states(["sleeping", "running", "done"])
            .with_event(Event::new("run").with_transition("sleeping", "running"))
            .with_event(Event::new("finish").with_transition("running", "done"));

        let stats = Graph::build(&machine).stats();
        assert_eq!(stats.total_states, 3);
        assert_eq!(stats.total_transitions, 2);
        assert_eq!(stats.isolated_states, 1);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let machine = MachineDefinition::new()
            .with_states(["b", "a"])
            .with_event(Event::new("go").with_transition("b", "a"));

        let json = serde_json::to_string(&Graph::build(&machine)).unwrap();
        assert_eq!(json, r#"{"b":[{"to":"a","label":"go"}],"a":[]}"#);
    }
}
