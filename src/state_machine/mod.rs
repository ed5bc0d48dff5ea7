//! State machine module - The source data a diagram is generated from

pub mod definition;
pub mod event;
pub mod state;
pub mod transition;

// Re-export key types
pub use definition::MachineDefinition;
pub use event::Event;
pub use state::{State, StateId};
pub use transition::Transition;

/// Read-only view of a finite state machine
///
/// Both sequences are enumerated in declaration order, and `events` must be
/// the complete event table of the machine.
pub trait StateMachine {
    /// All declared states
    fn states(&self) -> &[State];

    /// All events belonging to the machine
    fn events(&self) -> &[Event];
}

impl<T: StateMachine + ?Sized> StateMachine for &T {
    fn states(&self) -> &[State] {
        (**self).states()
    }

    fn events(&self) -> &[Event] {
        (**self).events()
    }
}
