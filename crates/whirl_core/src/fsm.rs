//! Widget lifecycle state machine
//!
//! Small table-driven FSM with `u32` state and event ids. Widgets declare
//! their transitions up front and drive the machine with events; an event
//! with no transition from the current state is ignored, which is how
//! widgets reject inputs that are invalid for their current state.

/// State identifier
pub type StateId = u32;

/// Event identifier
pub type EventId = u32;

/// A single transition: `from --event--> to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self { from, event, to }
    }
}

/// Table-driven state machine
#[derive(Clone, Debug)]
pub struct StateMachine {
    current: StateId,
    transitions: Vec<Transition>,
}

impl StateMachine {
    /// Start building a machine with the given initial state
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial,
            transitions: Vec::new(),
        }
    }

    /// Current state
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Dispatch an event.
    ///
    /// Returns whether a transition fired. Events with no transition from
    /// the current state leave the machine unchanged.
    pub fn send(&mut self, event: EventId) -> bool {
        let transition = self
            .transitions
            .iter()
            .find(|t| t.from == self.current && t.event == event);
        match transition {
            Some(t) => {
                self.current = t.to;
                true
            }
            None => false,
        }
    }
}

/// Builder for [`StateMachine`]
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    /// Add a transition
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current: self.initial,
            transitions: self.transitions,
        }
    }
}
