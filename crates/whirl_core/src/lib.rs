//! Whirl Core
//!
//! Rotation arithmetic and lifecycle primitives for the Whirl spinner widget.
//!
//! # Features
//!
//! - **Segment Geometry**: Map a terminal rotation to a 1-based wedge label,
//!   with optional repeating label cycles around the wheel
//! - **Rotation Generation**: Random terminal rotations that always cover
//!   visible full turns, with injectable draw sources for determinism
//! - **Lifecycle FSM**: Table-driven state machine driving widget states
//!
//! This crate is UI-free; the widget layer lives in `whirl_widgets`.

pub mod error;
pub mod fsm;
pub mod rotation;
pub mod segment;

pub use error::{Result, WhirlError};
pub use fsm::{EventId, StateId, StateMachine, StateMachineBuilder, Transition};
pub use rotation::{
    advance, DrawSource, RandomDraw, RotationGenerator, FULL_TURN, SPIN_BONUS,
    SPIN_BONUS_THRESHOLD,
};
pub use segment::{resolve_segment, SegmentSpec};
