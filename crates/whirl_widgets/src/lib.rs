//! Whirl Widget Library
//!
//! A wheel-of-fortune spinner with an FSM-driven lifecycle.
//!
//! # Architecture
//!
//! The widget is built on three pillars:
//!
//! 1. **FSM-Driven Lifecycle**: Each spinner has a state machine that manages
//!    its lifecycle (idle, spinning). Inputs invalid for the current state
//!    are ignored rather than queued.
//!
//! 2. **Renderer Seam**: The widget never animates anything itself. It hands
//!    an absolute rotation to a [`SpinnerRenderer`] and advances when the
//!    embedding reports the transition finished.
//!
//! 3. **Explicit Registration**: Hosts enumerate their spinner elements and
//!    register each controller in a [`SpinnerRegistry`]; there is no global
//!    scan on startup.
//!
//! # Example
//!
//! ```ignore
//! use whirl_widgets::prelude::*;
//!
//! let wheel = spinner()
//!     .image("img/compass-rose.png")
//!     .segments(SegmentSpec::simple(8)?)
//!     .on_complete(|resting| println!("stopped at {resting} deg"))
//!     .build(Box::new(my_renderer))?;
//!
//! let mut registry = SpinnerRegistry::new();
//! let id = registry.register(wheel);
//!
//! // From the host's input handler:
//! registry.spin(id);
//!
//! // From the host's transition-end handler:
//! registry.finish_transition(id);
//! ```

pub mod host;
pub mod registry;
pub mod renderer;
pub mod spinner;

pub use host::HostOverrides;
pub use registry::{SpinnerId, SpinnerRegistry};
pub use renderer::{NullRenderer, SpinnerRenderer};
pub use spinner::{spinner, Spinner, SpinnerBuilder, SpinnerConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::host::HostOverrides;
    pub use crate::registry::{SpinnerId, SpinnerRegistry};
    pub use crate::renderer::{NullRenderer, SpinnerRenderer};
    pub use crate::spinner::{spinner, Spinner, SpinnerBuilder, SpinnerConfig};
    pub use whirl_core::{resolve_segment, SegmentSpec, WhirlError};
}
