//! Spinner widget with FSM-driven lifecycle
//!
//! The Spinner widget provides:
//! - A spinnable wheel image that stops at a random terminal rotation
//! - FSM-driven lifecycle: idle -> spinning -> idle on the renderer's
//!   completion signal
//! - A completion callback receiving the resting angle in `[0, 360)`
//! - Segment resolution for labeled wheels
//!
//! Spinning is non-blocking: `spin()` stores the new target rotation, hands
//! it to the renderer, and returns. The widget resumes synchronously when
//! the embedding calls `finish_transition()`.

use whirl_core::fsm::StateMachine;
use whirl_core::rotation::{DrawSource, RotationGenerator, FULL_TURN};
use whirl_core::segment::SegmentSpec;
use whirl_core::{Result, WhirlError};

use crate::host::HostOverrides;
use crate::renderer::SpinnerRenderer;

/// Spinner lifecycle states
pub mod states {
    /// At rest; ready to spin
    pub const IDLE: u32 = 0;
    /// Transition in flight; waiting on the renderer's completion signal
    pub const SPINNING: u32 = 1;
}

/// Spinner lifecycle events
pub mod events {
    /// Spin requested by the host
    pub const SPIN: u32 = 0;
    /// The embedding reported the animated transition finished
    pub const TRANSITION_END: u32 = 1;
}

/// Completion callback, invoked with the resting angle in `[0, 360)`
pub type CompleteCallback = Box<dyn FnMut(u32) + Send>;

/// Spinner configuration
#[derive(Clone, Debug, Default)]
pub struct SpinnerConfig {
    /// Image to spin. Required unless host overrides supply one.
    pub image_source: Option<String>,
    /// Wheel geometry, for resolving the segment under the pointer
    pub segments: Option<SegmentSpec>,
}

impl SpinnerConfig {
    /// Create a new spinner config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image source
    pub fn image_source(mut self, source: impl Into<String>) -> Self {
        self.image_source = Some(source.into());
        self
    }

    /// Set the wheel geometry
    pub fn segments(mut self, spec: SegmentSpec) -> Self {
        self.segments = Some(spec);
        self
    }
}

/// Spinner widget
pub struct Spinner {
    /// Resolved image source (host override wins over config)
    image_source: String,
    /// Wheel geometry, if the host cares about labels
    segments: Option<SegmentSpec>,
    /// Lifecycle FSM
    fsm: StateMachine,
    /// Accumulated rotation in degrees clockwise from 12 o'clock
    rotation: u32,
    /// Terminal rotation generator
    generator: RotationGenerator,
    /// Renderer for this spinner's element
    renderer: Box<dyn SpinnerRenderer>,
    /// Completion callback
    on_complete: Option<CompleteCallback>,
}

impl Spinner {
    /// Create a spinner from a prepared config, without host overrides or a
    /// completion callback
    pub fn with_config(config: SpinnerConfig, renderer: Box<dyn SpinnerRenderer>) -> Result<Self> {
        SpinnerBuilder {
            config,
            overrides: HostOverrides::default(),
            on_complete: None,
            draw_source: None,
        }
        .build(renderer)
    }

    /// Create the lifecycle FSM
    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, events::SPIN, states::SPINNING)
            .on(states::SPINNING, events::TRANSITION_END, states::IDLE)
            .build()
    }

    /// Resolved image source
    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    /// Wheel geometry, if configured
    pub fn segments(&self) -> Option<SegmentSpec> {
        self.segments
    }

    /// Accumulated rotation, readable any time
    pub fn rotation(&self) -> u32 {
        self.rotation
    }

    /// Resting angle in `[0, 360)`.
    ///
    /// During a spin this already reflects the new target; hosts may read it
    /// before the transition ends.
    pub fn resting_angle(&self) -> u32 {
        self.rotation % FULL_TURN
    }

    /// Whether a transition is in flight
    pub fn is_spinning(&self) -> bool {
        self.fsm.current() == states::SPINNING
    }

    /// Segment under the pointer at the (target) resting angle
    pub fn segment(&self) -> Option<u32> {
        self.segments
            .map(|spec| spec.resolve(self.resting_angle() as i64))
    }

    /// Start a spin.
    ///
    /// Picks the next terminal rotation and hands it to the renderer for
    /// animated application, then returns immediately. Returns `false` when
    /// a transition is already in flight; re-entrant spins are ignored, not
    /// queued.
    pub fn spin(&mut self) -> bool {
        if !self.fsm.send(events::SPIN) {
            tracing::debug!(rotation = self.rotation, "spin ignored; transition in flight");
            return false;
        }

        self.rotation = self.generator.next(self.rotation);
        tracing::debug!(
            rotation = self.rotation,
            resting = self.resting_angle(),
            "spin started"
        );
        self.renderer.apply_rotation(self.rotation);
        true
    }

    /// External completion signal: the embedding's transition finished.
    ///
    /// Invokes the completion callback exactly once per spin, synchronously,
    /// with the resting angle. Ignored when no spin is in flight.
    pub fn finish_transition(&mut self) {
        if !self.fsm.send(events::TRANSITION_END) {
            tracing::trace!("transition-end signal while idle; ignoring");
            return;
        }

        let resting = self.resting_angle();
        tracing::debug!(resting, "spin finished");
        if let Some(callback) = self.on_complete.as_mut() {
            callback(resting);
        }
    }
}

/// Create a spinner
pub fn spinner() -> SpinnerBuilder {
    SpinnerBuilder {
        config: SpinnerConfig::default(),
        overrides: HostOverrides::default(),
        on_complete: None,
        draw_source: None,
    }
}

/// Builder for creating spinners
pub struct SpinnerBuilder {
    config: SpinnerConfig,
    overrides: HostOverrides,
    on_complete: Option<CompleteCallback>,
    draw_source: Option<Box<dyn DrawSource>>,
}

impl SpinnerBuilder {
    /// Set the image source
    pub fn image(mut self, source: impl Into<String>) -> Self {
        self.config.image_source = Some(source.into());
        self
    }

    /// Set the wheel geometry
    pub fn segments(mut self, spec: SegmentSpec) -> Self {
        self.config.segments = Some(spec);
        self
    }

    /// Apply per-instance host overrides
    pub fn host_overrides(mut self, overrides: HostOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the completion callback
    pub fn on_complete<F: FnMut(u32) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Replace the random draw source (seeded or scripted draws)
    pub fn draw_source(mut self, source: Box<dyn DrawSource>) -> Self {
        self.draw_source = Some(source);
        self
    }

    /// Build the spinner.
    ///
    /// Fails with [`WhirlError::MissingImageSource`] when neither the
    /// builder nor the host overrides carry a non-empty image source; no
    /// partial spinner is produced.
    pub fn build(self, renderer: Box<dyn SpinnerRenderer>) -> Result<Spinner> {
        let image_source = self
            .overrides
            .image_source
            .or(self.config.image_source)
            .filter(|source| !source.is_empty())
            .ok_or(WhirlError::MissingImageSource)?;

        let generator = match self.draw_source {
            Some(source) => RotationGenerator::with_source(source),
            None => RotationGenerator::new(),
        };

        Ok(Spinner {
            image_source,
            segments: self.config.segments,
            fsm: Spinner::create_fsm(),
            rotation: 0,
            generator,
            renderer,
            on_complete: self.on_complete,
        })
    }
}
