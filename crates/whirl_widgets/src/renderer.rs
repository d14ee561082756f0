//! Renderer seam
//!
//! The spinner has no visibility into animation timing. It hands the
//! renderer an absolute rotation and resumes when the embedding reports the
//! transition finished via [`crate::spinner::Spinner::finish_transition`].

/// Applies rotations to the spinner's visual element.
///
/// One renderer instance serves one spinner. The embedding owns the
/// transition duration and easing, and must deliver exactly one completion
/// signal per `apply_rotation` call.
pub trait SpinnerRenderer: Send {
    /// Apply `degrees` of clockwise rotation from 12 o'clock, animated by
    /// the embedding.
    fn apply_rotation(&mut self, degrees: u32);
}

/// Renderer that drops rotations on the floor.
///
/// Useful for headless hosts and tests; with no transition to wait on, the
/// host fires the completion signal whenever it likes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl SpinnerRenderer for NullRenderer {
    fn apply_rotation(&mut self, _degrees: u32) {}
}
