//! Wheel segment geometry
//!
//! Maps terminal rotations to 1-based wedge labels. The wheel has a segment
//! boundary at 12 o'clock and wedges are numbered clockwise, starting with
//! the one to the right of that boundary. A shorter label cycle may repeat
//! around the wheel: a six-wedge wheel labeled 1,2,3,1,2,3 has `segments = 6`
//! and `repeat = 2`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhirlError};

const DEGREES: i64 = 360;

/// Geometry of a labeled wheel
///
/// Deserialization goes through [`SegmentSpec::new`], so host-provided data
/// cannot produce an unresolvable wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSegmentSpec")]
pub struct SegmentSpec {
    segments: u32,
    repeat: u32,
}

/// Unvalidated wire shape for [`SegmentSpec`]
#[derive(Deserialize)]
struct RawSegmentSpec {
    segments: u32,
    #[serde(default = "default_repeat")]
    repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

impl TryFrom<RawSegmentSpec> for SegmentSpec {
    type Error = WhirlError;

    fn try_from(raw: RawSegmentSpec) -> Result<Self> {
        Self::new(raw.segments, raw.repeat)
    }
}

impl SegmentSpec {
    /// Create a validated segment spec.
    ///
    /// Fails when either value is zero or `repeat` does not evenly divide
    /// `segments`; a wheel labeled 1,2,3,1,2 is not resolvable.
    pub fn new(segments: u32, repeat: u32) -> Result<Self> {
        if segments == 0 || repeat == 0 || segments % repeat != 0 {
            return Err(WhirlError::InvalidSegmentSpec { segments, repeat });
        }
        Ok(Self { segments, repeat })
    }

    /// A wheel whose labels do not repeat
    pub fn simple(segments: u32) -> Result<Self> {
        Self::new(segments, 1)
    }

    /// Number of wedges on the wheel
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Times the label cycle repeats around the wheel
    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Number of distinct labels
    pub fn label_count(&self) -> u32 {
        self.segments / self.repeat
    }

    /// Width of a single wedge in degrees
    pub fn wedge_width(&self) -> f64 {
        360.0 / self.segments as f64
    }

    /// Resolve the wedge label under the pointer for a terminal rotation.
    ///
    /// `rotation_degrees` is clockwise from 12 o'clock and may be negative or
    /// exceed a full turn. Wedge boundaries ride along with the wheel, so the
    /// wedge under the fixed pointer after a clockwise rotation is the one
    /// sitting that many degrees counter-clockwise from 12 o'clock on the
    /// unrotated wheel.
    ///
    /// Returns a label in `[1, label_count]`.
    pub fn resolve(&self, rotation_degrees: i64) -> u32 {
        let effective = (DEGREES - rotation_degrees.rem_euclid(DEGREES)).rem_euclid(DEGREES);
        let wedge_index = (effective as f64 / self.wedge_width()).floor() as u32;
        wedge_index % self.label_count() + 1
    }
}

/// Resolve a segment without keeping a [`SegmentSpec`] around.
///
/// `repeat` is 1 for wheels whose labels do not repeat.
pub fn resolve_segment(rotation_degrees: i64, segments: u32, repeat: u32) -> Result<u32> {
    Ok(SegmentSpec::new(segments, repeat)?.resolve(rotation_degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_specs() {
        assert!(matches!(
            SegmentSpec::new(0, 1),
            Err(WhirlError::InvalidSegmentSpec { .. })
        ));
        assert!(matches!(
            SegmentSpec::new(8, 0),
            Err(WhirlError::InvalidSegmentSpec { .. })
        ));
        // 8 wedges cannot carry a 3-label cycle evenly
        assert!(matches!(
            SegmentSpec::new(8, 3),
            Err(WhirlError::InvalidSegmentSpec { segments: 8, repeat: 3 })
        ));
    }

    #[test]
    fn test_boundary_resolves_to_first_segment() {
        let spec = SegmentSpec::simple(8).unwrap();
        assert_eq!(spec.resolve(0), 1);
    }

    #[test]
    fn test_result_stays_in_label_range() {
        let spec = SegmentSpec::new(12, 3).unwrap();
        for rotation in -720..=1080 {
            let label = spec.resolve(rotation);
            assert!(
                (1..=spec.label_count()).contains(&label),
                "rotation {rotation} resolved to {label}"
            );
        }
    }

    #[test]
    fn test_periodic_over_full_turns() {
        let spec = SegmentSpec::simple(8).unwrap();
        for rotation in 0..360 {
            assert_eq!(spec.resolve(rotation), spec.resolve(rotation + 360));
            assert_eq!(spec.resolve(rotation), spec.resolve(rotation - 360));
        }
    }

    #[test]
    fn test_repeating_labels_cycle() {
        // 6 wedges labeled 1,2,3,1,2,3: opposite wedges share a label
        let spec = SegmentSpec::new(6, 2).unwrap();
        assert_eq!(spec.label_count(), 3);
        assert_eq!(spec.resolve(0), spec.resolve(180));
        assert_eq!(spec.resolve(90), spec.resolve(270));
    }

    #[test]
    fn test_clockwise_quarter_turn() {
        // A quarter turn clockwise puts the pointer over the fourth wedge of
        // a four-wedge wheel: effective = 270, wedge width = 90.
        let spec = SegmentSpec::simple(4).unwrap();
        assert_eq!(spec.resolve(90), 4);
    }

    #[test]
    fn test_negative_rotation() {
        let spec = SegmentSpec::simple(4).unwrap();
        // -90 clockwise is 270 clockwise: pointer over wedge 2
        assert_eq!(spec.resolve(-90), spec.resolve(270));
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = SegmentSpec::new(6, 2).unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(serde_json::from_str::<SegmentSpec>(&json).unwrap(), spec);
    }

    #[test]
    fn test_deserialization_validates() {
        let result = serde_json::from_str::<SegmentSpec>(r#"{ "segments": 8, "repeat": 3 }"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<SegmentSpec>(r#"{ "segments": 0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_repeat_defaults_to_one() {
        let spec: SegmentSpec = serde_json::from_str(r#"{ "segments": 8 }"#).unwrap();
        assert_eq!(spec, SegmentSpec::simple(8).unwrap());
    }

    #[test]
    fn test_free_function_matches_spec_resolve() {
        let spec = SegmentSpec::new(6, 2).unwrap();
        for rotation in [0, 45, 180, 359, 723, -15] {
            assert_eq!(resolve_segment(rotation, 6, 2).unwrap(), spec.resolve(rotation));
        }
        assert!(resolve_segment(0, 6, 4).is_err());
    }
}
