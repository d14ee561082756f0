//! Spinner Demo
//!
//! Drives a wheel through the full lifecycle with a console renderer:
//! - Host overrides deserialized from markup-adjacent JSON
//! - Explicit registration in a `SpinnerRegistry`
//! - Completion callback and segment resolution per spin
//!
//! Run with: cargo run -p whirl_widgets --example spinner_demo

use whirl_widgets::prelude::*;

/// Renderer that prints the transform it would apply.
///
/// A real embedding would start an animated transition here and call
/// `finish_transition` when it ends; the console has no animation, so the
/// demo loop finishes each spin immediately.
struct ConsoleRenderer;

impl SpinnerRenderer for ConsoleRenderer {
    fn apply_rotation(&mut self, degrees: u32) {
        println!("  [renderer] transform: rotate({degrees}deg)");
    }
}

fn main() -> Result<(), WhirlError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // The host read these from its markup for this element
    let overrides: HostOverrides =
        serde_json::from_str(r#"{ "image_source": "img/compass-rose.png" }"#)
            .expect("demo overrides are valid JSON");

    // Six wedges labeled 1,2,3,1,2,3
    let spec = SegmentSpec::new(6, 2)?;
    let wheel = spinner()
        .segments(spec)
        .host_overrides(overrides)
        .on_complete(|resting| println!("  spin complete, resting at {resting} deg"))
        .build(Box::new(ConsoleRenderer))?;

    println!("spinning {}", wheel.image_source());

    let mut registry = SpinnerRegistry::new();
    let id = registry.register(wheel);

    for round in 1..=5 {
        println!("round {round}:");
        registry.spin(id);
        registry.finish_transition(id);
        if let Some(label) = registry.get(id).and_then(|wheel| wheel.segment()) {
            println!("  pointer reads label {label}");
        }
    }

    Ok(())
}
