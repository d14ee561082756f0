//! Host-provided per-instance overrides
//!
//! Hosts that keep spinner settings next to their markup deserialize them
//! into [`HostOverrides`] and hand them to the builder. Overrides carry data
//! only; completion callbacks are supplied programmatically through
//! [`crate::spinner::SpinnerBuilder::on_complete`], never built from
//! host-supplied text.

use serde::{Deserialize, Serialize};

/// Per-instance overrides read from the host
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostOverrides {
    /// Image to spin; takes precedence over the builder's image source
    pub image_source: Option<String>,
}

impl HostOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image source override
    pub fn image_source(mut self, source: impl Into<String>) -> Self {
        self.image_source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_host_data() {
        let overrides: HostOverrides =
            serde_json::from_str(r#"{ "image_source": "img/wheel.png" }"#).unwrap();
        assert_eq!(overrides.image_source.as_deref(), Some("img/wheel.png"));
    }

    #[test]
    fn test_missing_fields_default() {
        let overrides: HostOverrides = serde_json::from_str("{}").unwrap();
        assert_eq!(overrides, HostOverrides::new());
        assert!(overrides.image_source.is_none());
    }
}
