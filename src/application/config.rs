use serde::Deserialize;

use crate::domain::errors::{SpaceError, SpaceResult, ensure_scale};
use crate::domain::geometry::{Padding, Size};

/// Widget options, read from a camelCase JS object. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpaceConfig {
    pub wrapper: String,
    pub fake_content: String,
    pub content: String,
    pub throttle_ms: u64,
    /// Minimum distance to an edge of the bounding container that starts a resize
    pub edge_distance: f64,
    /// Pixels scrolled per triggered scroll decision
    pub scroll_step: f64,
    /// Wrapper transform scale
    pub scale: f64,
    pub padding: Padding,
    /// Forbid growing towards the top and left
    pub disallow_negative_position: bool,
    pub fake_content_size: Option<Size>,
    pub content_size: Option<Size>,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            wrapper: ".wrapper".to_string(),
            fake_content: ".scroll-fake-content".to_string(),
            content: ".content".to_string(),
            throttle_ms: 200,
            edge_distance: 100.0,
            scroll_step: 100.0,
            scale: 1.0,
            padding: Padding::default(),
            disallow_negative_position: false,
            fake_content_size: None,
            content_size: None,
        }
    }
}

impl SpaceConfig {
    pub fn validate(&self) -> SpaceResult<()> {
        ensure_scale(self.scale)?;

        if !(self.edge_distance.is_finite() && self.edge_distance >= 0.0) {
            return Err(SpaceError::InvalidConfig(format!("edgeDistance must be >= 0, got {}", self.edge_distance)));
        }
        if !(self.scroll_step.is_finite() && self.scroll_step >= 0.0) {
            return Err(SpaceError::InvalidConfig(format!("scrollStep must be >= 0, got {}", self.scroll_step)));
        }
        if !(self.padding.top.is_finite() && self.padding.left.is_finite()) {
            return Err(SpaceError::InvalidConfig("padding must be finite".to_string()));
        }
        for (name, size) in [("fakeContentSize", self.fake_content_size), ("contentSize", self.content_size)] {
            if let Some(size) = size {
                if !size.is_valid() {
                    return Err(SpaceError::InvalidConfig(format!("{} must be non-negative", name)));
                }
            }
        }
        for (name, selector) in [("wrapper", &self.wrapper), ("fakeContent", &self.fake_content), ("content", &self.content)] {
            if selector.trim().is_empty() {
                return Err(SpaceError::InvalidConfig(format!("{} selector is empty", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let config: SpaceConfig = serde_json::from_str(r#"{"edgeDistance": 50, "padding": {"top": 20}}"#).unwrap();
        assert_eq!(config.edge_distance, 50.0);
        assert_eq!(config.scroll_step, 100.0);
        assert_eq!(config.throttle_ms, 200);
        assert_eq!(config.padding, Padding::new(20.0, 0.0));
        assert_eq!(config.wrapper, ".wrapper");
        assert!(!config.disallow_negative_position);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sizes_are_optional() {
        let config: SpaceConfig =
            serde_json::from_str(r#"{"fakeContentSize": {"width": 4000, "height": 3000}}"#).unwrap();
        assert_eq!(config.fake_content_size, Some(Size::new(4000.0, 3000.0)));
        assert_eq!(config.content_size, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_scale = SpaceConfig { scale: 0.0, ..Default::default() };
        assert_eq!(zero_scale.validate(), Err(SpaceError::InvalidScale(0.0)));

        let negative_edge = SpaceConfig { edge_distance: -1.0, ..Default::default() };
        assert!(matches!(negative_edge.validate(), Err(SpaceError::InvalidConfig(_))));

        let bad_size = SpaceConfig { content_size: Some(Size::new(-5.0, 1.0)), ..Default::default() };
        assert!(matches!(bad_size.validate(), Err(SpaceError::InvalidConfig(_))));

        let no_wrapper = SpaceConfig { wrapper: " ".to_string(), ..Default::default() };
        assert!(matches!(no_wrapper.validate(), Err(SpaceError::InvalidConfig(_))));
    }
}
