//! Configuration for SVG rendering

use serde::Deserialize;

/// Default visual values applied when an icon does not override them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Stroke color for Outline icons
    pub stroke: String,

    /// Stroke width for Outline icons
    pub stroke_width: String,

    /// Fill for Outline icons
    pub outline_fill: String,

    /// Fill for Solid, Mini and Micro icons
    pub fill: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            stroke: "currentColor".to_string(),
            stroke_width: "1.5".to_string(),
            outline_fill: "none".to_string(),
            fill: "currentColor".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_stroke_width(mut self, width: impl Into<String>) -> Self {
        self.stroke_width = width.into();
        self
    }

    pub fn with_outline_fill(mut self, fill: impl Into<String>) -> Self {
        self.outline_fill = fill.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }
}
