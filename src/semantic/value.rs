use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A color pair selected by the dark-mode flag. Both variants are always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColorValue {
    pub light: Color,
    pub dark: Color,
}

impl SemanticColorValue {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both modes.
    pub const fn fixed(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    pub const fn resolve(&self, dark_mode_enabled: bool) -> Color {
        if dark_mode_enabled {
            self.dark
        } else {
            self.light
        }
    }
}

/// A dimension that switches to a heavier value in high-contrast mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastDimension {
    pub standard: f32,
    pub high_contrast: f32,
}

impl ContrastDimension {
    pub const fn new(standard: f32, high_contrast: f32) -> Self {
        Self {
            standard,
            high_contrast,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }

    pub const fn resolve(&self, high_contrast_enabled: bool) -> f32 {
        if high_contrast_enabled {
            self.high_contrast
        } else {
            self.standard
        }
    }
}
