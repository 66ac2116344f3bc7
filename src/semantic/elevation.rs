use super::value::SemanticColorValue;
use crate::raw::{elevation, palette};

token_group! {
    /// Shadow depths in dp plus the shadow tint.
    pub struct ElevationSemanticTokens / ElevationSemanticOverrides {
        none: f32,
        raised: f32,
        drag: f32,
        overlay_default: f32,
        overlay_emphasized: f32,
        color: SemanticColorValue,
    }
}

impl Default for ElevationSemanticTokens {
    fn default() -> Self {
        Self {
            none: elevation::ELEVATION_0,
            raised: elevation::ELEVATION_100,
            drag: elevation::ELEVATION_200,
            overlay_default: elevation::ELEVATION_300,
            overlay_emphasized: elevation::ELEVATION_400,
            color: SemanticColorValue::new(palette::SHADOW, palette::BLACK),
        }
    }
}
