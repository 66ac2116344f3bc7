use serde::{Deserialize, Serialize};

use crate::raw::{dimension, opacity};

token_group! {
    pub struct OpacitySemanticTokens / OpacitySemanticOverrides {
        invisible: f32,
        weak: f32,
        disabled: f32,
        strong: f32,
        opaque: f32,
    }
}

impl Default for OpacitySemanticTokens {
    fn default() -> Self {
        Self {
            invisible: opacity::OPACITY_0,
            weak: opacity::OPACITY_160,
            disabled: opacity::OPACITY_380,
            strong: opacity::OPACITY_640,
            opaque: opacity::OPACITY_1000,
        }
    }
}

/// Typed key into the opacity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpacityRole {
    Invisible,
    Weak,
    Disabled,
    Strong,
    Opaque,
}

impl OpacityRole {
    pub const ALL: [OpacityRole; 5] = [
        OpacityRole::Invisible,
        OpacityRole::Weak,
        OpacityRole::Disabled,
        OpacityRole::Strong,
        OpacityRole::Opaque,
    ];
}

impl OpacitySemanticTokens {
    pub fn get(&self, role: OpacityRole) -> f32 {
        match role {
            OpacityRole::Invisible => self.invisible,
            OpacityRole::Weak => self.weak,
            OpacityRole::Disabled => self.disabled,
            OpacityRole::Strong => self.strong,
            OpacityRole::Opaque => self.opaque,
        }
    }
}

token_group! {
    pub struct SizeSemanticTokens / SizeSemanticOverrides {
        icon_small: f32,
        icon_medium: f32,
        icon_large: f32,
        min_interactive_area: f32,
        max_width_body: f32,
    }
}

impl Default for SizeSemanticTokens {
    fn default() -> Self {
        Self {
            icon_small: dimension::DIMENSION_200,
            icon_medium: dimension::DIMENSION_250,
            icon_large: dimension::DIMENSION_300,
            min_interactive_area: dimension::DIMENSION_600,
            max_width_body: dimension::DIMENSION_1000 * 8.0,
        }
    }
}

token_group! {
    pub struct SpaceSemanticTokens / SpaceSemanticOverrides {
        fixed_none: f32,
        fixed_smash: f32,
        fixed_shorter: f32,
        fixed_short: f32,
        fixed_medium: f32,
        fixed_tall: f32,
        fixed_taller: f32,
        padding_inline_medium: f32,
        padding_block_medium: f32,
        column_gap_medium: f32,
    }
}

impl Default for SpaceSemanticTokens {
    fn default() -> Self {
        Self {
            fixed_none: dimension::DIMENSION_0,
            fixed_smash: dimension::DIMENSION_25,
            fixed_shorter: dimension::DIMENSION_50,
            fixed_short: dimension::DIMENSION_100,
            fixed_medium: dimension::DIMENSION_200,
            fixed_tall: dimension::DIMENSION_300,
            fixed_taller: dimension::DIMENSION_400,
            padding_inline_medium: dimension::DIMENSION_250,
            padding_block_medium: dimension::DIMENSION_150,
            column_gap_medium: dimension::DIMENSION_100,
        }
    }
}
