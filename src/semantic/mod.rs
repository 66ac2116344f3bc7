//! Semantic tokens: named roles mapped onto raw tokens.
//!
//! Every group has a fixed key set. Themes substitute values through the
//! matching `*Overrides` type and can never add or remove keys.

mod border;
mod color;
mod elevation;
mod font;
mod grid;
mod scale;
pub mod value;

use serde::{Deserialize, Serialize};

pub use border::{BorderSemanticOverrides, BorderSemanticTokens};
pub use color::{ColorRole, ColorSemanticOverrides, ColorSemanticTokens};
pub use elevation::{ElevationSemanticOverrides, ElevationSemanticTokens};
pub use font::{FontSemanticOverrides, FontSemanticTokens, DEFAULT_FONT_FAMILY};
pub use grid::{GridLayout, GridSemanticOverrides, GridSemanticTokens, WindowClass};
pub use scale::{
    OpacityRole, OpacitySemanticOverrides, OpacitySemanticTokens, SizeSemanticOverrides,
    SizeSemanticTokens, SpaceSemanticOverrides, SpaceSemanticTokens,
};
pub use value::{ContrastDimension, SemanticColorValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemanticTokens {
    pub color: ColorSemanticTokens,
    pub border: BorderSemanticTokens,
    pub elevation: ElevationSemanticTokens,
    pub font: FontSemanticTokens,
    pub grid: GridSemanticTokens,
    pub opacity: OpacitySemanticTokens,
    pub size: SizeSemanticTokens,
    pub space: SpaceSemanticTokens,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemanticOverrides {
    #[serde(skip_serializing_if = "ColorSemanticOverrides::is_empty")]
    pub color: ColorSemanticOverrides,
    #[serde(skip_serializing_if = "BorderSemanticOverrides::is_empty")]
    pub border: BorderSemanticOverrides,
    #[serde(skip_serializing_if = "ElevationSemanticOverrides::is_empty")]
    pub elevation: ElevationSemanticOverrides,
    #[serde(skip_serializing_if = "FontSemanticOverrides::is_empty")]
    pub font: FontSemanticOverrides,
    #[serde(skip_serializing_if = "GridSemanticOverrides::is_empty")]
    pub grid: GridSemanticOverrides,
    #[serde(skip_serializing_if = "OpacitySemanticOverrides::is_empty")]
    pub opacity: OpacitySemanticOverrides,
    #[serde(skip_serializing_if = "SizeSemanticOverrides::is_empty")]
    pub size: SizeSemanticOverrides,
    #[serde(skip_serializing_if = "SpaceSemanticOverrides::is_empty")]
    pub space: SpaceSemanticOverrides,
}

impl_nested_overrides_methods!(SemanticOverrides {
    color: ColorSemanticOverrides,
    border: BorderSemanticOverrides,
    elevation: ElevationSemanticOverrides,
    font: FontSemanticOverrides,
    grid: GridSemanticOverrides,
    opacity: OpacitySemanticOverrides,
    size: SizeSemanticOverrides,
    space: SpaceSemanticOverrides,
});

impl SemanticOverrides {
    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
            && self.border.is_empty()
            && self.elevation.is_empty()
            && self.font.is_empty()
            && self.grid.is_empty()
            && self.opacity.is_empty()
            && self.size.is_empty()
            && self.space.is_empty()
    }
}

impl SemanticTokens {
    pub fn merged_with(&self, overrides: &SemanticOverrides) -> Self {
        Self {
            color: self.color.merged_with(&overrides.color),
            border: self.border.merged_with(&overrides.border),
            elevation: self.elevation.merged_with(&overrides.elevation),
            font: self.font.merged_with(&overrides.font),
            grid: self.grid.merged_with(&overrides.grid),
            opacity: self.opacity.merged_with(&overrides.opacity),
            size: self.size.merged_with(&overrides.size),
            space: self.space.merged_with(&overrides.space),
        }
    }

    pub fn color(&self, role: ColorRole) -> SemanticColorValue {
        self.color.get(role)
    }

    pub fn opacity(&self, role: OpacityRole) -> f32 {
        self.opacity.get(role)
    }

    pub fn dimension(&self, role: DimensionRole, high_contrast_enabled: bool) -> f32 {
        let border = &self.border;
        let size = &self.size;
        let space = &self.space;
        match role {
            DimensionRole::BorderWidthNone => border.width_none,
            DimensionRole::BorderWidthDefault => border.width_default,
            DimensionRole::BorderWidthThin => border.width_thin,
            DimensionRole::BorderWidthMedium => border.width_medium,
            DimensionRole::BorderWidthThick => border.width_thick,
            DimensionRole::BorderWidthFocus => border.width_focus.resolve(high_contrast_enabled),
            DimensionRole::BorderWidthFocusInset => {
                border.width_focus_inset.resolve(high_contrast_enabled)
            }
            DimensionRole::BorderRadiusNone => border.radius_none,
            DimensionRole::BorderRadiusDefault => border.radius_default,
            DimensionRole::BorderRadiusSmall => border.radius_small,
            DimensionRole::BorderRadiusMedium => border.radius_medium,
            DimensionRole::BorderRadiusLarge => border.radius_large,
            DimensionRole::BorderRadiusPill => border.radius_pill,
            DimensionRole::SizeIconSmall => size.icon_small,
            DimensionRole::SizeIconMedium => size.icon_medium,
            DimensionRole::SizeIconLarge => size.icon_large,
            DimensionRole::SizeMinInteractiveArea => size.min_interactive_area,
            DimensionRole::SpaceFixedNone => space.fixed_none,
            DimensionRole::SpaceFixedSmash => space.fixed_smash,
            DimensionRole::SpaceFixedShorter => space.fixed_shorter,
            DimensionRole::SpaceFixedShort => space.fixed_short,
            DimensionRole::SpaceFixedMedium => space.fixed_medium,
            DimensionRole::SpaceFixedTall => space.fixed_tall,
            DimensionRole::SpaceFixedTaller => space.fixed_taller,
            DimensionRole::SpacePaddingInlineMedium => space.padding_inline_medium,
            DimensionRole::SpacePaddingBlockMedium => space.padding_block_medium,
            DimensionRole::SpaceColumnGapMedium => space.column_gap_medium,
        }
    }
}

/// Typed key into the dimension-valued semantic groups (border, size, space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionRole {
    BorderWidthNone,
    BorderWidthDefault,
    BorderWidthThin,
    BorderWidthMedium,
    BorderWidthThick,
    BorderWidthFocus,
    BorderWidthFocusInset,
    BorderRadiusNone,
    BorderRadiusDefault,
    BorderRadiusSmall,
    BorderRadiusMedium,
    BorderRadiusLarge,
    BorderRadiusPill,
    SizeIconSmall,
    SizeIconMedium,
    SizeIconLarge,
    SizeMinInteractiveArea,
    SpaceFixedNone,
    SpaceFixedSmash,
    SpaceFixedShorter,
    SpaceFixedShort,
    SpaceFixedMedium,
    SpaceFixedTall,
    SpaceFixedTaller,
    SpacePaddingInlineMedium,
    SpacePaddingBlockMedium,
    SpaceColumnGapMedium,
}

impl DimensionRole {
    pub const ALL: [DimensionRole; 27] = [
        DimensionRole::BorderWidthNone,
        DimensionRole::BorderWidthDefault,
        DimensionRole::BorderWidthThin,
        DimensionRole::BorderWidthMedium,
        DimensionRole::BorderWidthThick,
        DimensionRole::BorderWidthFocus,
        DimensionRole::BorderWidthFocusInset,
        DimensionRole::BorderRadiusNone,
        DimensionRole::BorderRadiusDefault,
        DimensionRole::BorderRadiusSmall,
        DimensionRole::BorderRadiusMedium,
        DimensionRole::BorderRadiusLarge,
        DimensionRole::BorderRadiusPill,
        DimensionRole::SizeIconSmall,
        DimensionRole::SizeIconMedium,
        DimensionRole::SizeIconLarge,
        DimensionRole::SizeMinInteractiveArea,
        DimensionRole::SpaceFixedNone,
        DimensionRole::SpaceFixedSmash,
        DimensionRole::SpaceFixedShorter,
        DimensionRole::SpaceFixedShort,
        DimensionRole::SpaceFixedMedium,
        DimensionRole::SpaceFixedTall,
        DimensionRole::SpaceFixedTaller,
        DimensionRole::SpacePaddingInlineMedium,
        DimensionRole::SpacePaddingBlockMedium,
        DimensionRole::SpaceColumnGapMedium,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{border, palette};

    #[test]
    fn nested_builder_sets_a_single_key() {
        let overrides = SemanticOverrides::default()
            .border(|b| b.radius_default(border::RADIUS_150))
            .color(|color| {
                color.brand_primary(SemanticColorValue::fixed(palette::ORANGE_500))
            });
        let base = SemanticTokens::default();
        let merged = base.merged_with(&overrides);

        assert_eq!(merged.border.radius_default, border::RADIUS_150);
        assert_eq!(merged.border.radius_large, base.border.radius_large);
        assert_eq!(
            merged.color.brand_primary,
            SemanticColorValue::fixed(palette::ORANGE_500)
        );
        assert_eq!(merged.space, base.space);
    }

    #[test]
    fn focus_width_follows_high_contrast_flag() {
        let tokens = SemanticTokens::default();
        let standard = tokens.dimension(DimensionRole::BorderWidthFocus, false);
        let high = tokens.dimension(DimensionRole::BorderWidthFocus, true);
        assert!(high > standard);
        assert_eq!(
            tokens.dimension(DimensionRole::BorderWidthDefault, true),
            tokens.dimension(DimensionRole::BorderWidthDefault, false)
        );
    }

    #[test]
    fn overrides_read_from_json_and_skip_empty_groups_when_written() {
        let overrides: SemanticOverrides =
            serde_json::from_str(r#"{ "space": { "fixed_medium": 18.0 } }"#).unwrap();
        assert_eq!(overrides.space.fixed_medium, Some(18.0));
        assert!(overrides.color.is_empty());

        let written = serde_json::to_value(&overrides).unwrap();
        assert_eq!(written, serde_json::json!({ "space": { "fixed_medium": 18.0 } }));
    }

    #[test]
    fn opacity_roles_map_to_their_own_keys() {
        let overrides = SemanticOverrides::default().opacity(|o| o.disabled(0.5_f32));
        let base = SemanticTokens::default();
        let merged = base.merged_with(&overrides);
        for role in OpacityRole::ALL {
            let expected = if role == OpacityRole::Disabled {
                0.5
            } else {
                base.opacity(role)
            };
            assert_eq!(merged.opacity(role), expected, "{role:?}");
        }
    }

    #[test]
    fn overrides_reject_unknown_groups() {
        let parsed: Result<SemanticOverrides, _> =
            serde_json::from_str(r#"{ "motion": { "fast": 100 } }"#);
        assert!(parsed.is_err());
    }
}
