use serde::{Deserialize, Serialize};

use super::value::SemanticColorValue;
use crate::raw::palette;

token_group! {
    /// Semantic color roles shared by every theme.
    pub struct ColorSemanticTokens / ColorSemanticOverrides {
        background_primary: SemanticColorValue,
        background_secondary: SemanticColorValue,
        background_tertiary: SemanticColorValue,
        content_default: SemanticColorValue,
        content_muted: SemanticColorValue,
        content_disabled: SemanticColorValue,
        content_on_brand_primary: SemanticColorValue,
        content_on_action_enabled: SemanticColorValue,
        content_status_negative: SemanticColorValue,
        brand_primary: SemanticColorValue,
        action_enabled: SemanticColorValue,
        action_hover: SemanticColorValue,
        action_pressed: SemanticColorValue,
        action_disabled: SemanticColorValue,
        action_focus: SemanticColorValue,
        action_selected: SemanticColorValue,
        action_negative: SemanticColorValue,
        border_default: SemanticColorValue,
        border_emphasized: SemanticColorValue,
        border_focus: SemanticColorValue,
        border_brand_primary: SemanticColorValue,
        surface_status_negative: SemanticColorValue,
        surface_status_positive: SemanticColorValue,
    }
}

impl Default for ColorSemanticTokens {
    fn default() -> Self {
        use SemanticColorValue as V;
        Self {
            background_primary: V::new(palette::WHITE, palette::GRAY_950),
            background_secondary: V::new(palette::GRAY_50, palette::GRAY_900),
            background_tertiary: V::new(palette::GRAY_100, palette::GRAY_800),
            content_default: V::new(palette::BLACK, palette::WHITE),
            content_muted: V::new(palette::GRAY_700, palette::GRAY_400),
            content_disabled: V::new(palette::GRAY_300, palette::GRAY_700),
            content_on_brand_primary: V::new(palette::WHITE, palette::BLACK),
            content_on_action_enabled: V::new(palette::WHITE, palette::BLACK),
            content_status_negative: V::new(palette::RED_500, palette::RED_300),
            brand_primary: V::new(palette::BLUE_500, palette::BLUE_300),
            action_enabled: V::new(palette::BLACK, palette::WHITE),
            action_hover: V::new(palette::GRAY_800, palette::GRAY_100),
            action_pressed: V::new(palette::GRAY_900, palette::GRAY_200),
            action_disabled: V::new(palette::GRAY_200, palette::GRAY_800),
            action_focus: V::new(palette::GRAY_800, palette::GRAY_100),
            action_selected: V::new(palette::BLUE_500, palette::BLUE_300),
            action_negative: V::new(palette::RED_500, palette::RED_300),
            border_default: V::new(palette::GRAY_300, palette::GRAY_700),
            border_emphasized: V::new(palette::BLACK, palette::WHITE),
            border_focus: V::new(palette::BLUE_600, palette::BLUE_300),
            border_brand_primary: V::new(palette::BLUE_500, palette::BLUE_300),
            surface_status_negative: V::new(
                palette::RED_500.with_alpha(0x1F),
                palette::RED_300.with_alpha(0x29),
            ),
            surface_status_positive: V::new(
                palette::GREEN_500.with_alpha(0x1F),
                palette::GREEN_300.with_alpha(0x29),
            ),
        }
    }
}

/// Typed key into [`ColorSemanticTokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    ContentDefault,
    ContentMuted,
    ContentDisabled,
    ContentOnBrandPrimary,
    ContentOnActionEnabled,
    ContentStatusNegative,
    BrandPrimary,
    ActionEnabled,
    ActionHover,
    ActionPressed,
    ActionDisabled,
    ActionFocus,
    ActionSelected,
    ActionNegative,
    BorderDefault,
    BorderEmphasized,
    BorderFocus,
    BorderBrandPrimary,
    SurfaceStatusNegative,
    SurfaceStatusPositive,
}

impl ColorRole {
    pub const ALL: [ColorRole; 23] = [
        ColorRole::BackgroundPrimary,
        ColorRole::BackgroundSecondary,
        ColorRole::BackgroundTertiary,
        ColorRole::ContentDefault,
        ColorRole::ContentMuted,
        ColorRole::ContentDisabled,
        ColorRole::ContentOnBrandPrimary,
        ColorRole::ContentOnActionEnabled,
        ColorRole::ContentStatusNegative,
        ColorRole::BrandPrimary,
        ColorRole::ActionEnabled,
        ColorRole::ActionHover,
        ColorRole::ActionPressed,
        ColorRole::ActionDisabled,
        ColorRole::ActionFocus,
        ColorRole::ActionSelected,
        ColorRole::ActionNegative,
        ColorRole::BorderDefault,
        ColorRole::BorderEmphasized,
        ColorRole::BorderFocus,
        ColorRole::BorderBrandPrimary,
        ColorRole::SurfaceStatusNegative,
        ColorRole::SurfaceStatusPositive,
    ];
}

impl ColorSemanticTokens {
    pub fn get(&self, role: ColorRole) -> SemanticColorValue {
        match role {
            ColorRole::BackgroundPrimary => self.background_primary,
            ColorRole::BackgroundSecondary => self.background_secondary,
            ColorRole::BackgroundTertiary => self.background_tertiary,
            ColorRole::ContentDefault => self.content_default,
            ColorRole::ContentMuted => self.content_muted,
            ColorRole::ContentDisabled => self.content_disabled,
            ColorRole::ContentOnBrandPrimary => self.content_on_brand_primary,
            ColorRole::ContentOnActionEnabled => self.content_on_action_enabled,
            ColorRole::ContentStatusNegative => self.content_status_negative,
            ColorRole::BrandPrimary => self.brand_primary,
            ColorRole::ActionEnabled => self.action_enabled,
            ColorRole::ActionHover => self.action_hover,
            ColorRole::ActionPressed => self.action_pressed,
            ColorRole::ActionDisabled => self.action_disabled,
            ColorRole::ActionFocus => self.action_focus,
            ColorRole::ActionSelected => self.action_selected,
            ColorRole::ActionNegative => self.action_negative,
            ColorRole::BorderDefault => self.border_default,
            ColorRole::BorderEmphasized => self.border_emphasized,
            ColorRole::BorderFocus => self.border_focus,
            ColorRole::BorderBrandPrimary => self.border_brand_primary,
            ColorRole::SurfaceStatusNegative => self.surface_status_negative,
            ColorRole::SurfaceStatusPositive => self.surface_status_positive,
        }
    }
}
