use super::{ColorToken, DimensionToken, OpacityToken};
use crate::semantic::{ColorRole, DimensionRole, OpacityRole};

token_group! {
    pub struct SwitchTokens / SwitchOverrides {
        track_width: DimensionToken,
        track_height: DimensionToken,
        track_radius: DimensionToken,
        thumb_size_unselected: DimensionToken,
        thumb_size_selected: DimensionToken,
        track_color_unselected: ColorToken,
        track_color_selected: ColorToken,
        thumb_color_unselected: ColorToken,
        thumb_color_selected: ColorToken,
        checkmark_color: ColorToken,
        disabled_opacity: OpacityToken,
    }
}

impl Default for SwitchTokens {
    fn default() -> Self {
        Self {
            track_width: DimensionToken::Literal(52.0),
            track_height: DimensionToken::Literal(32.0),
            track_radius: DimensionRole::BorderRadiusPill.into(),
            thumb_size_unselected: DimensionToken::Literal(16.0),
            thumb_size_selected: DimensionToken::Literal(24.0),
            track_color_unselected: ColorRole::BackgroundTertiary.into(),
            track_color_selected: ColorRole::ActionSelected.into(),
            thumb_color_unselected: ColorRole::ContentMuted.into(),
            thumb_color_selected: ColorRole::ContentOnBrandPrimary.into(),
            checkmark_color: ColorRole::ActionSelected.into(),
            disabled_opacity: OpacityRole::Disabled.into(),
        }
    }
}
