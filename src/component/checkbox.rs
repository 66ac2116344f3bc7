use super::{ColorToken, DimensionToken};
use crate::semantic::{ColorRole, DimensionRole};

const INDICATOR_SIZE: f32 = 18.0;

token_group! {
    pub struct CheckboxTokens / CheckboxOverrides {
        indicator_size: DimensionToken,
        min_interactive_area: DimensionToken,
        border_radius: DimensionToken,
        border_width_unselected: DimensionToken,
        border_width_selected: DimensionToken,
        border_width_focus: DimensionToken,
        border_color_unselected: ColorToken,
        border_color_selected: ColorToken,
        border_color_focus: ColorToken,
        indicator_color: ColorToken,
        checkmark_color: ColorToken,
        disabled_color: ColorToken,
        error_color: ColorToken,
    }
}

impl Default for CheckboxTokens {
    fn default() -> Self {
        Self {
            indicator_size: DimensionToken::Literal(INDICATOR_SIZE),
            min_interactive_area: DimensionRole::SizeMinInteractiveArea.into(),
            border_radius: DimensionRole::BorderRadiusSmall.into(),
            border_width_unselected: DimensionRole::BorderWidthThin.into(),
            border_width_selected: DimensionRole::BorderWidthMedium.into(),
            border_width_focus: DimensionRole::BorderWidthFocus.into(),
            border_color_unselected: ColorRole::ActionEnabled.into(),
            border_color_selected: ColorRole::ActionSelected.into(),
            border_color_focus: ColorRole::BorderFocus.into(),
            indicator_color: ColorRole::ActionSelected.into(),
            checkmark_color: ColorRole::ContentOnBrandPrimary.into(),
            disabled_color: ColorRole::ActionDisabled.into(),
            error_color: ColorRole::ActionNegative.into(),
        }
    }
}
