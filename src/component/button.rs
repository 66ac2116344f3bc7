use super::{ColorToken, DimensionToken};
use crate::color::Color;
use crate::semantic::{ColorRole, DimensionRole};

token_group! {
    pub struct ButtonTokens / ButtonOverrides {
        container_color: ColorToken,
        container_color_hover: ColorToken,
        container_color_pressed: ColorToken,
        disabled_container_color: ColorToken,
        content_color: ColorToken,
        disabled_content_color: ColorToken,
        border_color: ColorToken,
        border_color_focus: ColorToken,
        border_width: DimensionToken,
        border_width_focus: DimensionToken,
        corner_radius: DimensionToken,
        min_width: DimensionToken,
        min_height: DimensionToken,
        padding_horizontal: DimensionToken,
        padding_vertical: DimensionToken,
        spacing_icon_label: DimensionToken,
        icon_size: DimensionToken,
    }
}

impl Default for ButtonTokens {
    fn default() -> Self {
        Self {
            container_color: ColorRole::BrandPrimary.into(),
            container_color_hover: ColorRole::ActionHover.into(),
            container_color_pressed: ColorRole::ActionPressed.into(),
            disabled_container_color: ColorRole::ActionDisabled.into(),
            content_color: ColorRole::ContentOnBrandPrimary.into(),
            disabled_content_color: ColorRole::ContentDisabled.into(),
            border_color: Color::TRANSPARENT.into(),
            border_color_focus: ColorRole::BorderFocus.into(),
            border_width: DimensionRole::BorderWidthNone.into(),
            border_width_focus: DimensionRole::BorderWidthFocus.into(),
            corner_radius: DimensionRole::BorderRadiusDefault.into(),
            min_width: DimensionRole::SizeMinInteractiveArea.into(),
            min_height: DimensionRole::SizeMinInteractiveArea.into(),
            padding_horizontal: DimensionRole::SpacePaddingInlineMedium.into(),
            padding_vertical: DimensionRole::SpacePaddingBlockMedium.into(),
            spacing_icon_label: DimensionRole::SpaceFixedShort.into(),
            icon_size: DimensionRole::SizeIconMedium.into(),
        }
    }
}
