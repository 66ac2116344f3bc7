use crate::component::ColorToken;
use crate::semantic::ColorRole;

token_group! {
    /// Color scheme handed to the host toolkit for widgets outside the kit.
    pub struct MaterialColorTokens / MaterialColorOverrides {
        primary: ColorToken,
        on_primary: ColorToken,
        secondary: ColorToken,
        on_secondary: ColorToken,
        background: ColorToken,
        on_background: ColorToken,
        surface: ColorToken,
        on_surface: ColorToken,
        surface_variant: ColorToken,
        on_surface_variant: ColorToken,
        outline: ColorToken,
        error: ColorToken,
        on_error: ColorToken,
    }
}

impl Default for MaterialColorTokens {
    fn default() -> Self {
        Self {
            primary: ColorRole::BrandPrimary.into(),
            on_primary: ColorRole::ContentOnBrandPrimary.into(),
            secondary: ColorRole::ActionEnabled.into(),
            on_secondary: ColorRole::ContentOnActionEnabled.into(),
            background: ColorRole::BackgroundPrimary.into(),
            on_background: ColorRole::ContentDefault.into(),
            surface: ColorRole::BackgroundSecondary.into(),
            on_surface: ColorRole::ContentDefault.into(),
            surface_variant: ColorRole::BackgroundTertiary.into(),
            on_surface_variant: ColorRole::ContentMuted.into(),
            outline: ColorRole::BorderDefault.into(),
            error: ColorRole::ActionNegative.into(),
            on_error: ColorRole::ContentOnActionEnabled.into(),
        }
    }
}
