use super::Theme;
use crate::border::{BorderSpec, BorderStyle, ResolvedBorder};
use crate::color::Color;
use crate::component::{ColorToken, DimensionToken, IconSize, OpacityToken};
use crate::graphics::{GraphicsObject, IconPlan};
use crate::mode::ModeContext;
use crate::semantic::ColorRole;

/// Resolves token references against one theme and one mode.
///
/// Pure: the same `(theme, mode, token)` always yields the same value.
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    theme: &'a Theme,
    mode: ModeContext,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedButton {
    pub container_color: Color,
    pub container_color_hover: Color,
    pub container_color_pressed: Color,
    pub disabled_container_color: Color,
    pub content_color: Color,
    pub disabled_content_color: Color,
    pub border: ResolvedBorder,
    pub border_focus: ResolvedBorder,
    pub min_width: f32,
    pub min_height: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub spacing_icon_label: f32,
    pub icon_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCheckbox {
    pub indicator_size: f32,
    pub min_interactive_area: f32,
    pub border_radius: f32,
    pub border_width_unselected: f32,
    pub border_width_selected: f32,
    pub border_width_focus: f32,
    pub border_color_unselected: Color,
    pub border_color_selected: Color,
    pub border_color_focus: Color,
    pub indicator_color: Color,
    pub checkmark_color: Color,
    pub disabled_color: Color,
    pub error_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSwitch {
    pub track_width: f32,
    pub track_height: f32,
    pub track_radius: f32,
    pub thumb_size_unselected: f32,
    pub thumb_size_selected: f32,
    pub track_color_unselected: Color,
    pub track_color_selected: Color,
    pub thumb_color_unselected: Color,
    pub thumb_color_selected: Color,
    pub checkmark_color: Color,
    pub disabled_opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMaterialColors {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub error: Color,
    pub on_error: Color,
}

impl<'a> ThemeResolver<'a> {
    pub const fn new(theme: &'a Theme, mode: ModeContext) -> Self {
        Self { theme, mode }
    }

    pub const fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub const fn mode(&self) -> ModeContext {
        self.mode
    }

    pub fn semantic_color(&self, role: ColorRole) -> Color {
        self.theme
            .semantic
            .color(role)
            .resolve(self.mode.dark_mode)
    }

    pub fn color(&self, token: &ColorToken) -> Color {
        match token {
            ColorToken::Semantic(role) => self.semantic_color(*role),
            ColorToken::Literal(value) => value.resolve(self.mode.dark_mode),
        }
    }

    pub fn dimension(&self, token: &DimensionToken) -> f32 {
        match token {
            DimensionToken::Semantic(role) => self
                .theme
                .semantic
                .dimension(*role, self.mode.high_contrast),
            DimensionToken::Literal(value) => *value,
        }
    }

    pub fn opacity(&self, token: &OpacityToken) -> f32 {
        match token {
            OpacityToken::Semantic(role) => self.theme.semantic.opacity(*role),
            OpacityToken::Literal(value) => *value,
        }
    }

    /// A `None` style resolves to a zero-width border.
    pub fn border(&self, spec: &BorderSpec) -> ResolvedBorder {
        let width = match spec.style {
            BorderStyle::None => 0.0,
            _ => self.dimension(&spec.width),
        };
        ResolvedBorder {
            width,
            radius: self.dimension(&spec.radius),
            color: self.color(&spec.color),
            style: spec.style,
        }
    }

    pub fn button(&self) -> ResolvedButton {
        let tokens = &self.theme.components.button;
        let style = self.theme.semantic.border.style_default;
        let border = self.border(&BorderSpec {
            width: tokens.border_width,
            radius: tokens.corner_radius,
            color: tokens.border_color,
            style,
        });
        let border_focus = self.border(&BorderSpec {
            width: tokens.border_width_focus,
            radius: tokens.corner_radius,
            color: tokens.border_color_focus,
            style,
        });
        ResolvedButton {
            container_color: self.color(&tokens.container_color),
            container_color_hover: self.color(&tokens.container_color_hover),
            container_color_pressed: self.color(&tokens.container_color_pressed),
            disabled_container_color: self.color(&tokens.disabled_container_color),
            content_color: self.color(&tokens.content_color),
            disabled_content_color: self.color(&tokens.disabled_content_color),
            border,
            border_focus,
            min_width: self.dimension(&tokens.min_width),
            min_height: self.dimension(&tokens.min_height),
            padding_horizontal: self.dimension(&tokens.padding_horizontal),
            padding_vertical: self.dimension(&tokens.padding_vertical),
            spacing_icon_label: self.dimension(&tokens.spacing_icon_label),
            icon_size: self.dimension(&tokens.icon_size),
        }
    }

    pub fn checkbox(&self) -> ResolvedCheckbox {
        let tokens = &self.theme.components.checkbox;
        ResolvedCheckbox {
            indicator_size: self.dimension(&tokens.indicator_size),
            min_interactive_area: self.dimension(&tokens.min_interactive_area),
            border_radius: self.dimension(&tokens.border_radius),
            border_width_unselected: self.dimension(&tokens.border_width_unselected),
            border_width_selected: self.dimension(&tokens.border_width_selected),
            border_width_focus: self.dimension(&tokens.border_width_focus),
            border_color_unselected: self.color(&tokens.border_color_unselected),
            border_color_selected: self.color(&tokens.border_color_selected),
            border_color_focus: self.color(&tokens.border_color_focus),
            indicator_color: self.color(&tokens.indicator_color),
            checkmark_color: self.color(&tokens.checkmark_color),
            disabled_color: self.color(&tokens.disabled_color),
            error_color: self.color(&tokens.error_color),
        }
    }

    pub fn switch(&self) -> ResolvedSwitch {
        let tokens = &self.theme.components.switch;
        ResolvedSwitch {
            track_width: self.dimension(&tokens.track_width),
            track_height: self.dimension(&tokens.track_height),
            track_radius: self.dimension(&tokens.track_radius),
            thumb_size_unselected: self.dimension(&tokens.thumb_size_unselected),
            thumb_size_selected: self.dimension(&tokens.thumb_size_selected),
            track_color_unselected: self.color(&tokens.track_color_unselected),
            track_color_selected: self.color(&tokens.track_color_selected),
            thumb_color_unselected: self.color(&tokens.thumb_color_unselected),
            thumb_color_selected: self.color(&tokens.thumb_color_selected),
            checkmark_color: self.color(&tokens.checkmark_color),
            disabled_opacity: self.opacity(&tokens.disabled_opacity),
        }
    }

    pub fn material(&self) -> ResolvedMaterialColors {
        let tokens = &self.theme.material;
        ResolvedMaterialColors {
            primary: self.color(&tokens.primary),
            on_primary: self.color(&tokens.on_primary),
            secondary: self.color(&tokens.secondary),
            on_secondary: self.color(&tokens.on_secondary),
            background: self.color(&tokens.background),
            on_background: self.color(&tokens.on_background),
            surface: self.color(&tokens.surface),
            on_surface: self.color(&tokens.on_surface),
            surface_variant: self.color(&tokens.surface_variant),
            on_surface_variant: self.color(&tokens.on_surface_variant),
            outline: self.color(&tokens.outline),
            error: self.color(&tokens.error),
            on_error: self.color(&tokens.on_error),
        }
    }

    /// Plans an icon draw. Unsupported graphics are skipped.
    pub fn icon<'g>(
        &self,
        graphics: &'g GraphicsObject,
        size: IconSize,
        enabled: bool,
    ) -> Option<IconPlan<'g>> {
        if let GraphicsObject::Unsupported { kind } = graphics {
            tracing::debug!(%kind, "skipping unsupported icon graphics");
            return None;
        }
        let tokens = &self.theme.components.icon;
        let tint = if enabled {
            &tokens.tint
        } else {
            &tokens.tint_disabled
        };
        Some(IconPlan {
            graphics,
            size: self.dimension(&tokens.size(size)),
            tint: self.color(tint),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{border, opacity, palette};
    use crate::semantic::DimensionRole;
    use crate::theme::{orange, sosh, white_label, wireframe, ThemeOverrides};

    #[test]
    fn orange_button_resolves_to_orange_primary() {
        let theme = orange();
        let light = ThemeResolver::new(&theme, ModeContext::LIGHT).button();
        assert_eq!(light.container_color, palette::ORANGE_550);
        assert_ne!(light.container_color, palette::SOSH_MAGENTA_500);
        assert_ne!(light.container_color, palette::BLUE_500);

        let dark = ThemeResolver::new(&theme, ModeContext::DARK).button();
        assert_eq!(dark.container_color, palette::ORANGE_500);
    }

    #[test]
    fn semantic_override_reaches_components_through_references() {
        let theme = sosh();
        let button = ThemeResolver::new(&theme, ModeContext::LIGHT).button();
        assert_eq!(button.border.radius, border::RADIUS_150);
        assert_eq!(button.container_color, palette::SOSH_MAGENTA_500);
    }

    #[test]
    fn high_contrast_thickens_focus_border() {
        let theme = orange();
        let standard = ThemeResolver::new(&theme, ModeContext::LIGHT).button();
        let high = ThemeResolver::new(&theme, ModeContext::LIGHT.with_high_contrast(true)).button();
        assert!(high.border_focus.width > standard.border_focus.width);
        assert_eq!(high.container_color, standard.container_color);
    }

    #[test]
    fn none_border_style_has_zero_width() {
        let theme = white_label();
        let resolver = ThemeResolver::new(&theme, ModeContext::LIGHT);
        let spec = BorderSpec::default_for(&theme.semantic.border).with_style(BorderStyle::None);
        let resolved = resolver.border(&spec);
        assert_eq!(resolved.width, 0.0);
        assert!(!resolved.is_visible());

        let focus = resolver.border(&BorderSpec::focus(&theme.semantic.border));
        assert_eq!(focus.width, theme.semantic.border.width_focus.standard);
        assert!(focus.is_visible());
    }

    #[test]
    fn wireframe_button_outline_is_dashed_and_visible() {
        let theme = wireframe();
        let button = ThemeResolver::new(&theme, ModeContext::DARK).button();
        assert_eq!(button.border.style, BorderStyle::Dashed);
        assert_eq!(button.border.color, palette::WHITE);
        assert!(button.border.is_visible());
    }

    #[test]
    fn white_label_corner_radius_differs_from_base() {
        let base = crate::theme::Theme::base();
        let theme = white_label();
        let base_button = ThemeResolver::new(&base, ModeContext::LIGHT).button();
        let button = ThemeResolver::new(&theme, ModeContext::LIGHT).button();
        assert_eq!(button.border.radius, border::RADIUS_75);
        assert_eq!(base_button.border.radius, border::RADIUS_0);
        assert_eq!(button.container_color, base_button.container_color);
    }

    #[test]
    fn material_primary_tracks_brand_primary() {
        let theme = sosh();
        let material = ThemeResolver::new(&theme, ModeContext::DARK).material();
        assert_eq!(material.primary, palette::SOSH_MAGENTA_300);
        assert_eq!(material.secondary, palette::SOSH_MAGENTA_300);
        assert_eq!(material.background, palette::GRAY_950);
    }

    #[test]
    fn switch_and_checkbox_resolve_against_theme() {
        let theme = orange();
        let resolver = ThemeResolver::new(&theme, ModeContext::LIGHT);
        let switch = resolver.switch();
        assert_eq!(switch.track_color_selected, palette::ORANGE_550);
        assert_eq!(switch.track_radius, border::RADIUS_PILL);

        let checkbox = resolver.checkbox();
        assert_eq!(checkbox.indicator_color, palette::ORANGE_550);
        assert_eq!(
            checkbox.border_radius,
            theme.semantic.dimension(DimensionRole::BorderRadiusSmall, false)
        );
    }

    #[test]
    fn switch_disabled_opacity_follows_semantic_opacity() {
        let parent = orange();
        let resolver = ThemeResolver::new(&parent, ModeContext::LIGHT);
        assert_eq!(resolver.switch().disabled_opacity, opacity::OPACITY_380);

        let dimmed = parent.derive(
            &ThemeOverrides::default().semantic(|s| s.opacity(|o| o.disabled(0.5_f32))),
        );
        let switch = ThemeResolver::new(&dimmed, ModeContext::LIGHT).switch();
        assert_eq!(switch.disabled_opacity, 0.5);

        let pinned = dimmed.derive(
            &ThemeOverrides::default()
                .components(|c| c.switch(|s| s.disabled_opacity(OpacityToken::Literal(0.25)))),
        );
        let switch = ThemeResolver::new(&pinned, ModeContext::LIGHT).switch();
        assert_eq!(switch.disabled_opacity, 0.25);
    }

    #[test]
    fn literal_tokens_ignore_theme() {
        let theme = orange().derive(
            &ThemeOverrides::default()
                .components(|c| c.button(|b| b.container_color(palette::GREEN_500))),
        );
        let resolver = ThemeResolver::new(&theme, ModeContext::DARK);
        assert_eq!(resolver.button().container_color, palette::GREEN_500);
    }
}
