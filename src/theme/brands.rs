use super::{Theme, ThemeOverrides};
use crate::border::BorderStyle;
use crate::raw::{border, palette};
use crate::semantic::{ColorRole, DimensionRole, SemanticColorValue};

const ORANGE_PRIMARY: SemanticColorValue =
    SemanticColorValue::new(palette::ORANGE_550, palette::ORANGE_500);
const ORANGE_COUNTRY_PRIMARY: SemanticColorValue =
    SemanticColorValue::new(palette::COUNTRY_ORANGE_500, palette::COUNTRY_ORANGE_300);
const SOSH_PRIMARY: SemanticColorValue =
    SemanticColorValue::new(palette::SOSH_MAGENTA_500, palette::SOSH_MAGENTA_300);
const WIREFRAME_PRIMARY: SemanticColorValue =
    SemanticColorValue::new(palette::GRAY_800, palette::GRAY_200);

pub fn orange() -> Theme {
    Theme::base().derive(
        &ThemeOverrides::default()
            .name("Orange")
            .semantic(|semantic| {
                semantic.color(|color| {
                    color
                        .brand_primary(ORANGE_PRIMARY)
                        .action_selected(ORANGE_PRIMARY)
                        .border_brand_primary(ORANGE_PRIMARY)
                        .content_on_brand_primary(SemanticColorValue::fixed(palette::BLACK))
                        .border_focus(SemanticColorValue::new(palette::BLACK, palette::WHITE))
                })
            }),
    )
}

/// Orange with its own primary; everything else is inherited from [`orange`].
pub fn orange_country() -> Theme {
    orange().derive(
        &ThemeOverrides::default()
            .name("Orange Country")
            .semantic(|semantic| {
                semantic.color(|color| {
                    color
                        .brand_primary(ORANGE_COUNTRY_PRIMARY)
                        .border_brand_primary(ORANGE_COUNTRY_PRIMARY)
                })
            }),
    )
}

pub fn sosh() -> Theme {
    Theme::base().derive(
        &ThemeOverrides::default()
            .name("Sosh")
            .semantic(|semantic| {
                semantic
                    .color(|color| {
                        color
                            .brand_primary(SOSH_PRIMARY)
                            .action_selected(SOSH_PRIMARY)
                            .border_brand_primary(SOSH_PRIMARY)
                            .border_focus(SemanticColorValue::new(
                                palette::SOSH_MAGENTA_600,
                                palette::SOSH_MAGENTA_300,
                            ))
                    })
                    .border(|b| b.radius_default(border::RADIUS_150))
                    .font(|font| font.family("Sosh"))
            })
            .material(|material| material.secondary(ColorRole::BrandPrimary)),
    )
}

pub fn white_label() -> Theme {
    Theme::base().derive(
        &ThemeOverrides::default()
            .name("White Label")
            .components(|components| {
                components.button(|button| button.corner_radius(DimensionRole::BorderRadiusMedium))
            }),
    )
}

pub fn wireframe() -> Theme {
    Theme::base().derive(
        &ThemeOverrides::default()
            .name("Wireframe")
            .semantic(|semantic| {
                semantic
                    .color(|color| {
                        color
                            .brand_primary(WIREFRAME_PRIMARY)
                            .action_selected(WIREFRAME_PRIMARY)
                            .border_brand_primary(WIREFRAME_PRIMARY)
                            .border_focus(SemanticColorValue::new(palette::BLACK, palette::WHITE))
                    })
                    .border(|b| b.style_default(BorderStyle::Dashed))
                    .font(|font| font.family("Courier New"))
            })
            .components(|components| {
                components.button(|button| {
                    button
                        .border_color(ColorRole::BorderEmphasized)
                        .border_width(DimensionRole::BorderWidthThin)
                })
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ColorToken, DimensionToken};

    #[test]
    fn orange_country_inherits_from_orange_not_base() {
        let orange = orange();
        let country = orange_country();

        assert_eq!(country.semantic.color.brand_primary, ORANGE_COUNTRY_PRIMARY);
        assert_eq!(
            country.semantic.color.action_selected,
            orange.semantic.color.action_selected
        );
        assert_ne!(
            country.semantic.color.action_selected,
            Theme::base().semantic.color.action_selected
        );
        assert_eq!(
            country.semantic.color.content_on_brand_primary,
            orange.semantic.color.content_on_brand_primary
        );
        assert_eq!(country.components, orange.components);
    }

    #[test]
    fn white_label_only_changes_button_corner_radius() {
        let base = Theme::base();
        let theme = white_label();
        assert_eq!(
            theme.components.button.corner_radius,
            DimensionToken::Semantic(DimensionRole::BorderRadiusMedium)
        );
        assert_eq!(theme.semantic, base.semantic);
        assert_eq!(theme.components.icon, base.components.icon);
        assert_eq!(
            theme.components.button.container_color,
            base.components.button.container_color
        );
    }

    #[test]
    fn wireframe_uses_dashed_outlined_buttons() {
        let theme = wireframe();
        assert_eq!(theme.semantic.border.style_default, BorderStyle::Dashed);
        assert_eq!(
            theme.components.button.border_color,
            ColorToken::Semantic(ColorRole::BorderEmphasized)
        );
    }

    #[test]
    fn brands_keep_distinct_primaries() {
        let primaries = [
            orange().semantic.color.brand_primary,
            orange_country().semantic.color.brand_primary,
            sosh().semantic.color.brand_primary,
            white_label().semantic.color.brand_primary,
            wireframe().semantic.color.brand_primary,
        ];
        for (i, a) in primaries.iter().enumerate() {
            for b in &primaries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
