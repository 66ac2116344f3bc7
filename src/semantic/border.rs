use super::value::ContrastDimension;
use crate::border::BorderStyle;
use crate::raw::border;

token_group! {
    pub struct BorderSemanticTokens / BorderSemanticOverrides {
        width_none: f32,
        width_default: f32,
        width_thin: f32,
        width_medium: f32,
        width_thick: f32,
        width_focus: ContrastDimension,
        width_focus_inset: ContrastDimension,
        radius_none: f32,
        radius_default: f32,
        radius_small: f32,
        radius_medium: f32,
        radius_large: f32,
        radius_pill: f32,
        style_default: BorderStyle,
        style_drag: BorderStyle,
    }
}

impl Default for BorderSemanticTokens {
    fn default() -> Self {
        Self {
            width_none: border::WIDTH_0,
            width_default: border::WIDTH_25,
            width_thin: border::WIDTH_25,
            width_medium: border::WIDTH_50,
            width_thick: border::WIDTH_75,
            width_focus: ContrastDimension::new(border::WIDTH_50, border::WIDTH_75),
            width_focus_inset: ContrastDimension::new(border::WIDTH_25, border::WIDTH_50),
            radius_none: border::RADIUS_0,
            radius_default: border::RADIUS_0,
            radius_small: border::RADIUS_50,
            radius_medium: border::RADIUS_75,
            radius_large: border::RADIUS_150,
            radius_pill: border::RADIUS_PILL,
            style_default: BorderStyle::Solid,
            style_drag: BorderStyle::Dashed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_border_style_softly() {
        let overrides: BorderSemanticOverrides =
            serde_json::from_str(r#"{ "style_default": "DOTTED", "style_drag": "wavy" }"#).unwrap();
        let merged = BorderSemanticTokens::default().merged_with(&overrides);
        assert_eq!(merged.style_default, BorderStyle::Dotted);
        assert_eq!(merged.style_drag, BorderStyle::None);
        assert_eq!(merged.radius_pill, border::RADIUS_PILL);
    }
}
