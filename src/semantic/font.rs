use crate::raw::font;

pub const DEFAULT_FONT_FAMILY: &str = "Helvetica Neue";

token_group! {
    pub struct FontSemanticTokens / FontSemanticOverrides {
        family: String,
        size_label_medium: f32,
        size_body_medium: f32,
        size_body_large: f32,
        size_heading_medium: f32,
        size_display_small: f32,
        line_height_body_medium: f32,
        line_height_body_large: f32,
        line_height_display_small: f32,
        weight_default: f32,
        weight_strong: f32,
    }
}

impl Default for FontSemanticTokens {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size_label_medium: font::SIZE_150,
            size_body_medium: font::SIZE_200,
            size_body_large: font::SIZE_250,
            size_heading_medium: font::SIZE_350,
            size_display_small: font::SIZE_500,
            line_height_body_medium: font::LINE_HEIGHT_250,
            line_height_body_large: font::LINE_HEIGHT_300,
            line_height_display_small: font::LINE_HEIGHT_600,
            weight_default: font::WEIGHT_REGULAR,
            weight_strong: font::WEIGHT_BOLD,
        }
    }
}
