use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::component::{ColorToken, DimensionToken};
use crate::semantic::{BorderSemanticTokens, ColorRole, DimensionRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Solid => "Solid",
            Self::Dashed => "Dashed",
            Self::Dotted => "Dotted",
        }
    }

    /// Parses a style name case-insensitively. Unrecognized input yields
    /// [`BorderStyle::None`] rather than an error.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let mut chars = lowered.chars();
        let normalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        match normalized.as_str() {
            "None" => Self::None,
            "Solid" => Self::Solid,
            "Dashed" => Self::Dashed,
            "Dotted" => Self::Dotted,
            _ => {
                tracing::debug!(raw, "unrecognized border style; falling back to None");
                Self::None
            }
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for BorderStyle {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for BorderStyle {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<BorderStyle> for String {
    fn from(style: BorderStyle) -> Self {
        style.name().to_string()
    }
}

/// Unresolved border description, as attached to a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSpec {
    pub width: DimensionToken,
    pub radius: DimensionToken,
    pub color: ColorToken,
    pub style: BorderStyle,
}

impl BorderSpec {
    /// The theme's default border: default width, radius and style with the
    /// default border color.
    pub fn default_for(tokens: &BorderSemanticTokens) -> Self {
        Self {
            width: DimensionRole::BorderWidthDefault.into(),
            radius: DimensionRole::BorderRadiusDefault.into(),
            color: ColorRole::BorderDefault.into(),
            style: tokens.style_default,
        }
    }

    pub fn focus(tokens: &BorderSemanticTokens) -> Self {
        Self {
            width: DimensionRole::BorderWidthFocus.into(),
            radius: DimensionRole::BorderRadiusDefault.into(),
            color: ColorRole::BorderFocus.into(),
            style: tokens.style_default,
        }
    }

    pub fn with_color(self, color: impl Into<ColorToken>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    pub fn with_style(self, style: BorderStyle) -> Self {
        Self { style, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBorder {
    pub width: f32,
    pub radius: f32,
    pub color: Color,
    pub style: BorderStyle,
}

impl ResolvedBorder {
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.width > 0.0 && self.color.a > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(BorderStyle::parse("solid"), BorderStyle::Solid);
        assert_eq!(BorderStyle::parse("SOLID"), BorderStyle::Solid);
        assert_eq!(BorderStyle::parse("dashed"), BorderStyle::Dashed);
        assert_eq!(BorderStyle::parse("DoTTeD"), BorderStyle::Dotted);
        assert_eq!(BorderStyle::parse("none"), BorderStyle::None);
    }

    #[test]
    fn parse_falls_back_to_none() {
        assert_eq!(BorderStyle::parse("unknown-garbage"), BorderStyle::None);
        assert_eq!(BorderStyle::parse(""), BorderStyle::None);
        assert_eq!(BorderStyle::parse(" solid"), BorderStyle::None);
        assert_eq!(BorderStyle::parse("solid-ish"), BorderStyle::None);
    }

    #[test]
    fn deserializing_never_fails_on_unknown_style() {
        let style: BorderStyle = serde_json::from_str("\"zigzag\"").unwrap();
        assert_eq!(style, BorderStyle::None);
        let style: BorderStyle = serde_json::from_str("\"Dashed\"").unwrap();
        assert_eq!(style, BorderStyle::Dashed);
        assert_eq!(serde_json::to_string(&BorderStyle::Dotted).unwrap(), "\"Dotted\"");
    }

    #[test]
    fn resolved_border_visibility() {
        let border = ResolvedBorder {
            width: 1.0,
            radius: 0.0,
            color: Color::rgb(0x000000),
            style: BorderStyle::Solid,
        };
        assert!(border.is_visible());
        assert!(!ResolvedBorder {
            style: BorderStyle::None,
            ..border
        }
        .is_visible());
        assert!(!ResolvedBorder {
            color: Color::TRANSPARENT,
            ..border
        }
        .is_visible());
    }
}
