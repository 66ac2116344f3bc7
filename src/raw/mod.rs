//! Raw tokens: primitive named constants with no semantic meaning.
//!
//! Prefer the typed constants in the submodules; [`RawTokenTable`] exists for
//! name-based lookups coming from outside the crate.

use thiserror::Error;

use crate::color::Color;

pub mod palette {
    use crate::color::Color;

    pub const WHITE: Color = Color::rgb(0xFFFFFF);
    pub const BLACK: Color = Color::rgb(0x000000);

    pub const GRAY_50: Color = Color::rgb(0xF7F7F7);
    pub const GRAY_100: Color = Color::rgb(0xEEEEEE);
    pub const GRAY_200: Color = Color::rgb(0xDDDDDD);
    pub const GRAY_300: Color = Color::rgb(0xCCCCCC);
    pub const GRAY_400: Color = Color::rgb(0x999999);
    pub const GRAY_500: Color = Color::rgb(0x757575);
    pub const GRAY_600: Color = Color::rgb(0x666666);
    pub const GRAY_700: Color = Color::rgb(0x595959);
    pub const GRAY_800: Color = Color::rgb(0x333333);
    pub const GRAY_900: Color = Color::rgb(0x1F1F1F);
    pub const GRAY_950: Color = Color::rgb(0x141414);

    pub const ORANGE_100: Color = Color::rgb(0xFFE5CC);
    pub const ORANGE_300: Color = Color::rgb(0xFFA040);
    pub const ORANGE_400: Color = Color::rgb(0xFF8A1F);
    pub const ORANGE_500: Color = Color::rgb(0xFF7900);
    pub const ORANGE_550: Color = Color::rgb(0xF16E00);
    pub const ORANGE_600: Color = Color::rgb(0xCC6100);

    pub const COUNTRY_ORANGE_300: Color = Color::rgb(0xFF8F5C);
    pub const COUNTRY_ORANGE_500: Color = Color::rgb(0xE05206);

    pub const SOSH_MAGENTA_300: Color = Color::rgb(0xF266AE);
    pub const SOSH_MAGENTA_500: Color = Color::rgb(0xE0037A);
    pub const SOSH_MAGENTA_600: Color = Color::rgb(0xB30062);

    pub const BLUE_300: Color = Color::rgb(0x5C9DFF);
    pub const BLUE_500: Color = Color::rgb(0x0064D2);
    pub const BLUE_600: Color = Color::rgb(0x0050A8);

    pub const RED_300: Color = Color::rgb(0xFF4D4D);
    pub const RED_500: Color = Color::rgb(0xDB0000);
    pub const GREEN_300: Color = Color::rgb(0x56C25C);
    pub const GREEN_500: Color = Color::rgb(0x228722);

    pub const SHADOW: Color = Color::rgba(0x0000_003D);
}

pub mod dimension {
    pub const DIMENSION_0: f32 = 0.0;
    pub const DIMENSION_25: f32 = 2.0;
    pub const DIMENSION_50: f32 = 4.0;
    pub const DIMENSION_75: f32 = 6.0;
    pub const DIMENSION_100: f32 = 8.0;
    pub const DIMENSION_150: f32 = 12.0;
    pub const DIMENSION_200: f32 = 16.0;
    pub const DIMENSION_250: f32 = 20.0;
    pub const DIMENSION_300: f32 = 24.0;
    pub const DIMENSION_400: f32 = 32.0;
    pub const DIMENSION_500: f32 = 40.0;
    pub const DIMENSION_600: f32 = 48.0;
    pub const DIMENSION_1000: f32 = 80.0;
}

pub mod border {
    pub const WIDTH_0: f32 = 0.0;
    pub const WIDTH_25: f32 = 1.0;
    pub const WIDTH_50: f32 = 2.0;
    pub const WIDTH_75: f32 = 3.0;
    pub const WIDTH_100: f32 = 4.0;

    pub const RADIUS_0: f32 = 0.0;
    pub const RADIUS_50: f32 = 2.0;
    pub const RADIUS_75: f32 = 4.0;
    pub const RADIUS_150: f32 = 8.0;
    pub const RADIUS_300: f32 = 16.0;
    pub const RADIUS_PILL: f32 = 9999.0;
}

pub mod opacity {
    pub const OPACITY_0: f32 = 0.0;
    pub const OPACITY_160: f32 = 0.16;
    pub const OPACITY_380: f32 = 0.38;
    pub const OPACITY_640: f32 = 0.64;
    pub const OPACITY_1000: f32 = 1.0;
}

pub mod elevation {
    pub const ELEVATION_0: f32 = 0.0;
    pub const ELEVATION_100: f32 = 1.0;
    pub const ELEVATION_200: f32 = 3.0;
    pub const ELEVATION_300: f32 = 6.0;
    pub const ELEVATION_400: f32 = 12.0;
}

pub mod font {
    pub const SIZE_150: f32 = 12.0;
    pub const SIZE_200: f32 = 14.0;
    pub const SIZE_250: f32 = 16.0;
    pub const SIZE_350: f32 = 20.0;
    pub const SIZE_500: f32 = 28.0;

    pub const LINE_HEIGHT_250: f32 = 20.0;
    pub const LINE_HEIGHT_300: f32 = 24.0;
    pub const LINE_HEIGHT_600: f32 = 36.0;

    pub const WEIGHT_REGULAR: f32 = 400.0;
    pub const WEIGHT_BOLD: f32 = 700.0;
}

pub mod grid {
    pub const COMPACT_MAX_WIDTH: f32 = 600.0;
    pub const MEDIUM_MAX_WIDTH: f32 = 840.0;

    pub const COMPACT_MARGIN: f32 = 16.0;
    pub const MEDIUM_MARGIN: f32 = 24.0;
    pub const EXPANDED_MARGIN: f32 = 32.0;

    pub const COMPACT_COLUMN_GAP: f32 = 8.0;
    pub const MEDIUM_COLUMN_GAP: f32 = 16.0;
    pub const EXPANDED_COLUMN_GAP: f32 = 24.0;

    pub const COMPACT_COLUMNS: u8 = 4;
    pub const MEDIUM_COLUMNS: u8 = 8;
    pub const EXPANDED_COLUMNS: u8 = 12;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawTokenError {
    #[error("unknown raw token: {name}")]
    Unknown { name: String },
    #[error("raw token {name} is not a {expected}")]
    KindMismatch { name: String, expected: &'static str },
}

pub type RawTokenResult<T> = std::result::Result<T, RawTokenError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Number(f32),
    Color(Color),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawToken {
    pub name: &'static str,
    pub value: RawValue,
}

impl RawToken {
    const fn color(name: &'static str, value: Color) -> Self {
        Self {
            name,
            value: RawValue::Color(value),
        }
    }

    const fn number(name: &'static str, value: f32) -> Self {
        Self {
            name,
            value: RawValue::Number(value),
        }
    }

    /// Whole-number tokens; `u8` always widens to `f32` exactly.
    const fn count(name: &'static str, value: u8) -> Self {
        Self::number(name, value as f32)
    }
}

pub const RAW_TOKENS: &[RawToken] = &[
    RawToken::color("color.white", palette::WHITE),
    RawToken::color("color.black", palette::BLACK),
    RawToken::color("color.gray.50", palette::GRAY_50),
    RawToken::color("color.gray.100", palette::GRAY_100),
    RawToken::color("color.gray.200", palette::GRAY_200),
    RawToken::color("color.gray.300", palette::GRAY_300),
    RawToken::color("color.gray.400", palette::GRAY_400),
    RawToken::color("color.gray.500", palette::GRAY_500),
    RawToken::color("color.gray.600", palette::GRAY_600),
    RawToken::color("color.gray.700", palette::GRAY_700),
    RawToken::color("color.gray.800", palette::GRAY_800),
    RawToken::color("color.gray.900", palette::GRAY_900),
    RawToken::color("color.gray.950", palette::GRAY_950),
    RawToken::color("color.orange.100", palette::ORANGE_100),
    RawToken::color("color.orange.300", palette::ORANGE_300),
    RawToken::color("color.orange.400", palette::ORANGE_400),
    RawToken::color("color.orange.500", palette::ORANGE_500),
    RawToken::color("color.orange.550", palette::ORANGE_550),
    RawToken::color("color.orange.600", palette::ORANGE_600),
    RawToken::color("color.country-orange.300", palette::COUNTRY_ORANGE_300),
    RawToken::color("color.country-orange.500", palette::COUNTRY_ORANGE_500),
    RawToken::color("color.sosh-magenta.300", palette::SOSH_MAGENTA_300),
    RawToken::color("color.sosh-magenta.500", palette::SOSH_MAGENTA_500),
    RawToken::color("color.sosh-magenta.600", palette::SOSH_MAGENTA_600),
    RawToken::color("color.blue.300", palette::BLUE_300),
    RawToken::color("color.blue.500", palette::BLUE_500),
    RawToken::color("color.blue.600", palette::BLUE_600),
    RawToken::color("color.red.300", palette::RED_300),
    RawToken::color("color.red.500", palette::RED_500),
    RawToken::color("color.green.300", palette::GREEN_300),
    RawToken::color("color.green.500", palette::GREEN_500),
    RawToken::color("color.shadow", palette::SHADOW),
    RawToken::number("dimension.0", dimension::DIMENSION_0),
    RawToken::number("dimension.25", dimension::DIMENSION_25),
    RawToken::number("dimension.50", dimension::DIMENSION_50),
    RawToken::number("dimension.75", dimension::DIMENSION_75),
    RawToken::number("dimension.100", dimension::DIMENSION_100),
    RawToken::number("dimension.150", dimension::DIMENSION_150),
    RawToken::number("dimension.200", dimension::DIMENSION_200),
    RawToken::number("dimension.250", dimension::DIMENSION_250),
    RawToken::number("dimension.300", dimension::DIMENSION_300),
    RawToken::number("dimension.400", dimension::DIMENSION_400),
    RawToken::number("dimension.500", dimension::DIMENSION_500),
    RawToken::number("dimension.600", dimension::DIMENSION_600),
    RawToken::number("dimension.1000", dimension::DIMENSION_1000),
    RawToken::number("border.width.0", border::WIDTH_0),
    RawToken::number("border.width.25", border::WIDTH_25),
    RawToken::number("border.width.50", border::WIDTH_50),
    RawToken::number("border.width.75", border::WIDTH_75),
    RawToken::number("border.width.100", border::WIDTH_100),
    RawToken::number("border.radius.0", border::RADIUS_0),
    RawToken::number("border.radius.50", border::RADIUS_50),
    RawToken::number("border.radius.75", border::RADIUS_75),
    RawToken::number("border.radius.150", border::RADIUS_150),
    RawToken::number("border.radius.300", border::RADIUS_300),
    RawToken::number("border.radius.pill", border::RADIUS_PILL),
    RawToken::number("opacity.0", opacity::OPACITY_0),
    RawToken::number("opacity.160", opacity::OPACITY_160),
    RawToken::number("opacity.380", opacity::OPACITY_380),
    RawToken::number("opacity.640", opacity::OPACITY_640),
    RawToken::number("opacity.1000", opacity::OPACITY_1000),
    RawToken::number("elevation.0", elevation::ELEVATION_0),
    RawToken::number("elevation.100", elevation::ELEVATION_100),
    RawToken::number("elevation.200", elevation::ELEVATION_200),
    RawToken::number("elevation.300", elevation::ELEVATION_300),
    RawToken::number("elevation.400", elevation::ELEVATION_400),
    RawToken::number("font.size.150", font::SIZE_150),
    RawToken::number("font.size.200", font::SIZE_200),
    RawToken::number("font.size.250", font::SIZE_250),
    RawToken::number("font.size.350", font::SIZE_350),
    RawToken::number("font.size.500", font::SIZE_500),
    RawToken::number("font.line-height.250", font::LINE_HEIGHT_250),
    RawToken::number("font.line-height.300", font::LINE_HEIGHT_300),
    RawToken::number("font.line-height.600", font::LINE_HEIGHT_600),
    RawToken::number("font.weight.regular", font::WEIGHT_REGULAR),
    RawToken::number("font.weight.bold", font::WEIGHT_BOLD),
    RawToken::number("grid.compact.max-width", grid::COMPACT_MAX_WIDTH),
    RawToken::number("grid.medium.max-width", grid::MEDIUM_MAX_WIDTH),
    RawToken::number("grid.compact.margin", grid::COMPACT_MARGIN),
    RawToken::number("grid.medium.margin", grid::MEDIUM_MARGIN),
    RawToken::number("grid.expanded.margin", grid::EXPANDED_MARGIN),
    RawToken::number("grid.compact.column-gap", grid::COMPACT_COLUMN_GAP),
    RawToken::number("grid.medium.column-gap", grid::MEDIUM_COLUMN_GAP),
    RawToken::number("grid.expanded.column-gap", grid::EXPANDED_COLUMN_GAP),
    RawToken::count("grid.compact.columns", grid::COMPACT_COLUMNS),
    RawToken::count("grid.medium.columns", grid::MEDIUM_COLUMNS),
    RawToken::count("grid.expanded.columns", grid::EXPANDED_COLUMNS),
];

/// Name-based view over [`RAW_TOKENS`].
pub struct RawTokenTable;

impl RawTokenTable {
    pub fn get(name: &str) -> RawTokenResult<RawValue> {
        RAW_TOKENS
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value)
            .ok_or_else(|| RawTokenError::Unknown {
                name: name.to_string(),
            })
    }

    pub fn color(name: &str) -> RawTokenResult<Color> {
        match Self::get(name)? {
            RawValue::Color(color) => Ok(color),
            RawValue::Number(_) => Err(RawTokenError::KindMismatch {
                name: name.to_string(),
                expected: "color",
            }),
        }
    }

    pub fn number(name: &str) -> RawTokenResult<f32> {
        match Self::get(name)? {
            RawValue::Number(value) => Ok(value),
            RawValue::Color(_) => Err(RawTokenError::KindMismatch {
                name: name.to_string(),
                expected: "number",
            }),
        }
    }

    pub fn tokens() -> &'static [RawToken] {
        RAW_TOKENS
    }
}
