//! Graphical assets an icon can be drawn from.

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    pub id: String,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

/// Opaque handle to a host-side painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintHandle(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsObject {
    Raster(RasterImage),
    Vector(VectorImage),
    Painter(PaintHandle),
    /// Anything the host could not map to a supported kind. Drawing it is a no-op.
    Unsupported { kind: String },
}

impl GraphicsObject {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

/// What the host should draw: the asset, its square size in dp, and its tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPlan<'a> {
    pub graphics: &'a GraphicsObject,
    pub size: f32,
    pub tint: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::IconSize;
    use crate::mode::ModeContext;
    use crate::raw::{dimension, palette};
    use crate::theme::{orange, ThemeResolver};

    #[test]
    fn supported_graphics_get_size_and_tint() {
        let theme = orange();
        let resolver = ThemeResolver::new(&theme, ModeContext::LIGHT);
        let vector = GraphicsObject::Vector(VectorImage {
            id: "ic_heart".to_string(),
            viewport_width: 24.0,
            viewport_height: 24.0,
        });

        let plan = resolver.icon(&vector, IconSize::Large, true).unwrap();
        assert_eq!(plan.size, dimension::DIMENSION_300);
        assert_eq!(plan.tint, palette::BLACK);
        assert_eq!(plan.graphics, &vector);

        let disabled = resolver
            .icon(&GraphicsObject::Painter(PaintHandle(7)), IconSize::Small, false)
            .unwrap();
        assert_eq!(disabled.size, dimension::DIMENSION_200);
        assert_eq!(disabled.tint, palette::GRAY_300);
    }

    #[test]
    fn raster_images_are_supported() {
        let theme = orange();
        let raster = GraphicsObject::Raster(RasterImage {
            id: "flag".to_string(),
            width: 64,
            height: 48,
        });
        assert!(raster.is_supported());
        let plan = ThemeResolver::new(&theme, ModeContext::DARK)
            .icon(&raster, IconSize::Medium, true)
            .unwrap();
        assert_eq!(plan.tint, palette::WHITE);
    }

    #[test]
    fn unsupported_graphics_are_a_no_op() {
        let theme = orange();
        let unsupported = GraphicsObject::Unsupported {
            kind: "lottie".to_string(),
        };
        assert!(!unsupported.is_supported());
        assert!(ThemeResolver::new(&theme, ModeContext::LIGHT)
            .icon(&unsupported, IconSize::Medium, true)
            .is_none());
    }
}
