//! Themes: complete, immutable assignments of semantic and component tokens.
//!
//! A derived theme is produced by [`build_theme`], which copies its parent and
//! replaces only the keys named in a [`ThemeOverrides`]. Parents are never
//! mutated, so every theme owns an independent set of tables.

mod brands;
mod material;
mod resolver;
pub mod settings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::{ComponentOverrides, ComponentTokens};
use crate::semantic::{SemanticOverrides, SemanticTokens};

pub use brands::{orange, orange_country, sosh, white_label, wireframe};
pub use material::{MaterialColorOverrides, MaterialColorTokens};
pub use resolver::{
    ResolvedButton, ResolvedCheckbox, ResolvedMaterialColors, ResolvedSwitch, ThemeResolver,
};

pub const BASE_THEME_NAME: &str = "Base";

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme: {name}")]
    UnknownTheme { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub semantic: SemanticTokens,
    pub components: ComponentTokens,
    pub material: MaterialColorTokens,
}

impl Theme {
    /// The base contract every brand derives from.
    pub fn base() -> Self {
        Self {
            name: BASE_THEME_NAME.to_string(),
            semantic: SemanticTokens::default(),
            components: ComponentTokens::default(),
            material: MaterialColorTokens::default(),
        }
    }

    pub fn derive(&self, overrides: &ThemeOverrides) -> Self {
        build_theme(self, overrides)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Partial theme: every key left as `None` keeps the parent's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "SemanticOverrides::is_empty")]
    pub semantic: SemanticOverrides,
    #[serde(skip_serializing_if = "ComponentOverrides::is_empty")]
    pub components: ComponentOverrides,
    #[serde(skip_serializing_if = "MaterialColorOverrides::is_empty")]
    pub material: MaterialColorOverrides,
}

impl_nested_overrides_methods!(ThemeOverrides {
    semantic: SemanticOverrides,
    components: ComponentOverrides,
    material: MaterialColorOverrides,
});

impl ThemeOverrides {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.semantic.is_empty()
            && self.components.is_empty()
            && self.material.is_empty()
    }
}

/// Builds a new theme equal to `base` except for the keys present in `overrides`.
pub fn build_theme(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    let name = overrides.name.clone().unwrap_or_else(|| base.name.clone());
    tracing::debug!(
        base = %base.name,
        derived = %name,
        empty = overrides.is_empty(),
        "building theme"
    );
    Theme {
        name,
        semantic: base.semantic.merged_with(&overrides.semantic),
        components: base.components.merged_with(&overrides.components),
        material: base.material.merged_with(&overrides.material),
    }
}

/// The selectable brand themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    #[default]
    Orange,
    OrangeCountry,
    Sosh,
    WhiteLabel,
    Wireframe,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Orange,
        ThemeId::OrangeCountry,
        ThemeId::Sosh,
        ThemeId::WhiteLabel,
        ThemeId::Wireframe,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::OrangeCountry => "orange-country",
            Self::Sosh => "sosh",
            Self::WhiteLabel => "white-label",
            Self::Wireframe => "wireframe",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Orange => "Orange",
            Self::OrangeCountry => "Orange Country",
            Self::Sosh => "Sosh",
            Self::WhiteLabel => "White Label",
            Self::Wireframe => "Wireframe",
        }
    }

    pub fn build(self) -> Theme {
        match self {
            Self::Orange => orange(),
            Self::OrangeCountry => orange_country(),
            Self::Sosh => sosh(),
            Self::WhiteLabel => white_label(),
            Self::Wireframe => wireframe(),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    /// Accepts `orange-country`, `orange_country`, `Orange Country` and `OrangeCountry`.
    fn from_str(s: &str) -> ThemeResult<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().replace('-', "") == normalized)
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: s.to_string(),
            })
    }
}
