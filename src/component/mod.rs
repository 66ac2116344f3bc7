//! Component tokens: per-widget bundles referencing semantic roles.
//!
//! Fields hold references rather than copied values, so a theme that changes
//! a semantic role automatically restyles every component pointing at it.

mod button;
mod checkbox;
mod icon;
mod switch;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

pub use button::{ButtonOverrides, ButtonTokens};
pub use checkbox::{CheckboxOverrides, CheckboxTokens};
pub use icon::{IconOverrides, IconSize, IconTokens};
pub use switch::{SwitchOverrides, SwitchTokens};

use crate::color::Color;
use crate::semantic::{ColorRole, DimensionRole, OpacityRole, SemanticColorValue};

/// A color slot: either a semantic role or a literal light/dark pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorToken {
    Semantic(ColorRole),
    Literal(SemanticColorValue),
}

impl From<ColorRole> for ColorToken {
    fn from(role: ColorRole) -> Self {
        Self::Semantic(role)
    }
}

impl From<SemanticColorValue> for ColorToken {
    fn from(value: SemanticColorValue) -> Self {
        Self::Literal(value)
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        Self::Literal(SemanticColorValue::fixed(color))
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match read_token(deserializer, "color")? {
            TokenRepr::Role(role) => Self::Semantic(role),
            TokenRepr::Literal(value) => Self::Literal(value),
        })
    }
}

/// A dimension slot in dp: either a semantic role or a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DimensionToken {
    Semantic(DimensionRole),
    Literal(f32),
}

impl From<DimensionRole> for DimensionToken {
    fn from(role: DimensionRole) -> Self {
        Self::Semantic(role)
    }
}

impl From<f32> for DimensionToken {
    fn from(value: f32) -> Self {
        Self::Literal(value)
    }
}

impl<'de> Deserialize<'de> for DimensionToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match read_token(deserializer, "dimension")? {
            TokenRepr::Role(role) => Self::Semantic(role),
            TokenRepr::Literal(value) => Self::Literal(value),
        })
    }
}

/// An opacity slot: either a semantic role or a literal alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OpacityToken {
    Semantic(OpacityRole),
    Literal(f32),
}

impl From<OpacityRole> for OpacityToken {
    fn from(role: OpacityRole) -> Self {
        Self::Semantic(role)
    }
}

impl From<f32> for OpacityToken {
    fn from(value: f32) -> Self {
        Self::Literal(value)
    }
}

impl<'de> Deserialize<'de> for OpacityToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match read_token(deserializer, "opacity")? {
            TokenRepr::Role(role) => Self::Semantic(role),
            TokenRepr::Literal(value) => Self::Literal(value),
        })
    }
}

enum TokenRepr<R, L> {
    Role(R),
    Literal(L),
}

/// Strings name a semantic role; anything else is read as a literal.
fn read_token<'de, D, R, L>(deserializer: D, kind: &str) -> Result<TokenRepr<R, L>, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
    L: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => R::deserialize(serde_json::Value::String(name.clone()))
            .map(TokenRepr::Role)
            .map_err(|err| de::Error::custom(format!("unknown {kind} role `{name}`: {err}"))),
        literal => L::deserialize(literal)
            .map(TokenRepr::Literal)
            .map_err(|err| de::Error::custom(format!("invalid {kind} literal: {err}"))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentTokens {
    pub button: ButtonTokens,
    pub icon: IconTokens,
    pub checkbox: CheckboxTokens,
    pub switch: SwitchTokens,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentOverrides {
    #[serde(skip_serializing_if = "ButtonOverrides::is_empty")]
    pub button: ButtonOverrides,
    #[serde(skip_serializing_if = "IconOverrides::is_empty")]
    pub icon: IconOverrides,
    #[serde(skip_serializing_if = "CheckboxOverrides::is_empty")]
    pub checkbox: CheckboxOverrides,
    #[serde(skip_serializing_if = "SwitchOverrides::is_empty")]
    pub switch: SwitchOverrides,
}

impl_nested_overrides_methods!(ComponentOverrides {
    button: ButtonOverrides,
    icon: IconOverrides,
    checkbox: CheckboxOverrides,
    switch: SwitchOverrides,
});

impl ComponentOverrides {
    pub fn is_empty(&self) -> bool {
        self.button.is_empty()
            && self.icon.is_empty()
            && self.checkbox.is_empty()
            && self.switch.is_empty()
    }
}

impl ComponentTokens {
    pub fn merged_with(&self, overrides: &ComponentOverrides) -> Self {
        Self {
            button: self.button.merged_with(&overrides.button),
            icon: self.icon.merged_with(&overrides.icon),
            checkbox: self.checkbox.merged_with(&overrides.checkbox),
            switch: self.switch.merged_with(&overrides.switch),
        }
    }
}
