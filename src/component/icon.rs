use serde::{Deserialize, Serialize};

use super::{ColorToken, DimensionToken};
use crate::semantic::{ColorRole, DimensionRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

token_group! {
    pub struct IconTokens / IconOverrides {
        tint: ColorToken,
        tint_disabled: ColorToken,
        size_small: DimensionToken,
        size_medium: DimensionToken,
        size_large: DimensionToken,
    }
}

impl Default for IconTokens {
    fn default() -> Self {
        Self {
            tint: ColorRole::ContentDefault.into(),
            tint_disabled: ColorRole::ContentDisabled.into(),
            size_small: DimensionRole::SizeIconSmall.into(),
            size_medium: DimensionRole::SizeIconMedium.into(),
            size_large: DimensionRole::SizeIconLarge.into(),
        }
    }
}

impl IconTokens {
    pub fn size(&self, size: IconSize) -> DimensionToken {
        match size {
            IconSize::Small => self.size_small,
            IconSize::Medium => self.size_medium,
            IconSize::Large => self.size_large,
        }
    }
}
