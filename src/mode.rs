use serde::{Deserialize, Serialize};

/// User-facing appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn is_dark(self, system_dark: bool) -> bool {
        match self {
            Self::System => system_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }
}

/// Ambient flags read by every resolution call in a rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModeContext {
    pub dark_mode: bool,
    pub high_contrast: bool,
}

impl ModeContext {
    pub const LIGHT: ModeContext = ModeContext::new(false, false);
    pub const DARK: ModeContext = ModeContext::new(true, false);

    pub const fn new(dark_mode: bool, high_contrast: bool) -> Self {
        Self {
            dark_mode,
            high_contrast,
        }
    }

    pub const fn from_preference(mode: ThemeMode, system_dark: bool, high_contrast: bool) -> Self {
        Self::new(mode.is_dark(system_dark), high_contrast)
    }

    pub const fn with_high_contrast(self, high_contrast: bool) -> Self {
        Self {
            high_contrast,
            ..self
        }
    }
}
