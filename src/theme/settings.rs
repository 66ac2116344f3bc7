//! Persisted theme selection and user overrides (`ouds/theme.json`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Theme, ThemeId, ThemeOverrides};
use crate::mode::{ModeContext, ThemeMode};

const APP_DIR: &str = "ouds";
const THEME_SETTINGS_FILE: &str = "theme.json";

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read theme settings: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to write theme settings: {path}")]
    WriteConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme settings")]
    ParseConfig(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub theme: ThemeId,
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ThemeOverrides>,
}

impl ThemeSettings {
    /// Builds the selected brand theme with the user's overrides applied on top.
    pub fn theme(&self) -> Theme {
        let brand = self.theme.build();
        match &self.overrides {
            Some(overrides) => brand.derive(overrides),
            None => brand,
        }
    }

    pub fn mode_context(&self, system_dark: bool) -> ModeContext {
        ModeContext::from_preference(self.mode, system_dark, self.high_contrast)
    }
}

pub fn load_theme_settings() -> SettingsResult<ThemeSettings> {
    let (xdg_config_home, home) = settings_env_dirs();
    load_theme_settings_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_theme_settings_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SettingsResult<ThemeSettings> {
    let path = theme_settings_path_with(xdg_config_home, home)?;
    match read_settings_file(&path)? {
        Some(settings) => {
            tracing::debug!(theme = %settings.theme, mode = ?settings.mode, "loaded theme settings");
            Ok(settings)
        }
        None => {
            tracing::debug!(path = %path.display(), "no theme settings; using defaults");
            Ok(ThemeSettings::default())
        }
    }
}

pub fn save_theme_preference(theme: ThemeId, mode: ThemeMode) -> SettingsResult<()> {
    let (xdg_config_home, home) = settings_env_dirs();
    save_theme_preference_with(theme, mode, xdg_config_home.as_deref(), home.as_deref())
}

/// Rewrites the theme and mode, keeping every other stored setting.
///
/// An existing file that cannot be read or parsed is left untouched and the
/// error is returned, so user overrides are never replaced by defaults.
fn save_theme_preference_with(
    theme: ThemeId,
    mode: ThemeMode,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SettingsResult<()> {
    let path = theme_settings_path_with(xdg_config_home, home)?;
    let existing = match read_settings_file(&path) {
        Ok(existing) => existing.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "not saving theme preference over unreadable settings"
            );
            return Err(error);
        }
    };
    let settings = ThemeSettings {
        theme,
        mode,
        ..existing
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SettingsError::WriteConfig {
            path: path.clone(),
            source,
        })?;
    }
    let serialized = serde_json::to_string_pretty(&settings)?;
    fs::write(&path, serialized).map_err(|source| SettingsError::WriteConfig {
        path: path.clone(),
        source,
    })?;
    tracing::info!(%theme, ?mode, path = %path.display(), "saved theme preference");
    Ok(())
}

fn read_settings_file(path: &Path) -> SettingsResult<Option<ThemeSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let serialized = fs::read_to_string(path).map_err(|source| SettingsError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(serde_json::from_str(&serialized)?))
}

fn settings_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// `$XDG_CONFIG_HOME/ouds/theme.json`, else `$HOME/.config/ouds/theme.json`.
/// An empty `XDG_CONFIG_HOME` counts as unset.
fn theme_settings_path_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SettingsResult<PathBuf> {
    let root = match xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home
            .ok_or(SettingsError::MissingHomeDirectory)?
            .join(".config"),
    };
    Ok(root.join(APP_DIR).join(THEME_SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderStyle;
    use crate::raw::palette;
    use crate::theme::ThemeResolver;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("ouds-settings-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn write_settings(root: &Path, json: &str) {
        let path = theme_settings_path_with(Some(root), None).unwrap();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, json).unwrap();
    }

    #[test]
    fn settings_default_to_orange_system_when_missing() {
        with_temp_root(|root| {
            let settings = load_theme_settings_with(Some(root), None).unwrap();
            assert_eq!(settings.theme, ThemeId::Orange);
            assert_eq!(settings.mode, ThemeMode::System);
            assert!(!settings.high_contrast);
            assert!(settings.overrides.is_none());
        });
    }

    #[test]
    fn settings_path_requires_a_home() {
        let err = load_theme_settings_with(None, None).unwrap_err();
        assert!(matches!(err, SettingsError::MissingHomeDirectory));
    }

    #[test]
    fn save_and_load_round_trip() {
        with_temp_root(|root| {
            save_theme_preference_with(ThemeId::Sosh, ThemeMode::Light, Some(root), None).unwrap();
            let settings = load_theme_settings_with(Some(root), None).unwrap();
            assert_eq!(settings.theme, ThemeId::Sosh);
            assert_eq!(settings.mode, ThemeMode::Light);

            save_theme_preference_with(ThemeId::Wireframe, ThemeMode::Dark, Some(root), None)
                .unwrap();
            let settings = load_theme_settings_with(Some(root), None).unwrap();
            assert_eq!(settings.theme, ThemeId::Wireframe);
            assert_eq!(settings.mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn save_keeps_high_contrast_and_overrides() {
        with_temp_root(|root| {
            write_settings(
                root,
                r#"{
                    "theme": "orange",
                    "mode": "dark",
                    "high_contrast": true,
                    "overrides": {
                        "components": { "button": { "corner_radius": "border_radius_pill" } }
                    }
                }"#,
            );

            save_theme_preference_with(ThemeId::OrangeCountry, ThemeMode::Light, Some(root), None)
                .unwrap();
            let settings = load_theme_settings_with(Some(root), None).unwrap();
            assert_eq!(settings.theme, ThemeId::OrangeCountry);
            assert_eq!(settings.mode, ThemeMode::Light);
            assert!(settings.high_contrast);
            let overrides = settings.overrides.expect("expected overrides");
            assert!(overrides.components.button.corner_radius.is_some());
        });
    }

    #[test]
    fn save_leaves_unparseable_file_untouched() {
        with_temp_root(|root| {
            let stored = r#"{
                "theme": "sosh",
                "high_contrast": true,
                "overrides": { "components": { "button": { "corner_radius": 6, "min_heigth": 40 } } }
            }"#;
            write_settings(root, stored);

            let err = save_theme_preference_with(ThemeId::Sosh, ThemeMode::Dark, Some(root), None)
                .unwrap_err();
            assert!(matches!(err, SettingsError::ParseConfig(_)));

            let path = theme_settings_path_with(Some(root), None).unwrap();
            assert_eq!(fs::read_to_string(path).unwrap(), stored);
        });
    }

    #[test]
    fn save_leaves_malformed_json_untouched() {
        with_temp_root(|root| {
            write_settings(root, "{ invalid ");
            let err =
                save_theme_preference_with(ThemeId::WhiteLabel, ThemeMode::System, Some(root), None)
                    .unwrap_err();
            assert!(matches!(err, SettingsError::ParseConfig(_)));
            assert!(load_theme_settings_with(Some(root), None).is_err());
        });
    }

    #[test]
    fn save_creates_missing_config_directory() {
        with_temp_root(|root| {
            let nested = root.join("fresh");
            save_theme_preference_with(ThemeId::Orange, ThemeMode::Dark, Some(&nested), None)
                .unwrap();
            let settings = load_theme_settings_with(Some(&nested), None).unwrap();
            assert_eq!(settings.mode, ThemeMode::Dark);
            assert!(!settings.high_contrast);
        });
    }

    #[test]
    fn settings_path_prefers_xdg_config_home() {
        let path = theme_settings_path_with(
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config-root/ouds/theme.json"));
    }

    #[test]
    fn settings_path_ignores_empty_xdg_config_home() {
        let path =
            theme_settings_path_with(Some(Path::new("")), Some(Path::new("/tmp/home"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/home/.config/ouds/theme.json"));
    }

    #[test]
    fn settings_reject_invalid_payload() {
        with_temp_root(|root| {
            write_settings(root, "{ invalid ");
            let err = load_theme_settings_with(Some(root), None).unwrap_err();
            assert!(matches!(err, SettingsError::ParseConfig(_)));
        });
    }

    #[test]
    fn settings_reject_unknown_override_keys() {
        with_temp_root(|root| {
            write_settings(
                root,
                r#"{ "theme": "sosh", "overrides": { "components": { "slider": {} } } }"#,
            );
            assert!(load_theme_settings_with(Some(root), None).is_err());
        });
    }

    #[test]
    fn settings_reject_unknown_theme() {
        with_temp_root(|root| {
            write_settings(root, r#"{ "theme": "tangerine" }"#);
            assert!(load_theme_settings_with(Some(root), None).is_err());
        });
    }

    #[test]
    fn user_overrides_apply_on_top_of_selected_brand() {
        with_temp_root(|root| {
            write_settings(
                root,
                r##"{
                    "theme": "orange-country",
                    "mode": "light",
                    "overrides": {
                        "semantic": {
                            "color": { "content_on_brand_primary": { "light": "#FFFFFF", "dark": "#FFFFFF" } },
                            "border": { "style_default": "dotted" }
                        }
                    }
                }"##,
            );

            let settings = load_theme_settings_with(Some(root), None).unwrap();
            let theme = settings.theme();
            assert_eq!(theme.name, "Orange Country");
            assert_eq!(theme.semantic.border.style_default, BorderStyle::Dotted);

            let mode = settings.mode_context(true);
            assert!(!mode.dark_mode);
            let button = ThemeResolver::new(&theme, mode).button();
            assert_eq!(button.content_color, palette::WHITE);
            assert_eq!(button.container_color, palette::COUNTRY_ORANGE_500);
        });
    }

    #[test]
    fn mode_context_follows_system_when_requested() {
        let settings = ThemeSettings {
            high_contrast: true,
            ..ThemeSettings::default()
        };
        assert_eq!(settings.mode_context(true), ModeContext::new(true, true));
        assert_eq!(settings.mode_context(false), ModeContext::new(false, true));
    }
}
