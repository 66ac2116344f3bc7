#[macro_use]
mod macros;

pub mod border;
pub mod color;
pub mod component;
pub mod error;
pub mod graphics;
pub mod logging;
pub mod mode;
pub mod raw;
pub mod semantic;
pub mod theme;

pub use border::BorderStyle;
pub use color::Color;
pub use error::{OudsError, OudsResult};
pub use mode::{ModeContext, ThemeMode};
pub use theme::{build_theme, Theme, ThemeId, ThemeOverrides, ThemeResolver};

/// Loads the persisted theme selection and resolves it for the host's current
/// appearance.
pub fn active_theme(system_dark: bool) -> OudsResult<(Theme, ModeContext)> {
    let settings = theme::settings::load_theme_settings()?;
    let theme = settings.theme();
    let mode = settings.mode_context(system_dark);
    tracing::info!(theme = %theme.name, ?mode, "activated theme");
    Ok((theme, mode))
}
