use crate::color::ColorParseError;
use crate::raw::RawTokenError;
use crate::theme::settings::SettingsError;
use crate::theme::ThemeError;
use thiserror::Error;

pub type OudsResult<T> = std::result::Result<T, OudsError>;

#[derive(Debug, Error)]
pub enum OudsError {
    #[error(transparent)]
    RawToken(#[from] RawTokenError),
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
