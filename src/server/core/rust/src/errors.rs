/* src/server/core/rust/src/errors.rs */

use std::path::PathBuf;

use gallery_theme_engine::UnknownFunction;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
  /// A template invoked a hook outside the supported surface.
  #[error("UNKNOWN_THEME_FUNCTION: {0}")]
  UnknownThemeFunction(String),
  #[error("failed to read {}: {source}", .path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("invalid theme config {}: {message}", .path.display())]
  Config { path: PathBuf, message: String },
}

impl ThemeError {
  pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
    Self::Config { path: path.into(), message: message.into() }
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::UnknownThemeFunction(_) => "UNKNOWN_THEME_FUNCTION",
      Self::Io { .. } | Self::Config { .. } => "CONFIG_ERROR",
    }
  }

  /// Every theme error surfaces as an internal error page.
  pub fn status(&self) -> u16 {
    match self {
      Self::UnknownThemeFunction(_) | Self::Io { .. } | Self::Config { .. } => 500,
    }
  }
}

impl From<UnknownFunction> for ThemeError {
  fn from(err: UnknownFunction) -> Self {
    Self::UnknownThemeFunction(err.0)
  }
}
