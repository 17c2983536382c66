/* src/server/core/rust/src/config.rs */

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ThemeError;

/// Thumb size the stock themes are laid out for.
const BASE_THUMB_SIZE: u32 = 200;

/// Site-wide theme settings, sourced once at bootstrap and handed to every view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
  #[serde(default)]
  pub theme: ThemeSection,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub gallery: GallerySection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSection {
  /// Active site theme.
  #[serde(default = "default_theme_name")]
  pub active: String,
  /// Fallback when the active theme directory is missing.
  #[serde(default = "default_theme_name")]
  pub default: String,
  #[serde(default = "default_themes_dir")]
  pub themes_dir: PathBuf,
}

impl Default for ThemeSection {
  fn default() -> Self {
    Self {
      active: default_theme_name(),
      default: default_theme_name(),
      themes_dir: default_themes_dir(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsSection {
  /// Registered script paths are resolved against this directory.
  #[serde(default = "default_doc_root")]
  pub doc_root: PathBuf,
  /// Combined bundles are stored under `<var_dir>/tmp`.
  #[serde(default = "default_var_dir")]
  pub var_dir: PathBuf,
  #[serde(default = "default_site_url")]
  pub site_url: String,
  #[serde(default)]
  pub abs_site_url: String,
  #[serde(default = "default_true")]
  pub compress: bool,
}

impl Default for AssetsSection {
  fn default() -> Self {
    Self {
      doc_root: default_doc_root(),
      var_dir: default_var_dir(),
      site_url: default_site_url(),
      abs_site_url: String::new(),
      compress: true,
    }
  }
}

impl AssetsSection {
  pub fn store_dir(&self) -> PathBuf {
    self.var_dir.join("tmp")
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GallerySection {
  #[serde(default = "default_thumb_size")]
  pub thumb_size: u32,
  #[serde(default = "default_page_size")]
  pub page_size: usize,
  #[serde(default)]
  pub maintenance_mode: bool,
}

impl Default for GallerySection {
  fn default() -> Self {
    Self { thumb_size: default_thumb_size(), page_size: default_page_size(), maintenance_mode: false }
  }
}

impl GallerySection {
  /// Ratio of the configured thumb size to the size themes are designed for.
  pub fn thumb_proportion(&self) -> f64 {
    f64::from(self.thumb_size) / f64::from(BASE_THUMB_SIZE)
  }
}

fn default_theme_name() -> String {
  "default".to_string()
}

fn default_themes_dir() -> PathBuf {
  PathBuf::from("themes")
}

fn default_doc_root() -> PathBuf {
  PathBuf::from(".")
}

fn default_var_dir() -> PathBuf {
  PathBuf::from("var")
}

fn default_site_url() -> String {
  "/".to_string()
}

fn default_true() -> bool {
  true
}

fn default_thumb_size() -> u32 {
  BASE_THUMB_SIZE
}

fn default_page_size() -> usize {
  9
}

impl ThemeConfig {
  /// Parse and validate TOML text. `origin` only labels errors.
  pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ThemeError> {
    let config: ThemeConfig =
      toml::from_str(content).map_err(|e| ThemeError::config(origin, e.to_string()))?;
    config.validate().map_err(|message| ThemeError::config(origin, message))?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), String> {
    if self.theme.active.trim().is_empty() {
      return Err("theme.active must not be empty".to_string());
    }
    if self.theme.default.trim().is_empty() {
      return Err("theme.default must not be empty".to_string());
    }
    if self.gallery.thumb_size == 0 {
      return Err("gallery.thumb_size must be positive".to_string());
    }
    if self.gallery.page_size == 0 {
      return Err("gallery.page_size must be positive".to_string());
    }
    Ok(())
  }
}

pub fn load_theme_config(path: &Path) -> Result<ThemeConfig, ThemeError> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| ThemeError::Io { path: path.to_path_buf(), source })?;
  ThemeConfig::from_toml(&content, path)
}
