/* src/server/core/rust/src/resolve.rs */

use crate::config::ThemeSection;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResolution {
  pub name: String,
  /// The configured theme was missing and `name` is the fallback.
  /// Hosts that persist settings should store `name` as the new active theme.
  pub fell_back: bool,
}

/// Pick the site theme: the configured one when its directory exists, otherwise the default.
pub fn resolve_site_theme(section: &ThemeSection) -> ThemeResolution {
  if section.themes_dir.join(&section.active).is_dir() {
    return ThemeResolution { name: section.active.clone(), fell_back: false };
  }
  tracing::error!(
    theme = %section.active,
    fallback = %section.default,
    "Unable to locate theme '{}', switching to default theme.",
    section.active
  );
  ThemeResolution { name: section.default.clone(), fell_back: true }
}

/// Theme for one request: admins may preview another theme through the session.
pub fn request_theme(site_theme: &str, session: &dyn Session) -> String {
  if session.is_admin()
    && let Some(theme) = session.theme_override()
    && !theme.is_empty()
  {
    return theme;
  }
  site_theme.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Visitor {
    admin: bool,
    theme: Option<&'static str>,
  }

  impl Session for Visitor {
    fn debug(&self) -> bool {
      false
    }

    fn is_admin(&self) -> bool {
      self.admin
    }

    fn theme_override(&self) -> Option<String> {
      self.theme.map(String::from)
    }
  }

  fn section(dir: &std::path::Path, active: &str) -> ThemeSection {
    ThemeSection {
      active: active.to_string(),
      default: "default".to_string(),
      themes_dir: dir.to_path_buf(),
    }
  }

  #[test]
  fn existing_theme_kept() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("wind")).unwrap();
    let res = resolve_site_theme(&section(dir.path(), "wind"));
    assert_eq!(res, ThemeResolution { name: "wind".into(), fell_back: false });
  }

  #[test]
  fn missing_theme_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let res = resolve_site_theme(&section(dir.path(), "vanished"));
    assert_eq!(res, ThemeResolution { name: "default".into(), fell_back: true });
  }

  #[test]
  fn plain_file_is_not_a_theme() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("wind"), "").unwrap();
    assert!(resolve_site_theme(&section(dir.path(), "wind")).fell_back);
  }

  #[test]
  fn admin_override_applies() {
    let admin = Visitor { admin: true, theme: Some("night") };
    assert_eq!(request_theme("wind", &admin), "night");
  }

  #[test]
  fn guest_override_ignored() {
    let guest = Visitor { admin: false, theme: Some("night") };
    assert_eq!(request_theme("wind", &guest), "wind");
  }

  #[test]
  fn admin_without_override() {
    let admin = Visitor { admin: true, theme: None };
    assert_eq!(request_theme("wind", &admin), "wind");
  }
}
