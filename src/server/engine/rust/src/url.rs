/* src/server/engine/rust/src/url.rs */

/// Logical route under which combined bundles are served.
pub const COMBINED_SCRIPT_ROUTE: &str = "javascript/combined";

/// Join a base url and a relative path with exactly one `/` between them.
/// An empty base yields the path unchanged.
pub fn join_url(base: &str, path: &str) -> String {
  if base.is_empty() {
    return path.to_string();
  }
  format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn combined_script_url(site_url: &str, key: &str) -> String {
  join_url(site_url, &format!("{COMBINED_SCRIPT_ROUTE}/{key}"))
}

/// Ready-to-embed tag for the bundle stored under `key`.
pub fn combined_script_tag(site_url: &str, key: &str) -> String {
  format!(
    "<script type=\"text/javascript\" src=\"{}\"></script>",
    combined_script_url(site_url, key)
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_single_slash() {
    assert_eq!(join_url("/", "themes/wind/a.css"), "/themes/wind/a.css");
    assert_eq!(join_url("/gallery/", "/x"), "/gallery/x");
    assert_eq!(join_url("http://example.com", "x"), "http://example.com/x");
  }

  #[test]
  fn join_empty_base() {
    assert_eq!(join_url("", "themes/wind"), "themes/wind");
  }

  #[test]
  fn script_tag_points_at_logical_route() {
    assert_eq!(
      combined_script_tag("/", "abc123"),
      "<script type=\"text/javascript\" src=\"/javascript/combined/abc123\"></script>"
    );
  }

  #[test]
  fn script_url_under_subdirectory() {
    assert_eq!(combined_script_url("/gallery3/", "k"), "/gallery3/javascript/combined/k");
  }
}
