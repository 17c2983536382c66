/* src/server/core/rust/src/context.rs */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
  Album,
  Photo,
  Movie,
  Tag,
  Search,
  Login,
  Other,
}

/// Per-request view state read by every provider. Built once per request, never shared.
#[derive(Debug, Clone)]
pub struct ThemeContext {
  /// Theme rendering this request (after fallback and admin override).
  pub theme: String,
  pub page_type: PageType,
  pub page_title: Option<String>,
  /// Item being displayed, as handed over by the controller.
  pub item: Option<serde_json::Value>,
  pub tag: Option<serde_json::Value>,
  pub children_count: usize,
  pub page_size: usize,
  /// Only published on album pages.
  pub thumb_proportion: Option<f64>,
  pub debug: bool,
}

impl ThemeContext {
  pub fn new(theme: impl Into<String>, page_type: PageType) -> Self {
    Self {
      theme: theme.into(),
      page_type,
      page_title: None,
      item: None,
      tag: None,
      children_count: 0,
      page_size: 0,
      thumb_proportion: None,
      debug: false,
    }
  }
}
