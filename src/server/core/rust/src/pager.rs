/* src/server/core/rust/src/pager.rs */

/// Settings the view hands to the pagination widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerOptions {
  pub query_string: &'static str,
  pub total_items: usize,
  pub items_per_page: usize,
  pub style: &'static str,
}

impl PagerOptions {
  pub fn classic(total_items: usize, items_per_page: usize) -> Self {
    Self { query_string: "page", total_items, items_per_page, style: "classic" }
  }
}

/// Pagination widget implemented by the host application.
pub trait Paginator: Send + Sync {
  fn render(&self, options: &PagerOptions) -> String;
}
