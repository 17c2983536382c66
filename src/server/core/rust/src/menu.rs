/* src/server/core/rust/src/menu.rs */

use std::sync::Arc;

use crate::view::ThemeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
  Site,
  Album,
  Photo,
  Tag,
}

/// Entry appended by a contributor. Nesting is up to the tree implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
  pub id: String,
  pub label: String,
  pub url: String,
  /// Parent entry id; `None` appends to the root.
  pub parent: Option<String>,
}

impl MenuEntry {
  pub fn link(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
    Self { id: id.into(), label: label.into(), url: url.into(), parent: None }
  }

  pub fn under(mut self, parent: impl Into<String>) -> Self {
    self.parent = Some(parent.into());
    self
  }
}

/// Menu tree owned by the host application. The view only fills and renders it.
pub trait MenuTree {
  fn append(&mut self, entry: MenuEntry);
  /// Drop empty submenus before rendering.
  fn compact(&mut self);
  fn render(&self) -> String;
}

/// Creates an empty root menu for each menu call.
pub type MenuFactory = Arc<dyn Fn(&str) -> Box<dyn MenuTree> + Send + Sync>;

/// A provider's contribution to one kind of menu.
pub type MenuFn = Arc<dyn Fn(&mut dyn MenuTree, &ThemeView<'_>) + Send + Sync>;
