/* src/server/core/rust/src/registry.rs */

use std::collections::HashMap;
use std::sync::Arc;

use gallery_theme_engine::ThemeFunction;

use crate::menu::{MenuFn, MenuKind, MenuTree};
use crate::view::ThemeView;

/// Uniform provider signature: the view first, then the template's arguments.
pub type ThemeFn = Arc<dyn Fn(&ThemeView<'_>, &[serde_json::Value]) -> String + Send + Sync>;

/// Module that owns the core hooks. It is consulted through the theme slot,
/// never a second time as an ordinary module.
pub const CORE_MODULE: &str = "gallery";

/// Hooks and menu contributions one module (or the theme) registers at load time.
pub struct Provider {
  name: String,
  functions: HashMap<ThemeFunction, ThemeFn>,
  menus: HashMap<MenuKind, MenuFn>,
}

impl Provider {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), functions: HashMap::new(), menus: HashMap::new() }
  }

  pub fn function<F>(mut self, function: ThemeFunction, handler: F) -> Self
  where
    F: Fn(&ThemeView<'_>, &[serde_json::Value]) -> String + Send + Sync + 'static,
  {
    self.functions.insert(function, Arc::new(handler));
    self
  }

  pub fn menu<F>(mut self, kind: MenuKind, handler: F) -> Self
  where
    F: Fn(&mut dyn MenuTree, &ThemeView<'_>) + Send + Sync + 'static,
  {
    self.menus.insert(kind, Arc::new(handler));
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn implements(&self, function: ThemeFunction) -> bool {
    self.functions.contains_key(&function)
  }
}

/// One provider selected for a hook.
pub struct ResolvedProvider<'r> {
  pub module: &'r str,
  handler: &'r ThemeFn,
}

impl ResolvedProvider<'_> {
  pub fn call(&self, view: &ThemeView<'_>, args: &[serde_json::Value]) -> String {
    (self.handler)(view, args)
  }
}

/// Theme provider plus active modules in activation order.
pub struct ThemeRegistry {
  theme: Provider,
  modules: Vec<Provider>,
}

impl ThemeRegistry {
  pub fn new(theme: Provider) -> Self {
    Self { theme, modules: Vec::new() }
  }

  /// Append an active module. Call in activation order.
  pub fn module(mut self, provider: Provider) -> Self {
    self.modules.push(provider);
    self
  }

  pub fn theme(&self) -> &Provider {
    &self.theme
  }

  /// Active module names in activation order, core module included.
  pub fn module_names(&self) -> impl Iterator<Item = &str> {
    self.modules.iter().map(Provider::name)
  }

  fn contributing_modules(&self) -> impl Iterator<Item = &Provider> {
    self.modules.iter().filter(|m| m.name != CORE_MODULE)
  }

  /// Providers for `function`: the theme first, then modules in activation order.
  pub fn resolve(&self, function: ThemeFunction) -> Vec<ResolvedProvider<'_>> {
    std::iter::once(&self.theme)
      .chain(self.contributing_modules())
      .filter_map(|p| {
        p.functions.get(&function).map(|handler| ResolvedProvider { module: &p.name, handler })
      })
      .collect()
  }

  /// Menu contributors for `kind`, same order as `resolve`.
  pub fn resolve_menu(&self, kind: MenuKind) -> Vec<&MenuFn> {
    std::iter::once(&self.theme)
      .chain(self.contributing_modules())
      .filter_map(|p| p.menus.get(&kind))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn noop(_: &ThemeView<'_>, _: &[serde_json::Value]) -> String {
    String::new()
  }

  fn registry() -> ThemeRegistry {
    ThemeRegistry::new(
      Provider::new(CORE_MODULE)
        .function(ThemeFunction::Head, noop)
        .function(ThemeFunction::Footer, noop),
    )
    .module(Provider::new(CORE_MODULE).function(ThemeFunction::Head, noop))
    .module(Provider::new("comment").function(ThemeFunction::PhotoBottom, noop))
    .module(Provider::new("slideshow").function(ThemeFunction::Head, noop))
    .module(
      Provider::new("tag")
        .function(ThemeFunction::Head, noop)
        .function(ThemeFunction::PhotoBottom, noop),
    )
  }

  fn modules(resolved: &[ResolvedProvider<'_>]) -> Vec<String> {
    resolved.iter().map(|p| p.module.to_string()).collect()
  }

  #[test]
  fn theme_first_then_activation_order() {
    let reg = registry();
    assert_eq!(modules(&reg.resolve(ThemeFunction::Head)), vec!["gallery", "slideshow", "tag"]);
  }

  #[test]
  fn core_module_not_counted_twice() {
    let reg = registry();
    let resolved = reg.resolve(ThemeFunction::Head);
    assert_eq!(resolved.iter().filter(|p| p.module == CORE_MODULE).count(), 1);
  }

  #[test]
  fn module_sharing_theme_name_still_contributes() {
    let reg = ThemeRegistry::new(Provider::new("tag").function(ThemeFunction::Head, noop))
      .module(Provider::new("tag").function(ThemeFunction::Footer, noop));
    assert_eq!(modules(&reg.resolve(ThemeFunction::Footer)), vec!["tag"]);
    assert_eq!(reg.resolve(ThemeFunction::Head).len(), 1);
  }

  #[test]
  fn modules_only_when_theme_lacks_hook() {
    let reg = registry();
    assert_eq!(modules(&reg.resolve(ThemeFunction::PhotoBottom)), vec!["comment", "tag"]);
  }

  #[test]
  fn unimplemented_hook_resolves_empty() {
    let reg = registry();
    assert!(reg.resolve(ThemeFunction::ThumbInfo).is_empty());
  }

  #[test]
  fn module_names_include_core() {
    let reg = registry();
    let names: Vec<_> = reg.module_names().collect();
    assert_eq!(names, vec!["gallery", "comment", "slideshow", "tag"]);
  }

  #[test]
  fn implements_reports_registration() {
    let reg = registry();
    assert!(reg.theme().implements(ThemeFunction::Footer));
    assert!(!reg.theme().implements(ThemeFunction::Credits));
  }

  #[test]
  fn menus_resolve_in_same_order() {
    let reg = ThemeRegistry::new(Provider::new(CORE_MODULE).menu(MenuKind::Site, |_, _| {}))
      .module(Provider::new("organize").menu(MenuKind::Album, |_, _| {}))
      .module(Provider::new("server_add").menu(MenuKind::Site, |_, _| {}));
    assert_eq!(reg.resolve_menu(MenuKind::Site).len(), 2);
    assert_eq!(reg.resolve_menu(MenuKind::Album).len(), 1);
    assert!(reg.resolve_menu(MenuKind::Tag).is_empty());
  }
}
