/* src/server/core/rust/src/env.rs */

use std::sync::Arc;

use crate::asset::AssetCache;
use crate::config::ThemeConfig;
use crate::context::PageType;
use crate::menu::{MenuFactory, MenuTree};
use crate::pager::Paginator;
use crate::registry::ThemeRegistry;
use crate::resolve::{ThemeResolution, resolve_site_theme};
use crate::session::Session;
use crate::view::ThemeView;

/// Process-wide theme state, built once at bootstrap and shared read-only by requests.
pub struct ThemeEnv {
  pub(crate) config: ThemeConfig,
  pub(crate) registry: ThemeRegistry,
  pub(crate) assets: AssetCache,
  pub(crate) site_theme: ThemeResolution,
  pub(crate) menu_factory: Option<MenuFactory>,
  pub(crate) paginator: Option<Arc<dyn Paginator>>,
}

impl ThemeEnv {
  /// Resolves the site theme (falling back to the default when its directory is missing)
  /// and sets up the bundle store from `config.assets`.
  pub fn new(config: ThemeConfig, registry: ThemeRegistry) -> Self {
    let site_theme = resolve_site_theme(&config.theme);
    let assets = AssetCache::from_config(&config.assets);
    Self { config, registry, assets, site_theme, menu_factory: None, paginator: None }
  }

  pub fn menu_factory<F>(mut self, factory: F) -> Self
  where
    F: Fn(&str) -> Box<dyn MenuTree> + Send + Sync + 'static,
  {
    self.menu_factory = Some(Arc::new(factory));
    self
  }

  pub fn paginator(mut self, paginator: Arc<dyn Paginator>) -> Self {
    self.paginator = Some(paginator);
    self
  }

  pub fn config(&self) -> &ThemeConfig {
    &self.config
  }

  pub fn registry(&self) -> &ThemeRegistry {
    &self.registry
  }

  pub fn assets(&self) -> &AssetCache {
    &self.assets
  }

  pub fn site_theme(&self) -> &ThemeResolution {
    &self.site_theme
  }

  /// Start rendering one request.
  pub fn view<'r>(&'r self, session: &'r dyn Session, page_type: PageType) -> ThemeView<'r> {
    ThemeView::new(self, session, page_type)
  }
}
