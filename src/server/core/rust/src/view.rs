/* src/server/core/rust/src/view.rs */

use std::cell::RefCell;

use gallery_theme_engine::{ThemeFunction, assemble, join_url};

use crate::asset::{CombinedScript, ScriptSet};
use crate::context::{PageType, ThemeContext};
use crate::env::ThemeEnv;
use crate::errors::ThemeError;
use crate::menu::{MenuKind, MenuTree};
use crate::pager::PagerOptions;
use crate::resolve::request_theme;
use crate::session::Session;

pub const MAINTENANCE_NOTICE: &str = "This site is currently in maintenance mode";

/// How `ThemeView::url` anchors theme asset paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
  /// Prefixed with the site url.
  Root,
  /// Prefixed with the absolute site url.
  Absolute,
  /// `themes/<theme>/<path>` only.
  Relative,
}

/// The object templates render against for one request.
///
/// Content hooks are dispatched by name through `invoke`; providers receive the view
/// itself and may call back into it (e.g. `script` to add to the head bundle).
pub struct ThemeView<'r> {
  env: &'r ThemeEnv,
  session: &'r dyn Session,
  context: ThemeContext,
  scripts: RefCell<ScriptSet>,
}

impl<'r> ThemeView<'r> {
  pub fn new(env: &'r ThemeEnv, session: &'r dyn Session, page_type: PageType) -> Self {
    let mut context = ThemeContext::new(request_theme(&env.site_theme.name, session), page_type);
    context.debug = session.debug();
    context.page_size = env.config.gallery.page_size;
    if page_type == PageType::Album {
      context.thumb_proportion = Some(env.config.gallery.thumb_proportion());
    }
    if env.config.gallery.maintenance_mode {
      session.warn(MAINTENANCE_NOTICE);
    }
    Self { env, session, context, scripts: RefCell::new(ScriptSet::default()) }
  }

  pub fn item(mut self, item: serde_json::Value) -> Self {
    self.context.item = Some(item);
    self
  }

  pub fn tag(mut self, tag: serde_json::Value) -> Self {
    self.context.tag = Some(tag);
    self
  }

  pub fn page_title(mut self, title: impl Into<String>) -> Self {
    self.context.page_title = Some(title.into());
    self
  }

  pub fn children_count(mut self, count: usize) -> Self {
    self.context.children_count = count;
    self
  }

  pub fn context(&self) -> &ThemeContext {
    &self.context
  }

  pub fn theme_name(&self) -> &str {
    &self.context.theme
  }

  pub fn page_type(&self) -> PageType {
    self.context.page_type
  }

  pub fn current_item(&self) -> Option<&serde_json::Value> {
    self.context.item.as_ref()
  }

  pub fn current_tag(&self) -> Option<&serde_json::Value> {
    self.context.tag.as_ref()
  }

  /// Path of a file inside the active theme.
  pub fn url(&self, path: &str, mode: UrlMode) -> String {
    let arg = format!("themes/{}/{}", self.context.theme, path.trim_start_matches('/'));
    let assets = &self.env.config.assets;
    match mode {
      UrlMode::Root => join_url(&assets.site_url, &arg),
      UrlMode::Absolute => join_url(&assets.abs_site_url, &arg),
      UrlMode::Relative => arg,
    }
  }

  /// Add a script to the head bundle. Repeated registrations are ignored.
  pub fn script(&self, file: impl Into<String>) {
    self.scripts.borrow_mut().insert(file);
  }

  pub fn scripts(&self) -> Vec<String> {
    self.scripts.borrow().as_slice().to_vec()
  }

  /// Render the content hook `name`. Fails only for names outside the allow-list.
  pub fn invoke(&self, name: &str, args: &[serde_json::Value]) -> Result<String, ThemeError> {
    let function: ThemeFunction = name.parse()?;
    Ok(self.call(function, args))
  }

  /// Render a content hook: theme output first, then modules in activation order.
  pub fn call(&self, function: ThemeFunction, args: &[serde_json::Value]) -> String {
    let providers = self.env.registry.resolve(function);
    tracing::trace!(function = function.as_str(), providers = providers.len(), "theme dispatch");
    let mut fragments: Vec<String> = providers.iter().map(|p| p.call(self, args)).collect();

    // After the providers ran, so scripts they registered make it into the bundle
    if function.is_head() {
      fragments.insert(0, self.combine_scripts().tag);
    }

    assemble(function, fragments, self.context.debug)
  }

  fn combine_scripts(&self) -> CombinedScript {
    let scripts = self.scripts.borrow();
    self.env.assets.combine(scripts.as_slice())
  }

  pub fn site_menu(&self) -> String {
    let Some(mut menu) = self.root_menu() else {
      return String::new();
    };
    if self.context.page_type != PageType::Login {
      self.fill_menu(MenuKind::Site, menu.as_mut());
    }
    menu.compact();
    menu.render()
  }

  pub fn album_menu(&self) -> String {
    self.menu(MenuKind::Album)
  }

  pub fn photo_menu(&self) -> String {
    self.menu(MenuKind::Photo)
  }

  pub fn tag_menu(&self) -> String {
    self.menu(MenuKind::Tag)
  }

  fn menu(&self, kind: MenuKind) -> String {
    let Some(mut menu) = self.root_menu() else {
      return String::new();
    };
    self.fill_menu(kind, menu.as_mut());
    menu.render()
  }

  fn root_menu(&self) -> Option<Box<dyn MenuTree>> {
    match &self.env.menu_factory {
      Some(factory) => Some(factory("root")),
      None => {
        tracing::debug!("no menu factory configured, rendering empty menu");
        None
      }
    }
  }

  fn fill_menu(&self, kind: MenuKind, menu: &mut dyn MenuTree) {
    for contribute in self.env.registry.resolve_menu(kind) {
      contribute(&mut *menu, self);
    }
  }

  /// Pagination for the current album, empty when it has no children.
  pub fn pager(&self) -> String {
    if self.context.children_count == 0 {
      return String::new();
    }
    let Some(paginator) = &self.env.paginator else {
      return String::new();
    };
    paginator.render(&PagerOptions::classic(self.context.children_count, self.context.page_size))
  }

  pub fn site_status(&self) -> String {
    self.session.site_status()
  }

  pub fn messages(&self) -> String {
    self.session.messages()
  }
}
