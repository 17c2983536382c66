/* src/server/core/rust/src/lib.rs */

pub mod asset;
pub mod config;
pub mod context;
pub mod env;
pub mod errors;
pub mod menu;
pub mod pager;
pub mod registry;
pub mod resolve;
pub mod session;
pub mod view;

// Re-exports for ergonomic use
pub use asset::{AssetCache, CombinedScript, ScriptSet};
pub use config::{AssetsSection, GallerySection, ThemeConfig, ThemeSection, load_theme_config};
pub use context::{PageType, ThemeContext};
pub use env::ThemeEnv;
pub use errors::ThemeError;
pub use gallery_theme_engine::ThemeFunction;
pub use menu::{MenuEntry, MenuFactory, MenuFn, MenuKind, MenuTree};
pub use pager::{PagerOptions, Paginator};
pub use registry::{CORE_MODULE, Provider, ResolvedProvider, ThemeFn, ThemeRegistry};
pub use resolve::{ThemeResolution, request_theme, resolve_site_theme};
pub use session::Session;
pub use view::{MAINTENANCE_NOTICE, ThemeView, UrlMode};
