/* src/server/engine/rust/src/function.rs */

use std::fmt;
use std::str::FromStr;

/// Returned when a template asks for a theme function outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme function: {0}")]
pub struct UnknownFunction(pub String);

macro_rules! theme_functions {
  ($($variant:ident => $name:literal,)+) => {
    /// Closed set of content hooks a theme template may invoke.
    /// Modules contribute fragments to these by name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum ThemeFunction {
      $($variant,)+
    }

    impl ThemeFunction {
      /// Every accepted function, in allow-list order.
      pub const ALL: &'static [ThemeFunction] = &[$(ThemeFunction::$variant,)+];

      pub fn as_str(self) -> &'static str {
        match self {
          $(ThemeFunction::$variant => $name,)+
        }
      }
    }

    impl FromStr for ThemeFunction {
      type Err = UnknownFunction;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($name => Ok(ThemeFunction::$variant),)+
          _ => Err(UnknownFunction(s.to_string())),
        }
      }
    }
  };
}

theme_functions! {
  AlbumBlocks => "album_blocks",
  AlbumBottom => "album_bottom",
  AlbumTop => "album_top",
  Credits => "credits",
  DynamicBottom => "dynamic_bottom",
  DynamicTop => "dynamic_top",
  Footer => "footer",
  Head => "head",
  HeaderBottom => "header_bottom",
  HeaderTop => "header_top",
  PageBottom => "page_bottom",
  PageTop => "page_top",
  PhotoBlocks => "photo_blocks",
  PhotoBottom => "photo_bottom",
  PhotoTop => "photo_top",
  ResizeBottom => "resize_bottom",
  ResizeTop => "resize_top",
  SidebarBlocks => "sidebar_blocks",
  SidebarBottom => "sidebar_bottom",
  SidebarTop => "sidebar_top",
  ThumbBottom => "thumb_bottom",
  ThumbInfo => "thumb_info",
  ThumbTop => "thumb_top",
}

impl ThemeFunction {
  /// The head hook carries the combined script bundle and is never annotated.
  pub fn is_head(self) -> bool {
    matches!(self, ThemeFunction::Head)
  }
}

impl fmt::Display for ThemeFunction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
