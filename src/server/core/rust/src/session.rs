/* src/server/core/rust/src/session.rs */

/// Session and user state the view consults. Implemented by the host application.
///
/// Everything except `debug` has a neutral default so simple hosts only answer
/// the debug question.
pub trait Session {
  /// Annotate theme blocks with the hook that produced them.
  fn debug(&self) -> bool;

  fn is_admin(&self) -> bool {
    false
  }

  /// Theme requested for this request only (the `theme` query parameter).
  /// Honored for admins.
  fn theme_override(&self) -> Option<String> {
    None
  }

  /// Queue a warning for the user.
  fn warn(&self, _message: &str) {}

  /// Rendered messages waiting for this user.
  fn messages(&self) -> String {
    String::new()
  }

  /// Rendered site-wide status notices.
  fn site_status(&self) -> String {
    String::new()
  }
}
