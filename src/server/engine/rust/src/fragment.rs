/* src/server/engine/rust/src/fragment.rs */

use crate::function::ThemeFunction;

pub const ANNOTATION_CLOSE: &str = "</div>";

/// Opening markup of the debug container labelling which hook produced a block.
pub fn annotation_open(function: ThemeFunction) -> String {
  let name = function.as_str();
  format!(
    "<div class=\"gAnnotatedThemeBlock gAnnotatedThemeBlock_{name} gClearFix\">\
     <div class=\"title\">{name}</div>"
  )
}

/// Join provider fragments into the rendered hook output.
///
/// With `debug` set, every hook except `head` is wrapped in an annotation container,
/// even when no provider contributed anything.
pub fn assemble(function: ThemeFunction, mut fragments: Vec<String>, debug: bool) -> String {
  if debug && !function.is_head() {
    fragments.insert(0, annotation_open(function));
    fragments.push(ANNOTATION_CLOSE.to_string());
  }
  fragments.join("\n")
}
