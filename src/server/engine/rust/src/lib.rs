/* src/server/engine/rust/src/lib.rs */

pub mod fingerprint;
pub mod fragment;
pub mod function;
pub mod url;

// Public API re-exports
pub use fingerprint::{
  FileStamp, artifact_name, compressed_artifact_name, dedup_paths, fingerprint, fingerprint_input,
};
pub use fragment::{ANNOTATION_CLOSE, annotation_open, assemble};
pub use function::{ThemeFunction, UnknownFunction};
pub use url::{COMBINED_SCRIPT_ROUTE, combined_script_tag, combined_script_url, join_url};
