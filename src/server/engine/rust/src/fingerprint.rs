/* src/server/engine/rust/src/fingerprint.rs */

//! Content keys for combined script bundles.
//! Keys are derived from file identity and stat metadata, never from file contents,
//! so a bundle can be looked up without reading the sources.

use std::collections::HashSet;
use std::fmt::Write;

use md5::{Digest, Md5};

const ARTIFACT_PREFIX: &str = "CombinedJavascript_";
const COMPRESSED_SUFFIX: &str = "_gzip";

/// Identity and stat data of one script that made it into a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
  /// Path as registered by the template, relative to the document root.
  pub path: String,
  pub size: u64,
  /// Last modification, unix seconds.
  pub mtime: u64,
}

impl FileStamp {
  pub fn new(path: impl Into<String>, size: u64, mtime: u64) -> Self {
    Self { path: path.into(), size, mtime }
  }
}

/// Drop repeated registrations, keeping the position of the first one.
pub fn dedup_paths<S: AsRef<str>>(paths: &[S]) -> Vec<&str> {
  let mut seen = HashSet::new();
  paths.iter().map(AsRef::<str>::as_ref).filter(|p| seen.insert(*p)).collect()
}

/// `"<path> <size> <mtime>,"` for every stamp, in order.
pub fn fingerprint_input(stamps: &[FileStamp]) -> String {
  let mut out = String::new();
  for stamp in stamps {
    // Writing to a String cannot fail
    let _ = write!(out, "{} {} {},", stamp.path, stamp.size, stamp.mtime);
  }
  out
}

/// Lowercase hex MD5 of the fingerprint input.
pub fn fingerprint(stamps: &[FileStamp]) -> String {
  hex::encode(Md5::digest(fingerprint_input(stamps).as_bytes()))
}

/// File name of the raw bundle for `key`.
pub fn artifact_name(key: &str) -> String {
  format!("{ARTIFACT_PREFIX}{key}")
}

/// File name of the gzip sibling for `key`.
pub fn compressed_artifact_name(key: &str) -> String {
  format!("{ARTIFACT_PREFIX}{key}{COMPRESSED_SUFFIX}")
}
