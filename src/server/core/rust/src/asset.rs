/* src/server/core/rust/src/asset.rs */

//! Combined script cache.
//!
//! Every script a page registers is concatenated into one bundle stored under a key
//! derived from the registered paths and their stat data. A bundle is written once;
//! later requests with the same files reuse it. Artifacts are written to a temporary
//! file in the store and renamed into place, so a reader never sees a partial bundle.
//! Concurrent writers of the same key produce identical bytes, so no locking is done.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use flate2::Compression;
use flate2::write::GzEncoder;
use gallery_theme_engine::{
  FileStamp, artifact_name, combined_script_tag, compressed_artifact_name, dedup_paths,
  fingerprint,
};

use crate::config::AssetsSection;

/// Scripts registered during one request. Set semantics, registration order kept.
#[derive(Debug, Clone, Default)]
pub struct ScriptSet {
  files: Vec<String>,
}

impl ScriptSet {
  /// Returns false when the file was already registered. A leading `/` is dropped,
  /// so `/js/a.js` and `js/a.js` name the same file.
  pub fn insert(&mut self, file: impl Into<String>) -> bool {
    let file: String = file.into();
    let file = normalize(&file).to_string();
    if self.files.contains(&file) {
      return false;
    }
    self.files.push(file);
    true
  }

  pub fn as_slice(&self) -> &[String] {
    &self.files
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }
}

/// Outcome of one `combine` call.
#[derive(Debug, Clone)]
pub struct CombinedScript {
  pub key: String,
  /// `<script>` tag pointing at the logical bundle route.
  pub tag: String,
  /// Registered files that were not found under the document root.
  pub missing: Vec<String>,
  /// Whether this call wrote the raw bundle.
  pub written: bool,
}

pub struct AssetCache {
  doc_root: PathBuf,
  store_dir: PathBuf,
  site_url: String,
  compress: bool,
}

impl AssetCache {
  pub fn new(doc_root: impl Into<PathBuf>, store_dir: impl Into<PathBuf>) -> Self {
    Self {
      doc_root: doc_root.into(),
      store_dir: store_dir.into(),
      site_url: "/".to_string(),
      compress: true,
    }
  }

  pub fn from_config(assets: &AssetsSection) -> Self {
    Self::new(&assets.doc_root, assets.store_dir())
      .site_url(assets.site_url.clone())
      .compress(assets.compress)
  }

  pub fn site_url(mut self, site_url: impl Into<String>) -> Self {
    self.site_url = site_url.into();
    self
  }

  pub fn compress(mut self, compress: bool) -> Self {
    self.compress = compress;
    self
  }

  pub fn artifact_path(&self, key: &str) -> PathBuf {
    self.store_dir.join(artifact_name(key))
  }

  pub fn compressed_artifact_path(&self, key: &str) -> PathBuf {
    self.store_dir.join(compressed_artifact_name(key))
  }

  /// Combine `files` into one bundle and return a tag referencing it.
  /// Never fails: missing sources are skipped and write errors only logged.
  pub fn combine<S: AsRef<str>>(&self, files: &[S]) -> CombinedScript {
    let mut stamps = Vec::new();
    let mut sources = Vec::new();
    let mut missing = Vec::new();

    let registered: Vec<&str> = files.iter().map(|f| normalize(f.as_ref())).collect();
    for file in dedup_paths(&registered) {
      let path = self.doc_root.join(file);
      match stamp(file, &path) {
        Some(s) => {
          stamps.push(s);
          sources.push(path);
        }
        None => {
          tracing::warn!(file, "Javascript file missing: {file}");
          missing.push(file.to_string());
        }
      }
    }

    let key = fingerprint(&stamps);
    let written = !self.artifact_path(&key).exists() && self.write_bundle(&key, &sources);

    CombinedScript { tag: combined_script_tag(&self.site_url, &key), key, missing, written }
  }

  fn write_bundle(&self, key: &str, sources: &[PathBuf]) -> bool {
    let mut contents = Vec::new();
    for source in sources {
      match std::fs::read(source) {
        Ok(bytes) => contents.extend_from_slice(&bytes),
        Err(e) => {
          // Writing a partial bundle would pin wrong content to this key
          tracing::error!(path = %source.display(), "failed to read script for bundle {key}: {e}");
          return false;
        }
      }
    }

    if let Err(e) = std::fs::create_dir_all(&self.store_dir) {
      tracing::error!(dir = %self.store_dir.display(), "failed to create bundle store: {e}");
      return false;
    }

    let path = self.artifact_path(key);
    if let Err(e) = self.persist(&path, &contents) {
      tracing::error!(path = %path.display(), "failed to write combined script: {e}");
      return false;
    }
    tracing::debug!(key, bytes = contents.len(), files = sources.len(), "wrote combined script");

    if self.compress {
      let gz_path = self.compressed_artifact_path(key);
      if let Err(e) = gzip(&contents).and_then(|gz| self.persist(&gz_path, &gz)) {
        tracing::error!(path = %gz_path.display(), "failed to write compressed script: {e}");
      }
    }
    true
  }

  fn persist(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(&self.store_dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
  }
}

/// Registered paths are relative to the document root.
fn normalize(file: &str) -> &str {
  file.trim_start_matches('/')
}

fn stamp(file: &str, path: &Path) -> Option<FileStamp> {
  let meta = std::fs::metadata(path).ok().filter(std::fs::Metadata::is_file)?;
  let mtime = meta
    .modified()
    .ok()
    .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
    .map_or(0, |d| d.as_secs());
  Some(FileStamp::new(file, meta.len(), mtime))
}

fn gzip(contents: &[u8]) -> std::io::Result<Vec<u8>> {
  let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
  encoder.write_all(contents)?;
  encoder.finish()
}
