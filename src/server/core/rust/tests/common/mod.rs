/* src/server/core/rust/tests/common/mod.rs */

use std::sync::Once;

/// Install a tracing subscriber once per test binary; filtered by `RUST_LOG`.
pub fn init_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  });
}
