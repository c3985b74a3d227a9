//! Shared fixture loading for integration tests.
//!
//! Fixtures live under `tests/fixtures/` and are resolved relative to the
//! crate manifest so tests behave the same from IDEs, CI and `cargo test`.

use std::fs;
use std::path::PathBuf;

/// Read a fixture file as UTF-8 text.
///
/// # Panics
/// Panics when the fixture is missing; tests cannot proceed without it.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}
