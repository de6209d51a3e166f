//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the checked-in fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Raw bytes of a fixture.
pub fn load_fixture(name: &str) -> Vec<u8> {
    fs::read(fixture_path(name)).unwrap_or_else(|e| panic!("missing fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir so tests can write next to it.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, load_fixture(name)).expect("Failed to copy fixture");
    (dir, path)
}
