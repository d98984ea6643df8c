//! File-backed comparison store.
//!
//! [`FileStore`] keeps each key in its own file under a state directory:
//!
//! ```text
//! {root}/
//! +-- VERSION            # state format version
//! +-- compareMonitors    # one file per key, raw bytes
//! ```
//!
//! On construction the `VERSION` file is checked. A missing or different
//! version wipes the directory so state written by an incompatible release is
//! never decoded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ComparisonStore;

/// Format version written to `VERSION`.
pub const STATE_VERSION: &str = "1";

/// [`ComparisonStore`] rooted at a directory on disk.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at `root` using [`STATE_VERSION`].
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self::with_version(root, STATE_VERSION)
    }

    /// Open the store at `root`, wiping it if its version is not `version`.
    ///
    /// Errors while validating are logged, never fatal.
    #[must_use]
    pub fn with_version(root: PathBuf, version: &str) -> Self {
        validate_version(&root, version);
        Self { root }
    }

    /// Directory holding the stored files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for `key`, or `None` if the key could escape the root.
    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && key != "VERSION"
            && !key.contains(['/', '\\'])
            && key != "."
            && key != "..";
        if !valid {
            tracing::warn!(key, "rejecting invalid store key");
            return None;
        }
        Some(self.root.join(key))
    }
}

impl ComparisonStore for FileStore {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key)?;
        fs::read(path).ok()
    }

    fn save(&self, key: &str, value: &[u8]) {
        let Some(path) = self.path_for(key) else {
            return;
        };
        if let Err(e) = fs::create_dir_all(&self.root) {
            tracing::warn!("failed to create state directory: {e}");
            return;
        }
        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(key, "failed to save comparison state: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(path) = self.path_for(key) else {
            return;
        };
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(key, "removed stored comparison"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, "failed to remove comparison state: {e}"),
        }
    }
}

/// Reset the state directory unless its `VERSION` file holds `version`.
///
/// A missing or unreadable `VERSION` counts as a mismatch, so state written
/// by an unknown format is never read back.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");
    let stored = fs::read_to_string(&version_file).ok();
    if stored.as_deref() == Some(version) {
        return;
    }

    tracing::info!(
        root = %root.display(),
        stored = stored.as_deref().unwrap_or("none"),
        current = version,
        "resetting comparison state"
    );
    if let Err(e) = reset_dir(root).and_then(|()| fs::write(&version_file, version)) {
        tracing::warn!(root = %root.display(), "failed to reset comparison state: {e}");
    }
}

/// Empty `root`, creating it if needed.
fn reset_dir(root: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(root) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    fs::create_dir_all(root)
}
