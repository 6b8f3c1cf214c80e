//! Temporary directories holding configuration documents.
//!
//! # Examples
//!
//! ```
//! use test_helpers::files::ConfigDir;
//!
//! let dir = ConfigDir::new()?;
//! let path = dir.write("app.json", r#"{"a": 1}"#)?;
//! assert!(path.as_std_path().is_file());
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[derive(Debug)]
pub struct ConfigDir {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl ConfigDir {
    /// Creates a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary config dir")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|p| anyhow!("temporary dir is not UTF-8: {}", p.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Root of the directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Path for `name` inside the directory, whether or not it exists.
    #[must_use]
    pub fn join(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Writes `contents` to `name` and returns the file's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }
}
