//! Temporary script files for `run`
//!
//! Each `run` call writes its ExtendScript source to a fresh, uniquely named
//! `.jsx` file under `$TEMP_DIR/illustrator-mcp/` (or the configured script
//! directory). The file is owned by a [`ScriptFile`] guard and deleted when
//! the guard goes away, whether the dispatch succeeded, failed, or the task
//! unwound.
//!
//! # Examples
//!
//! ```
//! use illustrator_mcp::util::temp_files::{ScriptFile, default_script_dir};
//!
//! let script = ScriptFile::create("app.documents.add();", &default_script_dir()).unwrap();
//! let path = script.path().to_path_buf();
//! assert!(path.exists());
//!
//! script.remove();
//! assert!(!path.exists());
//! ```

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::{Builder, TempPath};

use crate::error::AutomationResult;

/// Filename prefix of script files
pub const SCRIPT_PREFIX: &str = "illustrator-";

/// Filename extension of script files
pub const SCRIPT_SUFFIX: &str = ".jsx";

/// Returns `$TEMP_DIR/illustrator-mcp/`
pub fn default_script_dir() -> PathBuf {
    std::env::temp_dir().join("illustrator-mcp")
}

/// Scoped handle on one temporary `.jsx` file
///
/// The file handle is closed right after the write so the target
/// application can open the file; only the path is kept.
#[derive(Debug)]
pub struct ScriptFile {
    path: TempPath,
}

impl ScriptFile {
    /// Writes `code` as UTF-8 to a new uniquely named file in `dir`
    ///
    /// `dir` is created if it does not exist.
    pub fn create(code: &str, dir: &Path) -> AutomationResult<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut file = Builder::new()
            .prefix(SCRIPT_PREFIX)
            .suffix(SCRIPT_SUFFIX)
            .tempfile_in(dir)?;

        file.write_all(code.as_bytes())?;
        file.flush()?;

        let path = file.into_temp_path();
        tracing::debug!("ExtendScript saved to: {:?}", &*path);

        Ok(Self { path })
    }

    /// Path of the script file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file now, logging instead of failing if that is not possible
    pub fn remove(self) {
        let path = self.path.to_path_buf();
        if let Err(e) = self.path.close() {
            tracing::warn!("Failed to remove script file {:?}: {}", path, e);
        }
    }
}
