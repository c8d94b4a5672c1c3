//! CSV storage connection: owns the data directory and the file paths the
//! repositories read and write.

use anyhow::Result;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Handle to the directory holding the schedule CSV files.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at the given directory, creating it if
    /// necessary.
    pub fn new(base_directory: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&base_directory)?;
        Ok(Self { base_directory })
    }

    /// Default data directory for the desktop app. Falls back to a temp
    /// location when the platform directories cannot be resolved.
    pub fn default_directory() -> PathBuf {
        ProjectDirs::from("", "", "clinic-scheduler")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("clinic_scheduler"))
    }

    pub fn base_directory(&self) -> &PathBuf {
        &self.base_directory
    }

    pub fn appointments_path(&self) -> PathBuf {
        self.base_directory.join("appointments.csv")
    }

    pub fn people_path(&self) -> PathBuf {
        self.base_directory.join("people.csv")
    }

    /// Atomically replace `target` with `contents` via a temp-file rename.
    pub(super) fn replace_file(&self, target: &PathBuf, contents: &[u8]) -> Result<()> {
        let tmp = target.with_extension("csv.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, target)?;
        Ok(())
    }
}
