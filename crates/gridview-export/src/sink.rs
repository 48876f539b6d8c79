//! Destinations for finished exports.

use crate::error::Result;
use crate::format::ExportFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Somewhere an [`ExportFile`] can be saved.
///
/// The exporter calls `save` exactly once per export and does not retry.
pub trait ExportSink {
    fn save(&mut self, file: &ExportFile) -> Result<()>;
}

/// Writes each export into a directory under its own file name,
/// overwriting a previous export of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `file` would be written.
    pub fn path_for(&self, file: &ExportFile) -> PathBuf {
        self.dir.join(&file.file_name)
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, file: &ExportFile) -> Result<()> {
        let path = self.path_for(file);
        fs::write(&path, &file.bytes)?;
        tracing::info!(path = %path.display(), bytes = file.bytes.len(), "export written");
        Ok(())
    }
}

/// Keeps exports in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub files: Vec<ExportFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, file: &ExportFile) -> Result<()> {
        self.files.push(file.clone());
        Ok(())
    }
}
