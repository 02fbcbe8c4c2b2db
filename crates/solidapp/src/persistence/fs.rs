use super::{PersistenceBackend, Render};
use crate::error::{Result, SolidError};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Filesystem backend.
///
/// Parent directories are not created; saving into a missing directory is an
/// error. Files are closed when the handle drops, including on error paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsBackend;

impl FsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PersistenceBackend for FsBackend {
    fn save(&self, item: &dyn Render, path: &Path) -> Result<()> {
        let text = item.render();
        let mut file = File::create(path).map_err(|e| SolidError::io(path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| SolidError::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path).map_err(|e| SolidError::io(path, e))?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| SolidError::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded");
        Ok(text)
    }
}
