use super::{PersistenceBackend, Render};
use crate::error::{Result, SolidError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory backend for testing.
///
/// Uses `RefCell` for interior mutability since everything here is
/// single-threaded, which lets the trait keep `&self` receivers.
#[derive(Debug, Default)]
pub struct MemBackend {
    files: RefCell<HashMap<PathBuf, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Whether anything has been saved at `path`.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

impl PersistenceBackend for MemBackend {
    fn save(&self, item: &dyn Render, path: &Path) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SolidError::io(path, io::Error::other("Simulated write error")));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), item.render());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            SolidError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )
        })
    }
}
