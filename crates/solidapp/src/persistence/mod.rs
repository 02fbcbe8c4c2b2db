//! # Persistence
//!
//! Saving and loading are kept out of the types being saved. Anything that
//! can render itself as text can be written, not just a
//! [`Journal`](crate::journal::Journal).
//!
//! ## Backends
//!
//! [`PersistenceBackend`] abstracts where the text goes:
//!
//! - [`fs::FsBackend`]: real files. Saving creates or truncates the target,
//!   loading reads it whole.
//! - [`memory::MemBackend`]: an in-memory map keyed by path, for tests.
//!
//! The module-level [`save`] and [`load`] use the filesystem backend.
//!
//! ## Format
//!
//! The saved file is exactly the rendered text: no header, no trailing
//! newline, no escaping. For a journal that means one `"<n>. <text>"` per line.

use crate::error::Result;
use std::fmt;
use std::path::Path;

pub mod fs;
pub mod memory;

pub use fs::FsBackend;
pub use memory::MemBackend;

/// Something with a text rendering.
///
/// Implemented for every [`fmt::Display`] type.
pub trait Render {
    fn render(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Render for T {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Where rendered text is stored.
pub trait PersistenceBackend {
    /// Write `item`'s rendering as the complete contents of `path`.
    fn save(&self, item: &dyn Render, path: &Path) -> Result<()>;

    /// Read back the complete contents of `path`.
    fn load(&self, path: &Path) -> Result<String>;
}

/// Save `item` to a file at `path`, replacing any existing contents.
pub fn save(item: &dyn Render, path: impl AsRef<Path>) -> Result<()> {
    FsBackend::new().save(item, path.as_ref())
}

/// Load the complete contents of the file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    FsBackend::new().load(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Journal;

    #[test]
    fn display_types_render() {
        assert_eq!(42_u32.render(), "42");
        assert_eq!("plain".render(), "plain");
    }

    #[test]
    fn journal_renders_its_entries() {
        let mut journal = Journal::new();
        journal.add("a");
        journal.add("b");
        let item: &dyn Render = &journal;
        assert_eq!(item.render(), "1. a\n2. b");
    }

    #[test]
    fn module_functions_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.log");

        let mut journal = Journal::new();
        journal.add("this is good.");
        journal.add("hello world");

        save(&journal, &path).unwrap();
        assert_eq!(load(&path).unwrap(), journal.render());
    }
}
