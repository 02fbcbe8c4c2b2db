//! # Journal
//!
//! An ordered log of numbered text notes. The journal only manages entries;
//! writing it anywhere is the job of [`crate::persistence`].
//!
//! ## Numbering
//!
//! Each `add` bumps a counter and bakes the new number into the entry text
//! (`"3. buy milk"`). The counter tracks how many entries were ever added, so
//! removing an entry never renumbers the others and numbers are never reused:
//!
//! ```
//! use solidapp::journal::Journal;
//!
//! let mut journal = Journal::new();
//! journal.add("a");
//! journal.add("b");
//! journal.remove(0).unwrap();
//! assert_eq!(journal.render(), "2. b");
//! ```
//!
//! Note text is stored verbatim. A note containing a newline renders across
//! two lines, which the line-per-entry file format cannot tell apart from two
//! entries.

use crate::error::{Result, SolidError};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note as `"<n>. <text>"`, where `n` is the new count.
    pub fn add(&mut self, text: impl AsRef<str>) {
        self.count += 1;
        let entry = format!("{}. {}", self.count, text.as_ref());
        debug!(number = self.count, "journal entry added");
        self.entries.push(entry);
    }

    /// Remove the entry at zero-based `index` in the current sequence.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(SolidError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        debug!(index, entry = %removed, "journal entry removed");
        Ok(())
    }

    /// All current entries joined by newlines.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries ever added, including removed ones.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(entry)?;
        }
        Ok(())
    }
}
