//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `SOLID_JOURNAL_PATH`.
//! 2. **Local Config**: `./solid.toml` in the working directory.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `journal_path` | `journal.log` | Where `solid journal` saves and reloads the journal |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "solid.toml";

/// Configuration for solid, stored in `solid.toml`.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct SolidConfig {
    /// File the journal is saved to and loaded from.
    #[config(env = "SOLID_JOURNAL_PATH", default = "journal.log")]
    pub journal_path: PathBuf,
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            journal_path: PathBuf::from("journal.log"),
        }
    }
}

impl SolidConfig {
    /// Load from the environment, `./solid.toml` and the global config file.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE), global_config_path().as_deref())
    }

    /// Load from the environment plus explicit local and global files.
    pub fn load_from(local: &Path, global: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::builder().env(), local, global)
    }

    /// Load from explicit local and global files only, ignoring the environment.
    pub fn load_files(local: &Path, global: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::builder(), local, global)
    }

    fn load_layers(
        builder: confique::Builder<Self>,
        local: &Path,
        global: Option<&Path>,
    ) -> Result<Self> {
        let mut builder = builder.file(local);
        if let Some(global) = global {
            builder = builder.file(global);
        }
        Ok(builder.load()?)
    }
}

/// Location of the per-user config file, if the platform has one.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "solid").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
