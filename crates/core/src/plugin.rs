// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin root resolution.
//!
//! The log store only needs to know where the plugin's `data/` directory
//! lives. [`DataDir`] is that seam; [`PluginRoot`] is the concrete value a
//! host builds once at startup and passes down.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors resolving the plugin's directories.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("plugin is not initialized: no root directory was provided")]
    NotInitialized,
    #[error("plugin root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("plugin root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("plugin root '{}' does not contain a 'data' directory", .0.display())]
    DataDirNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves the absolute path of the plugin's data directory.
pub trait DataDir {
    fn data_path(&self) -> Result<PathBuf, PluginError>;
}

/// Root directory of an installed plugin.
#[derive(Debug, Clone, Default)]
pub struct PluginRoot {
    root: Option<PathBuf>,
}

impl PluginRoot {
    /// Validate `root` and capture its canonical path.
    ///
    /// The root must be an existing directory containing `data/`.
    pub fn initialize(root: impl AsRef<Path>) -> Result<Self, PluginError> {
        let root = root.as_ref();
        let canonical = root
            .canonicalize()
            .map_err(|_| PluginError::RootNotFound(root.to_path_buf()))?;

        if !canonical.is_dir() {
            return Err(PluginError::RootNotDirectory(canonical));
        }
        if !canonical.join("data").is_dir() {
            return Err(PluginError::DataDirNotFound(canonical));
        }

        Ok(Self {
            root: Some(canonical),
        })
    }

    /// A root that was never set up; every path lookup fails.
    pub fn uninitialized() -> Self {
        Self { root: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    pub fn root_path(&self) -> Result<&Path, PluginError> {
        self.root.as_deref().ok_or(PluginError::NotInitialized)
    }
}

impl DataDir for PluginRoot {
    /// `<root>/data`, recreated if it was removed after initialization.
    fn data_path(&self) -> Result<PathBuf, PluginError> {
        let data = self.root_path()?.join("data");
        if !data.exists() {
            std::fs::create_dir_all(&data)?;
        }
        Ok(data)
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
