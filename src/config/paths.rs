//! Path management for satang
//!
//! Provides platform-appropriate path resolution for configuration, data,
//! and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `SATANG_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (Linux: `~/.config/satang`, macOS: `~/Library/Application
//!    Support/satang`, Windows: `%APPDATA%\satang`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SatangError;

/// Manages all paths used by satang
#[derive(Debug, Clone)]
pub struct SatangPaths {
    /// Base directory for all satang data
    base_dir: PathBuf,
}

impl SatangPaths {
    /// Create a new SatangPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user.
    pub fn new() -> Result<Self, SatangError> {
        let base_dir = if let Ok(custom) = std::env::var("SATANG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "satang").ok_or_else(|| {
                SatangError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create SatangPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json (the account store)
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to session.json (the signed-in user)
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base, data, and export directories.
    pub fn ensure_directories(&self) -> Result<(), SatangError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SatangError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SatangError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| SatangError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if satang has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
