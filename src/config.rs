//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::transport::DEFAULT_SUBMIT_DELAY;

/// Rows scrolled before the navbar switches to its compact style
const DEFAULT_NAVBAR_COMPACT_AFTER: usize = 5;
/// Rows scrolled before the back-to-top button appears
const DEFAULT_BACK_TO_TOP_AFTER: usize = 15;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Portfolio content file; the bundled page is used when unset
    pub content_path: Option<PathBuf>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Show the loading screen at startup
    pub show_splash: Option<bool>,
    /// Navbar compact threshold in rows
    pub navbar_compact_after: Option<usize>,
    /// Back-to-top threshold in rows
    pub back_to_top_after: Option<usize>,
}

impl FolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: FolioConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                tracing::info!(path = %path.display(), "Loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn show_splash(&self) -> bool {
        self.show_splash.unwrap_or(true)
    }

    pub fn navbar_compact_after(&self) -> usize {
        self.navbar_compact_after
            .unwrap_or(DEFAULT_NAVBAR_COMPACT_AFTER)
    }

    pub fn back_to_top_after(&self) -> usize {
        self.back_to_top_after.unwrap_or(DEFAULT_BACK_TO_TOP_AFTER)
    }
}
