//! Configuration handling for the TUI

use crate::state::StepperOrientation;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default lifetime of a success toast
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Where the employee form draws its step indicator
    pub stepper_orientation: Option<StepperOrientation>,
    /// How long success toasts stay visible
    pub toast_duration_ms: Option<u64>,
    /// Session file override
    pub session_path: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "erp", "erp-admin")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults on a broken file
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            Self::default()
        })
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn orientation(&self) -> StepperOrientation {
        self.stepper_orientation.unwrap_or_default()
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}
