//! Renderer configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Height used when none is configured
pub const DEFAULT_HEIGHT: &str = "300px";

/// Configuration for a [`ScrollRenderer`](crate::ScrollRenderer)
///
/// # Examples
///
/// ```
/// let cfg = scrolltext::RenderConfig::default();
/// assert_eq!(cfg.height, "300px");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS length for the container height ("300px", "50vh"). Not validated.
    pub height: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&data)
    }
}
