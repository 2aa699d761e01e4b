//! Registry configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the template registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding the portal template assets
    pub template_dir: PathBuf,
}

impl RegistryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            template_dir: std::env::var("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("templates")),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
        }
    }
}
