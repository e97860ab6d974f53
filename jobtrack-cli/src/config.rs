//! Configuration module
//!
//! Handles CLI configuration: where the tracker API lives and how entries
//! are presented.

use anyhow::{Result, bail};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the tracker API
    pub api_url: String,

    /// Prefix shown before salary amounts
    pub currency: String,

    /// Skip the delete confirmation prompt
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            currency: "RM".to_string(),
            assume_yes: false,
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            bail!("api_url must start with http:// or https://");
        }

        Ok(())
    }
}
