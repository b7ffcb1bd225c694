mod types;

pub use types::{Config, GithubConfig, DEFAULT_API_URL};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies command-line and environment values on top of the file.
    pub fn merge_overrides(&mut self, api_url: Option<String>, token: Option<String>) {
        if let Some(api_url) = api_url {
            self.github.api_url = api_url;
        }
        if token.is_some() {
            self.github.token = token;
        }
    }
}
