//! Exporter configuration loaded from `shapex.toml`.
//!
//! All knobs have sensible defaults; the `ONSHAPE_ACCESS_KEY` and
//! `ONSHAPE_SECRET_KEY` environment variables take precedence over the file.
//! Credentials are redacted from Debug output and never logged.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Top-level configuration for an export run.
#[derive(Clone, Deserialize)]
pub struct ExporterConfig {
    /// Onshape API access key.
    #[serde(default)]
    pub access_key: String,

    /// Onshape API secret key.
    #[serde(default)]
    pub secret_key: String,

    /// Base URL of the Onshape API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed interval between translation status polls, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Ceiling on non-terminal status polls before timing out.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    /// Directory receiving the exported artifacts.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Skip options whose raw value is the literal "Default" sentinel.
    #[serde(default)]
    pub skip_default: bool,

    /// Export only the first variant and stop (debugging aid).
    #[serde(default)]
    pub first_only: bool,
}

fn default_base_url() -> String {
    "https://cad.onshape.com".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_max_poll_attempts() -> u32 {
    60
}

fn default_out_dir() -> String {
    "out".to_string()
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            out_dir: default_out_dir(),
            skip_default: false,
            first_only: false,
        }
    }
}

// Credentials must never appear in logs or error output.
impl fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("access_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("max_poll_attempts", &self.max_poll_attempts)
            .field("out_dir", &self.out_dir)
            .field("skip_default", &self.skip_default)
            .field("first_only", &self.first_only)
            .finish()
    }
}

impl ExporterConfig {
    /// Load configuration from `shapex.toml` in the current directory.
    /// Uses defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new("shapex.toml");
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<ExporterConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variables take precedence over the file for credentials.
        if let Ok(key) = std::env::var("ONSHAPE_ACCESS_KEY")
            && !key.is_empty()
        {
            config.access_key = key;
        }
        if let Ok(key) = std::env::var("ONSHAPE_SECRET_KEY")
            && !key.is_empty()
        {
            config.secret_key = key;
        }

        Ok(config)
    }
}
