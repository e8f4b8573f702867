//! # Configuration File
//!
//! `wsa.yaml` holds the ingest layout and pipeline policy. Every field has a
//! default, so an absent file and an empty file behave the same. Command
//! line flags are applied on top by [`crate::input::InputArgs`].
//!
//! ```yaml
//! ingest:
//!   title_column: 9
//!   due_date_column: 18
//!   has_header: true
//! pipeline:
//!   unclassified: retain
//!   week_of: 2026-03-02
//!   extra_date_formats: ["%d.%m.%Y"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use wsa_core::PipelineConfig;
use wsa_ingest::IngestConfig;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "wsa.yaml";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WsaConfig {
    pub ingest: IngestConfig,
    pub pipeline: PipelineConfig,
}

impl WsaConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text).context("failed to parse configuration")?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./wsa.yaml` is used when
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => {
                if !p.exists() {
                    bail!("config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.ingest.validate().context("invalid ingest configuration")?;
        self.pipeline
            .validate()
            .context("invalid pipeline configuration")?;
        Ok(())
    }
}
