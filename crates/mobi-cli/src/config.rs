//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional and
//! unknown keys are rejected:
//!
//! ```yaml
//! resolution: extended   # display | extended | long | full
//! grouped: true          # render digits as XXX-XXX-...
//! output: json           # text | json
//! ```
//!
//! Command-line flags override values from the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mobi_core::Resolution;

/// How subcommands render their results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Resolution printed by `derive` when none is given on the command line.
    pub resolution: Resolution,
    /// Render digit strings in hyphenated groups of three.
    pub grouped: bool,
    /// Output format.
    pub output: OutputFormat,
}

impl CliConfig {
    /// Parse a configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("failed to parse configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Apply the global `--json` flag.
    pub fn with_json(mut self, json: bool) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }
}
