//! Optional CLI configuration loaded from `keycheck.toml`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use keycheck_core::score::MissingOptionPolicy;

/// Top-level keycheck configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// How failures are shown to the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Show a generic error message instead of the failure detail.
    #[serde(default)]
    pub quiet_errors: bool,
}

/// Scoring policy knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Verdict for a chosen option whose identifier was never extracted.
    #[serde(default)]
    pub missing_option_policy: MissingOptionPolicy,
}

impl Config {
    /// Load configuration. An explicit path must parse; with no path,
    /// `./keycheck.toml` is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new("keycheck.toml");
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}
