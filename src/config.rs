//! Recovery configuration.
//!
//! Settings come from three layers, lowest precedence first: built-in
//! defaults, an optional JSON file, and explicit overrides (command-line
//! flags). [`RecoveryConfig::resolve`] merges them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::input::ShareSet;
use crate::recovery::RoundingMode;

/// Settings applied on top of a share document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Tie-breaking rule for non-integer interpolation results.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Overrides the document's `k` when set.
    #[serde(default)]
    pub threshold: Option<usize>,
}

impl RecoveryConfig {
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(0));
        }
        self.threshold = Some(threshold);
        Ok(self)
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        if config.threshold == Some(0) {
            return Err(Error::InvalidThreshold(0));
        }
        Ok(config)
    }

    /// Saves configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Merges defaults, an optional config file and explicit overrides.
    ///
    /// Overrides win over the file, and the file wins over defaults.
    pub fn resolve(
        file: Option<&Path>,
        rounding: Option<RoundingMode>,
        threshold: Option<usize>,
    ) -> Result<Self> {
        let mut config = match file {
            Some(path) => {
                debug!(path = %path.display(), "loading recovery config");
                RecoveryConfig::load(path)?
            }
            None => RecoveryConfig::default(),
        };

        if let Some(rounding) = rounding {
            config = config.with_rounding(rounding);
        }
        if let Some(threshold) = threshold {
            config = config.with_threshold(threshold)?;
        }

        Ok(config)
    }

    /// Applies the threshold override, if any, to `shares`.
    pub fn apply(&self, shares: ShareSet) -> Result<ShareSet> {
        match self.threshold {
            Some(threshold) => shares.with_threshold(threshold),
            None => Ok(shares),
        }
    }
}
