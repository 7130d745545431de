//! Suggestion parameters and their JSON persistence.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// Parameters that shape a suggestion query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// How many characters longer or shorter than the query a candidate may be.
    pub max_length_delta: usize,
    /// Minimum character-set overlap (0.0 to 1.0) a candidate needs.
    pub min_common_percent: f64,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_length_delta: 2,
            min_common_percent: 0.8,
            max_suggestions: 4,
        }
    }
}

impl SuggestionConfig {
    pub fn new(max_length_delta: usize, min_common_percent: f64, max_suggestions: usize) -> Self {
        SuggestionConfig {
            max_length_delta,
            min_common_percent,
            max_suggestions,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.min_common_percent)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SuggestionConfig =
            serde_json::from_str(json).map_err(|e| SpellError::config(e.to_string()))?;
        if let Err(e) = config.validate() {
            warn!("Rejected suggestion config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpellError::config(e.to_string()))
    }
}

/// Overlap thresholds must lie in `[0.0, 1.0]`; NaN is rejected.
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(SpellError::invalid_argument(format!(
            "common percent threshold must be within [0.0, 1.0], got {}",
            threshold
        )))
    }
}
