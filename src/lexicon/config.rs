//! Configuration for a lexicon.

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};

/// Configuration for [`crate::lexicon::Lexicon`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Number of tokens to pre-allocate room for.
    pub initial_capacity: usize,

    /// Capacity of the buffers used by the allocating lookup helpers.
    /// If None, the input length is used, which can never overflow.
    pub max_lookup_matches: Option<usize>,

    /// Inputs with at least this many symbols are scanned in parallel.
    pub parallel_scan_threshold: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            initial_capacity: 0,
            max_lookup_matches: None,
            parallel_scan_threshold: 256,
        }
    }
}

impl LexiconConfig {
    /// Parse a JSON configuration and validate it. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LexiconConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_lookup_matches == Some(0) {
            return Err(LexiconError::invalid_config(
                "max_lookup_matches must be greater than zero",
            ));
        }
        Ok(())
    }
}
