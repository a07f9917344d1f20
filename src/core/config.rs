//! Searcher configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Construction-time configuration shared by both searchers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ply limit for fixed-depth minimax (must be >= 1).
    /// Ignored by iterative deepening.
    pub search_depth: u32,

    /// Remaining time at or below which every in-flight search aborts.
    /// Same unit as the time-left query (milliseconds for `Deadline`).
    /// Must leave room for the last node in flight to return.
    pub timeout_threshold: f64,

    /// Deepest iteration iterative deepening will run (0 = unlimited).
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            timeout_threshold: 10.0,
            max_depth: 0,
        }
    }
}

impl SearchConfig {
    /// Set the fixed search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the timeout threshold.
    pub fn with_timeout_threshold(mut self, threshold: f64) -> Self {
        self.timeout_threshold = threshold;
        self
    }

    /// Cap iterative deepening at `depth` plies.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Check the invariants the searchers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroSearchDepth);
        }
        if !(self.timeout_threshold.is_finite() && self.timeout_threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(self.timeout_threshold));
        }
        Ok(())
    }

    /// Depth cap as an inclusive upper bound for the deepening loop.
    pub(crate) fn depth_cap(&self) -> u32 {
        if self.max_depth == 0 {
            u32::MAX
        } else {
            self.max_depth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.timeout_threshold, 10.0);
        assert_eq!(config.max_depth, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_search_depth(5)
            .with_timeout_threshold(2.5)
            .with_max_depth(8);

        assert_eq!(config.search_depth, 5);
        assert_eq!(config.timeout_threshold, 2.5);
        assert_eq!(config.depth_cap(), 8);
    }

    #[test]
    fn test_unlimited_depth_cap() {
        assert_eq!(SearchConfig::default().depth_cap(), u32::MAX);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_depth = SearchConfig::default().with_search_depth(0);
        assert_eq!(zero_depth.validate(), Err(ConfigError::ZeroSearchDepth));

        let negative = SearchConfig::default().with_timeout_threshold(-1.0);
        assert_eq!(negative.validate(), Err(ConfigError::InvalidThreshold(-1.0)));

        let zero = SearchConfig::default().with_timeout_threshold(0.0);
        assert!(zero.validate().is_err());

        let nan = SearchConfig::default().with_timeout_threshold(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_search_depth(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
