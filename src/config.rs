//! Generator configuration.
//!
//! Workload caps and analyzer thresholds. Every field has a default, so an
//! empty TOML document yields [`GeneratorConfig::default`].
//!
//! ```toml
//! max_theory_hours_per_day = 2
//! max_lab_hours_per_day = 4
//! imbalance_threshold = 3
//! imbalance_margin = 1.5
//! max_batches = 32
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// Tunable limits for one generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Theory hours a faculty may teach per day.
    #[serde(default = "default_max_theory_hours")]
    pub max_theory_hours_per_day: u32,
    /// Lab hours a faculty may supervise per day.
    #[serde(default = "default_max_lab_hours")]
    pub max_lab_hours_per_day: u32,
    /// Load spread (`max - min`) above which over/underload is reported.
    #[serde(default = "default_imbalance_threshold")]
    pub imbalance_threshold: u32,
    /// Distance from the average load that flags a faculty.
    #[serde(default = "default_imbalance_margin")]
    pub imbalance_margin: f64,
    /// Largest accepted `num_batches`.
    #[serde(default = "default_max_batches")]
    pub max_batches: usize,
    /// Fixed random seed. `None` draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_theory_hours() -> u32 {
    2
}
fn default_max_lab_hours() -> u32 {
    4
}
fn default_imbalance_threshold() -> u32 {
    3
}
fn default_imbalance_margin() -> f64 {
    1.5
}
fn default_max_batches() -> usize {
    32
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_theory_hours_per_day: default_max_theory_hours(),
            max_lab_hours_per_day: default_max_lab_hours(),
            imbalance_threshold: default_imbalance_threshold(),
            imbalance_margin: default_imbalance_margin(),
            max_batches: default_max_batches(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, TimetableError> {
        Ok(toml::from_str(content)?)
    }

    /// Sets the per-day theory cap.
    pub fn with_max_theory_hours(mut self, hours: u32) -> Self {
        self.max_theory_hours_per_day = hours;
        self
    }

    /// Sets the per-day lab cap.
    pub fn with_max_lab_hours(mut self, hours: u32) -> Self {
        self.max_lab_hours_per_day = hours;
        self
    }

    /// Sets the analyzer's imbalance threshold and margin.
    pub fn with_imbalance(mut self, threshold: u32, margin: f64) -> Self {
        self.imbalance_threshold = threshold;
        self.imbalance_margin = margin;
        self
    }

    /// Sets the batch count limit.
    pub fn with_max_batches(mut self, max_batches: usize) -> Self {
        self.max_batches = max_batches;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_theory_hours_per_day, 2);
        assert_eq!(config.max_lab_hours_per_day, 4);
        assert_eq!(config.imbalance_threshold, 3);
        assert!((config.imbalance_margin - 1.5).abs() < 1e-10);
        assert_eq!(config.max_batches, 32);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = GeneratorConfig::from_toml_str("max_lab_hours_per_day = 6\nseed = 7\n").unwrap();
        assert_eq!(config.max_lab_hours_per_day, 6);
        assert_eq!(config.max_theory_hours_per_day, 2);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_invalid_toml() {
        let err = GeneratorConfig::from_toml_str("max_lab_hours_per_day = \"many\"").unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::default()
            .with_max_theory_hours(3)
            .with_max_lab_hours(2)
            .with_imbalance(5, 2.0)
            .with_max_batches(4)
            .with_seed(11);
        assert_eq!(config.max_theory_hours_per_day, 3);
        assert_eq!(config.max_lab_hours_per_day, 2);
        assert_eq!(config.imbalance_threshold, 5);
        assert_eq!(config.max_batches, 4);
        assert_eq!(config.seed, Some(11));
    }
}
