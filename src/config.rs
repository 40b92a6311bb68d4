//! Configuration for the peak detector.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! [detection]
//! fold = "balanced"
//!
//! [levels]
//! max_iterations = 4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PeakError, Result};

/// How classified clusters are reduced into one peak set
///
/// Both strategies produce identical results; they differ only in the shape of
/// the merge tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FoldStrategy {
    /// Merge clusters strictly left to right
    #[default]
    Sequential,
    /// Merge adjacent ranges pairwise over a balanced tree (runs halves on
    /// the rayon pool with the `parallel` feature)
    Balanced,
}

/// Detector configuration
///
/// # Example
/// ```
/// use peakdetect::config::{FoldStrategy, PeakConfig};
///
/// let config = PeakConfig::from_toml_str("[detection]\nfold = \"balanced\"").unwrap();
/// assert_eq!(config.detection.fold, FoldStrategy::Balanced);
/// assert_eq!(config.levels.max_iterations, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakConfig {
    /// Single-level detection settings
    pub detection: DetectionConfig,
    /// Peaks-of-peaks iteration settings
    pub levels: LevelConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Shape of the cluster merge tree
    pub fold: FoldStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Maximum number of levels to aggregate. `None` runs to the fixed point,
    /// where a level has no peaks left.
    pub max_iterations: Option<usize>,
}

impl PeakConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| PeakError::Config(e.to_string()))
    }

    /// Serialize the configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PeakError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PeakConfig::default();
        assert_eq!(config.detection.fold, FoldStrategy::Sequential);
        assert_eq!(config.levels.max_iterations, None);
    }

    #[test]
    fn test_partial_toml() {
        let config = PeakConfig::from_toml_str("[levels]\nmax_iterations = 2\n").unwrap();
        assert_eq!(config.levels.max_iterations, Some(2));
        assert_eq!(config.detection.fold, FoldStrategy::Sequential);

        let config = PeakConfig::from_toml_str("").unwrap();
        assert_eq!(config, PeakConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PeakConfig::default();
        config.detection.fold = FoldStrategy::Balanced;
        config.levels.max_iterations = Some(3);
        let text = config.to_toml_string().unwrap();
        assert_eq!(PeakConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = PeakConfig::from_toml_str("[detection]\nfold = \"diagonal\"").unwrap_err();
        assert!(matches!(err, PeakError::Config(_)));
        assert!(PeakConfig::from_toml_str("[levels]\nmax_iterations = -1").is_err());
    }
}
