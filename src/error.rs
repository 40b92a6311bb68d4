use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeakError {
    /// A comparison produced an ordering that no total order allows, or two
    /// samples could not be ordered at all (NaN).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Cluster must hold 1 to 3 samples, got {0}")]
    InvalidClusterSize(usize),

    #[error("Cannot inflate {peaks} peaks into {length} samples")]
    PeakCountExceedsLength { peaks: usize, length: usize },

    #[error("Peak at sample {index} does not fit into {length} samples")]
    PeakOutOfRange { index: usize, length: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PeakError>;
