pub mod config;
pub mod constants;
pub mod detection;
pub mod detector;
pub mod error;
pub mod inflate;
pub mod levels;
pub mod oracle;
pub mod sample;

pub use config::PeakConfig;
pub use detection::{PeakSet, classify_cluster, detect, detect_with, merge};
pub use detector::PeakDetector;
pub use error::{PeakError, Result};
pub use inflate::{inflate, inflate_into};
pub use levels::{
    Level, PeakSource, detect_levels, detect_next_level, detect_to_fixed_point,
    detect_with_budget,
};
pub use sample::Sample;
