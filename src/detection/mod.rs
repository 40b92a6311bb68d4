pub mod cluster;
pub mod divider;
pub mod merge;
pub mod peak_set;

pub use cluster::{classify_cluster, classify_pair, classify_triple};
pub use divider::{detect, detect_with};
pub use merge::merge;
pub use peak_set::PeakSet;
