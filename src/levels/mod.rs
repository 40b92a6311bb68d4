pub mod aggregator;
pub mod level;

pub use aggregator::{detect_levels, detect_next_level, detect_to_fixed_point, detect_with_budget};
pub use level::{Level, PeakSource};
