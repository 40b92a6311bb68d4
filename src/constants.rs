//! Structural constants of the divide-and-conquer detector.

/// Number of samples in a full base-case cluster.
/// The input is walked in strides of this size; a shorter remainder of 1 or 2
/// samples is classified by the pair/single rules.
pub const CLUSTER_SIZE: usize = 3;

/// Smallest sub-range the balanced reduction hands to `rayon::join`.
/// Below this the two halves are reduced on the calling thread.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub const PARALLEL_MIN_SAMPLES: usize = 4096;
