use super::{PeakSet, classify_cluster, merge};
use crate::config::FoldStrategy;
use crate::constants::CLUSTER_SIZE;
use crate::error::Result;
use crate::sample::Sample;

/// Detect every peak in `samples`.
///
/// The input is cut into clusters of [`CLUSTER_SIZE`] samples (the last one
/// may be shorter), each classified on its own, and the clusters are merged
/// left to right.
///
/// # Example
/// ```
/// let peaks = peakdetect::detect(&[2, 1, 3]).unwrap();
/// assert_eq!(peaks.peaks(), &[0, 2]);
/// ```
pub fn detect<T: Sample>(samples: &[T]) -> Result<PeakSet<T>> {
    detect_with(samples, FoldStrategy::Sequential)
}

/// Detect every peak in `samples`, reducing clusters with `strategy`.
///
/// Both strategies produce the same peak set.
pub fn detect_with<T: Sample>(samples: &[T], strategy: FoldStrategy) -> Result<PeakSet<T>> {
    let set = match strategy {
        FoldStrategy::Sequential => fold_sequential(samples)?,
        FoldStrategy::Balanced => fold_balanced(samples)?,
    };
    log::debug!(
        "{} peaks in {} samples ({:?} fold)",
        set.peak_count(),
        set.sample_count(),
        strategy
    );
    Ok(set)
}

fn fold_sequential<T: Sample>(samples: &[T]) -> Result<PeakSet<T>> {
    samples
        .chunks(CLUSTER_SIZE)
        .try_fold(PeakSet::empty(), |acc, cluster| {
            merge(acc, classify_cluster(cluster)?)
        })
}

/// Reduce over a balanced tree of adjacent ranges.
///
/// Ranges are split on a cluster boundary so the leaves are exactly the
/// clusters of the sequential fold.
fn fold_balanced<T: Sample>(samples: &[T]) -> Result<PeakSet<T>> {
    if samples.is_empty() {
        return Ok(PeakSet::empty());
    }
    if samples.len() <= CLUSTER_SIZE {
        return classify_cluster(samples);
    }

    let clusters = samples.len().div_ceil(CLUSTER_SIZE);
    let (left, right) = samples.split_at((clusters / 2) * CLUSTER_SIZE);

    #[cfg(feature = "parallel")]
    let (left, right) = if samples.len() >= crate::constants::PARALLEL_MIN_SAMPLES {
        rayon::join(|| fold_balanced(left), || fold_balanced(right))
    } else {
        (fold_balanced(left), fold_balanced(right))
    };
    #[cfg(not(feature = "parallel"))]
    let (left, right) = (fold_balanced(left), fold_balanced(right));

    merge(left?, right?)
}
