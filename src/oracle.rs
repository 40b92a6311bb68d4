use std::cmp::Ordering;

use crate::detection::PeakSet;
use crate::sample::Sample;

/// First differing neighbor on one side of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// A smaller sample follows the plateau.
    Lower,
    /// A greater sample follows the plateau.
    Higher,
    /// The plateau runs into the end of the sequence.
    Boundary,
}

fn extend<'s, T: Sample>(value: T, mut neighbors: impl Iterator<Item = &'s T>) -> Extension
where
    T: 's,
{
    neighbors
        .find_map(|n| match value.order(n) {
            Some(Ordering::Greater) => Some(Extension::Lower),
            Some(Ordering::Less) => Some(Extension::Higher),
            _ => None,
        })
        .unwrap_or(Extension::Boundary)
}

/// Extension to the left of `at`. `at` must be in range.
pub fn extend_left<T: Sample>(at: usize, samples: &[T]) -> Extension {
    extend(samples[at], samples[..at].iter().rev())
}

/// Extension to the right of `at`. `at` must be in range.
pub fn extend_right<T: Sample>(at: usize, samples: &[T]) -> Extension {
    extend(samples[at], samples[at + 1..].iter())
}

/// Whether `samples[at]` is a peak.
///
/// A peak is greater than its plateau-extended neighbor on one side and not
/// less than the one on the other side. `boundary_is_lower` decides whether
/// running into the end of the sequence counts as finding a smaller neighbor;
/// it only matters for a sequence that is one single plateau, which is a peak
/// when the flag is set and not otherwise. Detection treats such a sequence
/// as having no peaks, which is `boundary_is_lower = false`.
pub fn is_peak<T: Sample>(at: usize, samples: &[T], boundary_is_lower: bool) -> bool {
    if at >= samples.len() {
        return false;
    }
    let lower = |e: Extension| {
        e == Extension::Lower || (e == Extension::Boundary && boundary_is_lower)
    };
    let not_higher = |e: Extension| e != Extension::Higher;

    let left = extend_left(at, samples);
    let right = extend_right(at, samples);
    (lower(left) && not_higher(right)) || (lower(right) && not_higher(left))
}

/// Every peak of `samples`, found index by index.
///
/// Quadratic on long plateaus; meant for checking the detector only.
pub fn brute_force_peaks<T: Sample>(samples: &[T]) -> Vec<usize> {
    (0..samples.len())
        .filter(|&i| is_peak(i, samples, false))
        .collect()
}

/// Indices where `set` and the brute-force definition disagree.
pub fn disagreements<T: Sample>(set: &PeakSet<T>) -> Vec<usize> {
    let samples = set.samples();
    (0..samples.len())
        .filter(|&i| set.is_peak(i) != is_peak(i, samples, false))
        .collect()
}

/// Check a peak set against the brute-force definition.
///
/// Every reported peak must be a peak, every other sample must not be one,
/// and together they must account for every sample exactly once.
pub fn is_valid<T: Sample>(set: &PeakSet<T>) -> bool {
    let samples = set.samples();
    let mut peak_count = 0;
    for &p in set.peaks() {
        if !is_peak(p, samples, false) {
            return false;
        }
        peak_count += 1;
    }
    let non_peak_count = (0..samples.len())
        .filter(|&i| !set.is_peak(i) && !is_peak(i, samples, false))
        .count();
    peak_count + non_peak_count == samples.len()
}
