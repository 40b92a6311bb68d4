use std::cmp::Ordering;

use super::PeakSet;
use crate::error::{PeakError, Result};
use crate::sample::Sample;

/// What happens to the plateau run of one side at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunEdit {
    Keep,
    /// Clear the peak flag of every sample in the run.
    Strip,
    /// Flag the run as peaks. Only a side without any peak can have a run
    /// that becomes a peak through concatenation, and such a side is a single
    /// plateau, so the run is the whole side.
    Promote,
}

/// Peak status of the sides next to the boundary.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    ordering: Ordering,
    left_peak: bool,
    right_peak: bool,
    left_flat: bool,
    right_flat: bool,
}

fn resolve(b: Boundary) -> (RunEdit, RunEdit) {
    use Ordering::{Equal, Greater, Less};
    use RunEdit::{Keep, Promote, Strip};

    match (b.left_peak, b.right_peak, b.ordering) {
        // Tie between two peaks: one plateau, already a peak on both sides
        (true, true, Equal) => (Keep, Keep),
        (true, true, Greater) => (Keep, Strip),
        (true, true, Less) => (Strip, Keep),

        // The right side was a single plateau, now extended by a peak
        (true, false, Equal) if b.right_flat => (Keep, Promote),
        // Something higher follows on the right
        (true, false, Equal) => (Strip, Keep),
        (true, false, Greater) => (Keep, Keep),
        (true, false, Less) => (Strip, Promote),

        (false, true, Equal) if b.left_flat => (Promote, Keep),
        (false, true, Equal) => (Keep, Strip),
        (false, true, Less) => (Keep, Keep),
        (false, true, Greater) => (Promote, Strip),

        (false, false, Equal) => (Keep, Keep),
        (false, false, Greater) => (Promote, Keep),
        (false, false, Less) => (Keep, Promote),
    }
}

/// Merge two adjacent peak sets into one over the concatenated samples.
///
/// Only the plateau runs touching the shared boundary can change status, so
/// only the last sample of `left` and the first of `right` are compared.
///
/// `left` must cover the range immediately before `right`. The operation is
/// associative over such ranges, so any bracketing of an ordered sequence of
/// adjacent sets produces the same result.
pub fn merge<T: Sample>(left: PeakSet<T>, right: PeakSet<T>) -> Result<PeakSet<T>> {
    let (Some(l), Some(r)) = (left.last_sample(), right.first_sample()) else {
        return Ok(if left.is_empty() { right } else { left });
    };

    let ordering = l.order(&r).ok_or_else(|| {
        PeakError::InvariantViolation(format!(
            "boundary samples {:?} and {:?} are unordered",
            l, r
        ))
    })?;

    let boundary = Boundary {
        ordering,
        left_peak: left.is_last_sample_peak(),
        right_peak: right.is_first_sample_peak(),
        left_flat: left.peak_count() == 0,
        right_flat: right.peak_count() == 0,
    };
    let (left_edit, right_edit) = resolve(boundary);

    log::trace!(
        "merge boundary {:?} | {:?}: {:?} -> left {:?}, right {:?}",
        l,
        r,
        boundary,
        left_edit,
        right_edit
    );

    // Only a stripped run needs measuring; a promoted side is one plateau
    let left_stripped = match left_edit {
        RunEdit::Strip => left.trailing_peak_run(),
        _ => 0,
    };
    let right_stripped = match right_edit {
        RunEdit::Strip => right.leading_peak_run(),
        _ => 0,
    };
    let (mut samples, mut peaks) = left.into_parts();
    let (right_samples, right_peaks) = right.into_parts();
    let offset = samples.len();

    match left_edit {
        RunEdit::Keep => {}
        RunEdit::Strip => peaks.truncate(peaks.len() - left_stripped),
        RunEdit::Promote => {
            if peaks.is_empty() {
                peaks.extend(0..offset);
            }
        }
    }

    let right_start = peaks.len();
    match right_edit {
        RunEdit::Keep | RunEdit::Strip => {
            peaks.extend(right_peaks[right_stripped..].iter().map(|&p| p + offset))
        }
        RunEdit::Promote => {
            if right_peaks.is_empty() {
                peaks.extend(offset..offset + right_samples.len());
            } else {
                peaks.extend(right_peaks.iter().map(|&p| p + offset));
            }
        }
    }
    debug_assert!(peaks[right_start..].iter().all(|&p| p >= offset));

    samples.extend(right_samples);
    Ok(PeakSet::from_parts(samples, peaks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{classify_cluster, detect};

    fn cluster(samples: &[i32]) -> PeakSet<i32> {
        classify_cluster(samples).unwrap()
    }

    fn merged(left: &[i32], right: &[i32]) -> Vec<usize> {
        merge(cluster(left), cluster(right)).unwrap().peaks().to_vec()
    }

    #[test]
    fn test_both_peaks() {
        // Equal boundary samples
        assert_eq!(merged(&[1, 2, 3], &[3, 2, 1]), vec![2, 3]);
        // Left sample greater
        assert_eq!(merged(&[1, 2, 3], &[2, 2, 1]), vec![2]);
        // Right sample greater
        assert_eq!(merged(&[1, 2, 2], &[3, 2, 1]), vec![3]);
    }

    #[test]
    fn test_neither_peak() {
        assert_eq!(merged(&[1, 2, 2], &[2, 3, 1]), vec![4]);
        assert_eq!(merged(&[1, 3, 2], &[1, 3, 1]), vec![1, 4]);
        assert_eq!(merged(&[1, 3, 1], &[2, 3, 1]), vec![1, 4]);
    }

    #[test]
    fn test_left_peak_only() {
        assert_eq!(merged(&[1, 2, 3], &[3, 4, 1]), vec![4]);
        assert_eq!(merged(&[1, 2, 4], &[3, 4, 1]), vec![2, 4]);
        assert_eq!(merged(&[1, 2, 3], &[4, 5, 1]), vec![4]);
    }

    #[test]
    fn test_right_peak_only() {
        assert_eq!(merged(&[1, 4, 3], &[3, 2, 1]), vec![1]);
        assert_eq!(merged(&[1, 5, 4], &[3, 2, 1]), vec![1]);
        assert_eq!(merged(&[1, 4, 3], &[4, 2, 1]), vec![1, 3]);
    }

    #[test]
    fn test_flat_sides_are_promoted() {
        assert_eq!(merged(&[2, 2, 2], &[1, 1, 1]), vec![0, 1, 2]);
        assert_eq!(merged(&[1, 1, 1], &[2, 2, 2]), vec![3, 4, 5]);
        assert_eq!(merged(&[3, 1, 2], &[2, 2, 2]), vec![0, 2, 3, 4, 5]);
        assert_eq!(merged(&[2, 2], &[2, 1, 3]), vec![0, 1, 2, 4]);
        assert!(merged(&[1, 1], &[1, 1, 1]).is_empty());
    }

    #[test]
    fn test_plateau_continues_higher() {
        // Left plateau peak meets an equal sample followed by a rise
        assert_eq!(merged(&[3, 1, 2], &[2, 3, 1]), vec![0, 4]);
        // Right plateau peak preceded by a rise
        assert_eq!(merged(&[1, 3, 2], &[2, 2, 1]), vec![1]);
    }

    #[test]
    fn test_strip_long_plateau_keeps_earlier_peaks() {
        let left = detect(&[9, 1, 5, 5, 5, 5, 5]).unwrap();
        assert_eq!(left.peaks(), &[0, 2, 3, 4, 5, 6]);
        assert_eq!(merge(left.clone(), cluster(&[6, 2])).unwrap().peaks(), &[0, 7]);
        assert_eq!(merge(left, cluster(&[7])).unwrap().peaks(), &[0, 7]);

        let right = detect(&[4, 4, 4, 4, 1, 3]).unwrap();
        assert_eq!(right.peaks(), &[0, 1, 2, 3, 5]);
        assert_eq!(merge(cluster(&[2, 5]), right).unwrap().peaks(), &[1, 7]);
    }

    #[test]
    fn test_single_sample_sides() {
        assert_eq!(merged(&[1, 2, 3], &[1]), vec![2]);
        assert_eq!(merged(&[1, 2, 1], &[5]), vec![1, 3]);
        assert_eq!(merged(&[4], &[3, 3]), vec![0]);
    }

    #[test]
    fn test_merge_with_empty() {
        let right = cluster(&[1, 2, 1]);
        let out = merge(PeakSet::empty(), right.clone()).unwrap();
        assert_eq!(out, right);
        let out = merge(right.clone(), PeakSet::empty()).unwrap();
        assert_eq!(out, right);
    }

    #[test]
    fn test_unordered_boundary() {
        let left = classify_cluster(&[1.0, 2.0, f64::NAN]);
        // The triple itself is unordered
        assert!(left.is_err());

        let left = classify_cluster(&[1.0, 2.0]).unwrap();
        let right = classify_cluster(&[f64::NAN]).unwrap();
        assert!(matches!(
            merge(left, right),
            Err(PeakError::InvariantViolation(_))
        ));
    }
}
