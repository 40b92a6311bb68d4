use std::cmp::Ordering;

use super::PeakSet;
use crate::error::{PeakError, Result};
use crate::sample::Sample;

type Outcome = Option<&'static [usize]>;

/// Peaks of a triple `(a, b, c)`, indexed by `[ord(a, b)][ord(b, c)][ord(c, a)]`
/// with `Less = 0`, `Equal = 1`, `Greater = 2`.
///
/// `None` marks the 14 combinations no total order can produce.
const TRIPLE_PEAKS: [[[Outcome; 3]; 3]; 3] = [
    // a < b
    [
        // b < c: only c > a is consistent, strict increase
        [None, None, Some(&[2])],
        // b == c: a < b == c, plateau on the right
        [None, None, Some(&[1, 2])],
        // b > c: interior maximum whatever c vs a
        [Some(&[1]), Some(&[1]), Some(&[1])],
    ],
    // a == b
    [
        [None, None, Some(&[2])],
        [None, Some(&[]), None],
        [Some(&[0, 1]), None, None],
    ],
    // a > b
    [
        // b < c: valley, both ends dominate
        [Some(&[0, 2]), Some(&[0, 2]), Some(&[0, 2])],
        [Some(&[0]), None, None],
        [Some(&[0]), None, None],
    ],
];

const fn ordinal(ordering: Ordering) -> usize {
    match ordering {
        Ordering::Less => 0,
        Ordering::Equal => 1,
        Ordering::Greater => 2,
    }
}

fn order<T: Sample>(x: T, y: T) -> Result<Ordering> {
    x.order(&y).ok_or_else(|| {
        PeakError::InvariantViolation(format!("samples {:?} and {:?} are unordered", x, y))
    })
}

/// Local peak indices of a two-sample cluster.
pub fn classify_pair<T: Sample>(a: T, b: T) -> Result<&'static [usize]> {
    Ok(match order(a, b)? {
        Ordering::Greater => &[0],
        Ordering::Less => &[1],
        Ordering::Equal => &[],
    })
}

/// Local peak indices of a three-sample cluster.
///
/// Fails with [`PeakError::InvariantViolation`] if the three pairwise
/// orderings contradict each other, which only a broken comparison can cause.
pub fn classify_triple<T: Sample>(a: T, b: T, c: T) -> Result<&'static [usize]> {
    let ab = order(a, b)?;
    let bc = order(b, c)?;
    let ca = order(c, a)?;
    TRIPLE_PEAKS[ordinal(ab)][ordinal(bc)][ordinal(ca)].ok_or_else(|| {
        PeakError::InvariantViolation(format!(
            "impossible ordering {:?}/{:?}/{:?} for cluster ({:?}, {:?}, {:?})",
            ab, bc, ca, a, b, c
        ))
    })
}

/// Classify a cluster of 1 to 3 samples in isolation.
///
/// Samples whose neighborhood reaches the cluster edge are classified as if
/// the edge ended the sequence; [`merge`](super::merge) corrects them.
/// A single sample is never a peak on its own; its status depends on the
/// neighbors it is merged with.
pub fn classify_cluster<T: Sample>(cluster: &[T]) -> Result<PeakSet<T>> {
    let peaks: &[usize] = match *cluster {
        [_] => &[],
        [a, b] => classify_pair(a, b)?,
        [a, b, c] => classify_triple(a, b, c)?,
        _ => return Err(PeakError::InvalidClusterSize(cluster.len())),
    };
    Ok(PeakSet::from_parts(cluster.to_vec(), peaks.to_vec()))
}
