use crate::error::{PeakError, Result};
use crate::levels::PeakSource;
use crate::sample::Sample;

/// Materialize the peaks of `source` as a dense sequence of `length` samples.
///
/// Every root position holding a peak gets its root value, every other
/// position gets [`Sample::ZERO`]. For a [`Level`](crate::Level) the peaks are
/// projected to the root first.
///
/// # Example
/// ```
/// use peakdetect::{detect, inflate};
///
/// let peaks = detect(&[1, 1, 1]).unwrap();
/// assert_eq!(inflate(&peaks, 3).unwrap(), vec![0, 0, 0]);
/// ```
pub fn inflate<'a, 'r: 'a, T: Sample + 'r>(
    source: impl Into<PeakSource<'a, 'r, T>>,
    length: usize,
) -> Result<Vec<T>> {
    let mut out = vec![T::ZERO; length];
    inflate_into(source, &mut out)?;
    Ok(out)
}

/// Write the peaks of `source` into `out` at their root positions.
///
/// Positions that are not peaks are left as they are. Nothing is written when
/// the peaks do not fit.
pub fn inflate_into<'a, 'r: 'a, T: Sample + 'r>(
    source: impl Into<PeakSource<'a, 'r, T>>,
    out: &mut [T],
) -> Result<()> {
    let source = source.into();
    let length = out.len();
    let peaks = source.peak_set().peak_count();
    if peaks > length {
        return Err(PeakError::PeakCountExceedsLength { peaks, length });
    }

    let positions = source.root_peaks();
    if let Some(&index) = positions.iter().find(|&&index| index >= length) {
        return Err(PeakError::PeakOutOfRange { index, length });
    }

    let root = source.root_samples();
    for index in positions {
        out[index] = root[index];
    }
    Ok(())
}
