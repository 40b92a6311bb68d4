use crate::sample::Sample;

/// A sample sequence together with the indices of its peaks.
///
/// Peaks are unique and ascending, and an index is a peak iff it dominates its
/// plateau-extended neighborhood within `samples` as a whole. Values are
/// immutable; merging two sets builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSet<T> {
    samples: Vec<T>,
    peaks: Vec<usize>,
}

impl<T: Sample> PeakSet<T> {
    pub(crate) fn from_parts(samples: Vec<T>, peaks: Vec<usize>) -> Self {
        debug_assert!(peaks.last().is_none_or(|&p| p < samples.len()));
        Self { samples, peaks }
    }

    /// A set over no samples.
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            peaks: Vec::new(),
        }
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the sample at `index` is a peak.
    pub fn is_peak(&self, index: usize) -> bool {
        self.peaks.binary_search(&index).is_ok()
    }

    /// Values at the peak positions, in order.
    ///
    /// This is the reduced sequence the next level is detected on.
    pub fn peak_values(&self) -> Vec<T> {
        self.peaks.iter().map(|&p| self.samples[p]).collect()
    }

    /// One flag per sample, `true` at peak positions.
    pub fn peak_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.samples.len()];
        for &p in &self.peaks {
            mask[p] = true;
        }
        mask
    }

    /// Copy of the samples with every non-peak set to zero.
    pub fn inflate(&self) -> Vec<T> {
        let mut out = vec![T::ZERO; self.samples.len()];
        for &p in &self.peaks {
            out[p] = self.samples[p];
        }
        out
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.samples, self.peaks)
    }

    pub(crate) fn first_sample(&self) -> Option<T> {
        self.samples.first().copied()
    }

    pub(crate) fn last_sample(&self) -> Option<T> {
        self.samples.last().copied()
    }

    pub(crate) fn is_first_sample_peak(&self) -> bool {
        self.peaks.first() == Some(&0)
    }

    pub(crate) fn is_last_sample_peak(&self) -> bool {
        !self.samples.is_empty() && self.peaks.last() == Some(&(self.samples.len() - 1))
    }

    /// Number of peaks at indices `0, 1, 2, ...`, i.e. the peak plateau
    /// starting the sequence. Adjacent peaks always hold equal values.
    pub(crate) fn leading_peak_run(&self) -> usize {
        self.peaks
            .iter()
            .enumerate()
            .take_while(|&(i, &p)| i == p)
            .count()
    }

    /// Number of peaks forming a contiguous run that ends at the last sample.
    pub(crate) fn trailing_peak_run(&self) -> usize {
        self.peaks
            .iter()
            .rev()
            .zip((0..self.samples.len()).rev())
            .take_while(|&(&p, i)| p == i)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(samples: &[i32], peaks: &[usize]) -> PeakSet<i32> {
        PeakSet::from_parts(samples.to_vec(), peaks.to_vec())
    }

    #[test]
    fn test_boundary_queries() {
        let p = set(&[3, 1, 2, 2], &[0, 2, 3]);
        assert!(p.is_first_sample_peak());
        assert!(p.is_last_sample_peak());
        assert_eq!(p.first_sample(), Some(3));
        assert_eq!(p.last_sample(), Some(2));

        let empty = PeakSet::<i32>::empty();
        assert!(!empty.is_first_sample_peak());
        assert!(!empty.is_last_sample_peak());
        assert_eq!(empty.first_sample(), None);
    }

    #[test]
    fn test_peak_runs() {
        let p = set(&[2, 2, 1, 5, 5, 5], &[0, 1, 3, 4, 5]);
        assert_eq!(p.leading_peak_run(), 2);
        assert_eq!(p.trailing_peak_run(), 3);

        let inner = set(&[1, 3, 3, 2], &[1, 2]);
        assert_eq!(inner.leading_peak_run(), 0);
        assert_eq!(inner.trailing_peak_run(), 0);

        let flat = set(&[4, 4, 4], &[]);
        assert_eq!(flat.leading_peak_run(), 0);
        assert_eq!(flat.trailing_peak_run(), 0);

        assert_eq!(PeakSet::<i32>::empty().trailing_peak_run(), 0);
    }

    #[test]
    fn test_peak_values_and_mask() {
        let p = set(&[1, 8, 3, 5, 7, 2], &[1, 4]);
        assert_eq!(p.peak_values(), vec![8, 7]);
        assert_eq!(p.peak_mask(), vec![false, true, false, false, true, false]);
        assert!(p.is_peak(4));
        assert!(!p.is_peak(3));
    }

    #[test]
    fn test_inflate_self() {
        let p = set(&[1, 8, 3, 5, 7, 2], &[1, 4]);
        assert_eq!(p.inflate(), vec![0, 8, 0, 0, 7, 0]);
    }
}
