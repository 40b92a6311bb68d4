use crate::detection::PeakSet;
use crate::sample::Sample;

/// One pass of peak detection over the peaks of the previous pass.
///
/// The level's samples are the values at the previous level's peak positions.
/// Two translation tables map every reduced index back: `to_prior` into the
/// previous level's samples, `to_root` into the original samples. Each level
/// owns its tables and borrows the root samples read-only.
///
/// Depth 0 is the root itself seen as a level, with identity translations.
#[derive(Debug, Clone, PartialEq)]
pub struct Level<'r, T> {
    root: &'r [T],
    depth: usize,
    set: PeakSet<T>,
    to_prior: Vec<usize>,
    to_root: Vec<usize>,
}

impl<'r, T: Sample> Level<'r, T> {
    pub(crate) fn new(
        root: &'r [T],
        depth: usize,
        set: PeakSet<T>,
        to_prior: Vec<usize>,
        to_root: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(set.sample_count(), to_prior.len());
        debug_assert_eq!(set.sample_count(), to_root.len());
        Self {
            root,
            depth,
            set,
            to_prior,
            to_root,
        }
    }

    /// View a root peak set as the level at depth 0.
    pub(crate) fn root_view(root: &'r [T], set: PeakSet<T>) -> Self {
        let identity: Vec<usize> = (0..set.sample_count()).collect();
        Self::new(root, 0, set, identity.clone(), identity)
    }

    /// Number of detection passes above the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The original samples every index eventually maps back to.
    pub fn root(&self) -> &'r [T] {
        self.root
    }

    /// Peak set over this level's reduced samples.
    pub fn peak_set(&self) -> &PeakSet<T> {
        &self.set
    }

    pub fn samples(&self) -> &[T] {
        self.set.samples()
    }

    /// Peaks as indices into [`samples`](Self::samples).
    pub fn peaks(&self) -> &[usize] {
        self.set.peaks()
    }

    pub fn peak_count(&self) -> usize {
        self.set.peak_count()
    }

    /// Reduced index to index in the previous level's samples.
    pub fn to_prior(&self) -> &[usize] {
        &self.to_prior
    }

    /// Reduced index to index in the root samples.
    pub fn to_root(&self) -> &[usize] {
        &self.to_root
    }

    /// Peaks of this level as indices into the previous level's samples.
    pub fn prior_peaks(&self) -> Vec<usize> {
        self.peaks().iter().map(|&p| self.to_prior[p]).collect()
    }

    /// Peaks of this level as indices into the root samples.
    pub fn root_peaks(&self) -> Vec<usize> {
        self.peaks().iter().map(|&p| self.to_root[p]).collect()
    }
}

/// Anything the next level can be detected from: a root peak set or a level.
#[derive(Debug, Clone, Copy)]
pub enum PeakSource<'a, 'r: 'a, T> {
    Root(&'r PeakSet<T>),
    Level(&'a Level<'r, T>),
}

impl<'r, T> From<&'r PeakSet<T>> for PeakSource<'r, 'r, T> {
    fn from(set: &'r PeakSet<T>) -> Self {
        PeakSource::Root(set)
    }
}

impl<'a, 'r: 'a, T> From<&'a Level<'r, T>> for PeakSource<'a, 'r, T> {
    fn from(level: &'a Level<'r, T>) -> Self {
        PeakSource::Level(level)
    }
}

impl<'a, 'r: 'a, T: Sample> PeakSource<'a, 'r, T> {
    /// The original samples.
    pub fn root_samples(&self) -> &'r [T] {
        match *self {
            PeakSource::Root(set) => set.samples(),
            PeakSource::Level(level) => level.root(),
        }
    }

    /// Peak set at this source's own depth.
    pub fn peak_set(&self) -> &'a PeakSet<T> {
        match *self {
            PeakSource::Root(set) => set,
            PeakSource::Level(level) => level.peak_set(),
        }
    }

    /// Map an index into [`peak_set`](Self::peak_set) samples to the root.
    pub fn root_index(&self, index: usize) -> usize {
        match *self {
            PeakSource::Root(_) => index,
            PeakSource::Level(level) => level.to_root[index],
        }
    }

    pub fn depth(&self) -> usize {
        match *self {
            PeakSource::Root(_) => 0,
            PeakSource::Level(level) => level.depth(),
        }
    }

    /// Peaks of this source as indices into the root samples.
    pub fn root_peaks(&self) -> Vec<usize> {
        self.peak_set()
            .peaks()
            .iter()
            .map(|&p| self.root_index(p))
            .collect()
    }
}
