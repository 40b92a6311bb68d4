use super::{Level, PeakSource};
use crate::config::FoldStrategy;
use crate::detection::{PeakSet, detect_with};
use crate::error::Result;
use crate::sample::Sample;

/// Detect the next level above `prior`, which may be a root [`PeakSet`] or a
/// [`Level`].
///
/// # Example
/// ```
/// use peakdetect::{detect, detect_next_level};
///
/// let samples = [1, 8, 3, 5, 7, 2, 3, 6, 9];
/// let root = detect(&samples).unwrap();
/// let level = detect_next_level(&root).unwrap();
/// assert_eq!(level.samples(), &[8, 7, 9]);
/// assert_eq!(level.root_peaks(), vec![1, 8]);
/// ```
pub fn detect_next_level<'a, 'r: 'a, T: Sample + 'r>(
    prior: impl Into<PeakSource<'a, 'r, T>>,
) -> Result<Level<'r, T>> {
    next_level(prior.into(), FoldStrategy::Sequential)
}

/// Run levels until one has no peaks and return that level.
///
/// Each level has fewer peaks than samples (adjacent peaks are equal, and an
/// all-equal sequence has none), so this always terminates.
///
/// The returned level has depth 1 or more, even when the root has no peaks.
pub fn detect_to_fixed_point<T: Sample>(samples: &[T]) -> Result<Level<'_, T>> {
    climb(samples, None, FoldStrategy::Sequential).map(|climb| climb.top)
}

/// Run at most `max_iterations` levels.
///
/// The flag is `true` when the returned level has no peaks, i.e. the fixed
/// point was reached within the budget. A budget of zero runs no level: the
/// root is returned as the level at depth 0 and the flag is `false`.
pub fn detect_with_budget<T: Sample>(
    max_iterations: usize,
    samples: &[T],
) -> Result<(Level<'_, T>, bool)> {
    budgeted(max_iterations, samples, FoldStrategy::Sequential)
}

/// Every level from depth 1 up to the fixed point.
pub fn detect_levels<T: Sample>(samples: &[T]) -> Result<Vec<Level<'_, T>>> {
    climb(samples, None, FoldStrategy::Sequential).map(Climb::into_levels)
}

pub(crate) fn next_level<'a, 'r: 'a, T: Sample>(
    prior: PeakSource<'a, 'r, T>,
    strategy: FoldStrategy,
) -> Result<Level<'r, T>> {
    let prior_to_root = match prior {
        PeakSource::Root(_) => None,
        PeakSource::Level(level) => Some(level.to_root()),
    };
    aggregate(
        prior.root_samples(),
        prior.peak_set(),
        prior_to_root,
        prior.depth() + 1,
        strategy,
    )
}

/// Detect the level above `prior`, whose sample indices map to the root
/// through `prior_to_root` (identity when `None`).
fn aggregate<'r, T: Sample>(
    root: &'r [T],
    prior: &PeakSet<T>,
    prior_to_root: Option<&[usize]>,
    depth: usize,
    strategy: FoldStrategy,
) -> Result<Level<'r, T>> {
    let reduced = detect_with(&prior.peak_values(), strategy)?;
    let to_prior = prior.peaks().to_vec();
    let to_root = match prior_to_root {
        Some(table) => to_prior.iter().map(|&i| table[i]).collect(),
        None => to_prior.clone(),
    };

    log::debug!(
        "level {}: {} peaks in {} reduced samples",
        depth,
        reduced.peak_count(),
        reduced.sample_count()
    );

    Ok(Level::new(root, depth, reduced, to_prior, to_root))
}

pub(crate) fn budgeted<T: Sample>(
    max_iterations: usize,
    samples: &[T],
    strategy: FoldStrategy,
) -> Result<(Level<'_, T>, bool)> {
    if max_iterations == 0 {
        let root = detect_with(samples, strategy)?;
        return Ok((Level::root_view(samples, root), false));
    }
    let climb = climb(samples, Some(max_iterations), strategy)?;
    let completed = climb.top.peak_count() == 0;
    Ok((climb.top, completed))
}

/// Levels produced by one run, the highest kept apart.
pub(crate) struct Climb<'r, T> {
    pub(crate) below: Vec<Level<'r, T>>,
    pub(crate) top: Level<'r, T>,
}

impl<'r, T> Climb<'r, T> {
    pub(crate) fn into_levels(self) -> Vec<Level<'r, T>> {
        let mut levels = self.below;
        levels.push(self.top);
        levels
    }
}

/// Run levels 1, 2, ... until a level has no peaks or `limit` levels exist.
///
/// Level 1 is always run; a `limit` of zero is treated as one.
pub(crate) fn climb<T: Sample>(
    samples: &[T],
    limit: Option<usize>,
    strategy: FoldStrategy,
) -> Result<Climb<'_, T>> {
    let root = detect_with(samples, strategy)?;
    let mut top = aggregate(samples, &root, None, 1, strategy)?;
    let mut below = Vec::new();

    while top.peak_count() > 0 && limit.is_none_or(|limit| top.depth() < limit) {
        let next = next_level(PeakSource::Level(&top), strategy)?;
        below.push(std::mem::replace(&mut top, next));
    }

    log::debug!(
        "{} levels over {} samples, fixed point {}",
        top.depth(),
        samples.len(),
        if top.peak_count() == 0 {
            "reached"
        } else {
            "not reached"
        }
    );
    Ok(Climb { below, top })
}
