use crate::config::PeakConfig;
use crate::detection::{PeakSet, detect_with};
use crate::error::Result;
use crate::levels::aggregator::{budgeted, climb, next_level};
use crate::levels::{Level, PeakSource};
use crate::sample::Sample;

/// Peak detector bound to a [`PeakConfig`].
///
/// The free functions ([`detect`](crate::detect),
/// [`detect_to_fixed_point`](crate::detect_to_fixed_point), ...) use the
/// default configuration; this type applies the configured fold strategy and
/// level budget to every call.
///
/// # Example
/// ```
/// use peakdetect::PeakDetector;
/// use peakdetect::config::{FoldStrategy, PeakConfig};
///
/// let mut config = PeakConfig::default();
/// config.detection.fold = FoldStrategy::Balanced;
/// config.levels.max_iterations = Some(1);
///
/// let detector = PeakDetector::new(config);
/// let samples = [1, 8, 3, 5, 7, 2, 3, 6, 9];
/// let (level, completed) = detector.levels(&samples).unwrap();
/// assert_eq!(level.root_peaks(), vec![1, 8]);
/// assert!(!completed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PeakDetector {
    config: PeakConfig,
}

impl PeakDetector {
    pub fn new(config: PeakConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PeakConfig {
        &self.config
    }

    /// Peaks of `samples`.
    pub fn detect<T: Sample>(&self, samples: &[T]) -> Result<PeakSet<T>> {
        detect_with(samples, self.config.detection.fold)
    }

    /// The level above `prior`.
    pub fn next_level<'a, 'r: 'a, T: Sample + 'r>(
        &self,
        prior: impl Into<PeakSource<'a, 'r, T>>,
    ) -> Result<Level<'r, T>> {
        next_level(prior.into(), self.config.detection.fold)
    }

    /// Run levels up to the configured budget, or to the fixed point when no
    /// budget is set.
    ///
    /// The flag tells whether a level without peaks was reached.
    pub fn levels<'r, T: Sample>(&self, samples: &'r [T]) -> Result<(Level<'r, T>, bool)> {
        let fold = self.config.detection.fold;
        match self.config.levels.max_iterations {
            Some(max_iterations) => budgeted(max_iterations, samples, fold),
            None => climb(samples, None, fold).map(|climb| (climb.top, true)),
        }
    }

    /// Every level from depth 1, stopping at the configured budget or the
    /// fixed point.
    ///
    /// Empty when the budget is zero.
    pub fn hierarchy<'r, T: Sample>(&self, samples: &'r [T]) -> Result<Vec<Level<'r, T>>> {
        let fold = self.config.detection.fold;
        match self.config.levels.max_iterations {
            Some(0) => Ok(Vec::new()),
            limit => climb(samples, limit, fold).map(|climb| climb.into_levels()),
        }
    }

    /// Same levels as [`hierarchy`](Self::hierarchy), built on a root peak set
    /// that was already detected.
    pub fn hierarchy_above<'r, T: Sample>(
        &self,
        root: &'r PeakSet<T>,
    ) -> Result<Vec<Level<'r, T>>> {
        let limit = self.config.levels.max_iterations;
        let mut levels: Vec<Level<'r, T>> = Vec::new();
        while limit.is_none_or(|limit| levels.len() < limit) {
            let next = match levels.last() {
                None => self.next_level(root)?,
                Some(top) if top.peak_count() > 0 => self.next_level(top)?,
                Some(_) => break,
            };
            levels.push(next);
        }
        Ok(levels)
    }
}
