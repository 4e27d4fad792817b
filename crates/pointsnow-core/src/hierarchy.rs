//! The time-step refinement hierarchy handed to the kernel.
//!
//! Level 0 is the data (reporting) interval. Levels 1.. are the kernel's
//! fallback sub-steps: when the change in state over one step at level
//! `n` exceeds level `n + 1`'s threshold, the kernel redoes that step as
//! `intervals` sub-steps of level `n + 1`, recombining the results before
//! it returns. Only level 0 is ever reported.

use smallvec::SmallVec;

use crate::error::HierarchyError;

/// One refinement level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimestepLevel {
    /// Step length in seconds.
    pub step_secs: f64,
    /// Change-magnitude threshold (mass units) that sends the kernel down
    /// to this level. `None` for level 0.
    pub threshold: Option<f64>,
    /// Number of sub-steps of this level per parent step. `None` for
    /// level 0.
    pub intervals: Option<u32>,
    /// Whether the driver reports at this level's cadence.
    pub reportable: bool,
}

impl TimestepLevel {
    /// The reporting level for data sampled every `step_secs` seconds.
    pub fn data(step_secs: f64) -> Self {
        Self {
            step_secs,
            threshold: None,
            intervals: None,
            reportable: true,
        }
    }

    /// A kernel-internal fallback level.
    pub fn fine(step_secs: f64, threshold: f64, intervals: u32) -> Self {
        Self {
            step_secs,
            threshold: Some(threshold),
            intervals: Some(intervals),
            reportable: false,
        }
    }
}

/// Ordered, immutable sequence of refinement levels.
///
/// Built once from the forcing interval and read by the kernel on every
/// call. Inline capacity covers the standard four levels.
#[derive(Clone, Debug, PartialEq)]
pub struct TimestepHierarchy {
    levels: SmallVec<[TimestepLevel; 4]>,
}

impl TimestepHierarchy {
    /// The fixed fine levels as `(step_secs, threshold, intervals)`.
    ///
    /// They do not depend on the forcing interval: whatever the reporting
    /// cadence, the kernel falls back to 1 h, 15 min, and 1 min steps.
    pub const FINE_LEVELS: [(f64, f64, u32); 3] =
        [(3600.0, 60.0, 1), (900.0, 10.0, 4), (60.0, 1.0, 15)];

    /// Standard hierarchy for data sampled every `data_step_secs` seconds.
    pub fn for_interval(data_step_secs: f64) -> Self {
        let mut levels = SmallVec::new();
        levels.push(TimestepLevel::data(data_step_secs));
        levels.extend(
            Self::FINE_LEVELS
                .iter()
                .map(|&(step, thr, n)| TimestepLevel::fine(step, thr, n)),
        );
        Self { levels }
    }

    /// Build a hierarchy from explicit levels, validating its structure.
    ///
    /// Level 0 must be the reportable data level. Every later level must
    /// be a fine level with a positive threshold and interval count. From
    /// level 2 on, each level must be strictly finer than its parent and
    /// its sub-steps must tile the parent step exactly. Level 1 subdivides
    /// the data interval by its own count and is exempt from the tiling
    /// check.
    pub fn new(levels: impl IntoIterator<Item = TimestepLevel>) -> Result<Self, HierarchyError> {
        let levels: SmallVec<[TimestepLevel; 4]> = levels.into_iter().collect();
        let data = levels.first().ok_or(HierarchyError::Empty)?;
        if !data.reportable || data.threshold.is_some() || data.intervals.is_some() {
            return Err(HierarchyError::InvalidLevel {
                level: 0,
                reason: "level 0 must be reportable with no threshold or intervals".to_string(),
            });
        }
        if levels.len() < 2 {
            return Err(HierarchyError::NoFineLevels);
        }

        for (i, lvl) in levels.iter().enumerate() {
            if !lvl.step_secs.is_finite() || lvl.step_secs <= 0.0 {
                return Err(HierarchyError::InvalidLevel {
                    level: i,
                    reason: format!("step must be finite and positive, got {}", lvl.step_secs),
                });
            }
            if i == 0 {
                continue;
            }
            if lvl.reportable {
                return Err(HierarchyError::InvalidLevel {
                    level: i,
                    reason: "only level 0 is reportable".to_string(),
                });
            }
            match lvl.threshold {
                Some(t) if t.is_finite() && t > 0.0 => {}
                other => {
                    return Err(HierarchyError::InvalidLevel {
                        level: i,
                        reason: format!("threshold must be finite and positive, got {other:?}"),
                    })
                }
            }
            let intervals = match lvl.intervals {
                Some(n) if n >= 1 => n,
                other => {
                    return Err(HierarchyError::InvalidLevel {
                        level: i,
                        reason: format!("intervals must be at least 1, got {other:?}"),
                    })
                }
            };
            if i >= 2 {
                let parent = levels[i - 1].step_secs;
                if lvl.step_secs >= parent {
                    return Err(HierarchyError::NotFiner {
                        level: i,
                        step_secs: lvl.step_secs,
                        parent_step_secs: parent,
                    });
                }
                let covered = f64::from(intervals) * lvl.step_secs;
                if (covered - parent).abs() > 1e-9 * parent {
                    return Err(HierarchyError::IntervalMismatch {
                        level: i,
                        covered_secs: covered,
                        parent_step_secs: parent,
                    });
                }
            }
        }

        Ok(Self { levels })
    }

    /// All levels, coarsest first.
    pub fn levels(&self) -> &[TimestepLevel] {
        &self.levels
    }

    /// Level `n`, if present.
    pub fn level(&self, n: usize) -> Option<&TimestepLevel> {
        self.levels.get(n)
    }

    /// The reporting level.
    pub fn data_level(&self) -> &TimestepLevel {
        // Both constructors guarantee at least two levels.
        &self.levels[0]
    }

    /// Step length of the reporting level, in seconds.
    pub fn data_step_secs(&self) -> f64 {
        self.data_level().step_secs
    }

    /// The kernel-internal fallback levels, coarsest first.
    pub fn fine_levels(&self) -> &[TimestepLevel] {
        &self.levels[1..]
    }

    /// Number of levels including level 0.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; a hierarchy has at least two levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_hierarchy_matches_model_constants() {
        let h = TimestepHierarchy::for_interval(3600.0);
        assert_eq!(h.len(), 4);
        assert_eq!(h.data_step_secs(), 3600.0);
        assert!(h.data_level().reportable);
        assert_eq!(h.data_level().threshold, None);

        let fine: Vec<_> = h
            .fine_levels()
            .iter()
            .map(|l| (l.step_secs, l.threshold.unwrap(), l.intervals.unwrap()))
            .collect();
        assert_eq!(fine, TimestepHierarchy::FINE_LEVELS.to_vec());
        assert!(h.fine_levels().iter().all(|l| !l.reportable));
    }

    #[test]
    fn fine_levels_ignore_data_interval() {
        let a = TimestepHierarchy::for_interval(900.0);
        let b = TimestepHierarchy::for_interval(3.0 * 3600.0);
        assert_eq!(a.fine_levels(), b.fine_levels());
        assert_eq!(b.data_step_secs(), 10_800.0);
    }

    #[test]
    fn standard_hierarchy_validates() {
        let std = TimestepHierarchy::for_interval(3600.0);
        let rebuilt = TimestepHierarchy::new(std.levels().iter().copied()).unwrap();
        assert_eq!(rebuilt, std);
    }

    #[test]
    fn empty_hierarchy_rejected() {
        assert_eq!(TimestepHierarchy::new([]), Err(HierarchyError::Empty));
    }

    #[test]
    fn data_level_alone_rejected() {
        assert_eq!(
            TimestepHierarchy::new([TimestepLevel::data(3600.0)]),
            Err(HierarchyError::NoFineLevels)
        );
    }

    #[test]
    fn coarser_fine_level_rejected() {
        let levels = [
            TimestepLevel::data(3600.0),
            TimestepLevel::fine(900.0, 10.0, 4),
            TimestepLevel::fine(1800.0, 1.0, 1),
        ];
        match TimestepHierarchy::new(levels) {
            Err(HierarchyError::NotFiner { level: 2, .. }) => {}
            other => panic!("expected NotFiner, got {other:?}"),
        }
    }

    #[test]
    fn untiled_fine_level_rejected() {
        let levels = [
            TimestepLevel::data(3600.0),
            TimestepLevel::fine(3600.0, 60.0, 1),
            TimestepLevel::fine(900.0, 10.0, 3),
        ];
        match TimestepHierarchy::new(levels) {
            Err(HierarchyError::IntervalMismatch { level: 2, .. }) => {}
            other => panic!("expected IntervalMismatch, got {other:?}"),
        }
    }

    #[test]
    fn reportable_fine_level_rejected() {
        let mut fine = TimestepLevel::fine(900.0, 10.0, 4);
        fine.reportable = true;
        match TimestepHierarchy::new([TimestepLevel::data(3600.0), fine]) {
            Err(HierarchyError::InvalidLevel { level: 1, .. }) => {}
            other => panic!("expected InvalidLevel, got {other:?}"),
        }
    }

    #[test]
    fn nan_threshold_rejected() {
        let levels = [
            TimestepLevel::data(3600.0),
            TimestepLevel::fine(3600.0, f64::NAN, 1),
        ];
        match TimestepHierarchy::new(levels) {
            Err(HierarchyError::InvalidLevel { level: 1, .. }) => {}
            other => panic!("expected InvalidLevel, got {other:?}"),
        }
    }
}
