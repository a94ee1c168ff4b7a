use crate::errors::{PointSortError, Result};
use crate::sort_key::SortKey;
use crate::sorter::Sorter;
use crate::{BkdConfig, MutablePointSequence};
use log::debug;

/// Buckets at or below this many points are finished with an insertion sort, unless the leaf
/// size is smaller.
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 128;

pub struct PointSortBuilder<'a, S: ?Sized> {
    config: &'a BkdConfig,
    sequence: &'a mut S,
    sequence_length: usize,
    start: usize,
    end: usize,
    fallback_threshold: usize,
}

impl<'a, S> PointSortBuilder<'a, S>
where
    S: MutablePointSequence + ?Sized,
{
    pub(crate) fn new(config: &'a BkdConfig, sequence: &'a mut S) -> Self {
        let len = sequence.size();

        Self {
            config,
            sequence,
            sequence_length: len,
            start: 0,
            end: len,
            fallback_threshold: config
                .max_points_in_leaf_node()
                .min(DEFAULT_FALLBACK_THRESHOLD),
        }
    }

    /// Sorts only positions `start..end`. Everything outside is left untouched.
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;

        self
    }

    /// Number of positions the caller vouches for. Must not exceed the sequence's own size.
    pub fn with_sequence_length(mut self, sequence_length: usize) -> Self {
        self.sequence_length = sequence_length;

        self
    }

    pub fn with_fallback_threshold(mut self, fallback_threshold: usize) -> Self {
        self.fallback_threshold = fallback_threshold;

        self
    }

    fn validate(&self) -> Result<()> {
        if self.fallback_threshold == 0 {
            return Err(PointSortError::invalid_config(
                "fallback_threshold",
                "must be > 0, got 0",
            ));
        }

        if self.start > self.end || self.end > self.sequence_length {
            return Err(PointSortError::InvalidRange {
                start: self.start,
                end: self.end,
                sequence_length: self.sequence_length,
            });
        }

        let size = self.sequence.size();
        if self.sequence_length > size {
            return Err(PointSortError::ContractViolation {
                position: size,
                reason: format!(
                    "sequence has {} positions, expected at least {}",
                    size, self.sequence_length
                ),
            });
        }

        Ok(())
    }

    pub fn sort(self) -> Result<()> {
        self.validate()?;

        // By definition, this is already sorted
        if self.end - self.start <= 1 {
            return Ok(());
        }

        let key = SortKey::for_range(self.config, &*self.sequence, self.start, self.end)?;

        debug!(
            "sorting points {}..{}: {} index bytes, {} doc bytes, fallback at {}",
            self.start,
            self.end,
            key.index_bytes(),
            key.doc_bytes(),
            self.fallback_threshold
        );

        Sorter::new(key, self.fallback_threshold).sort(self.sequence, self.start, self.end);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PointSortError;
    use crate::utils::test_utils::{gen_points, validate_sort};
    use crate::{BkdConfig, Point, PointArray, PointSort};

    #[test]
    pub fn test_default_threshold_follows_leaf_size() {
        let config = BkdConfig::new(1, 1, 1, 4, false).unwrap();
        let mut seq = PointArray::default();

        assert_eq!(seq.point_sort_builder(&config).fallback_threshold, 4);

        let config = BkdConfig::with_defaults(1, 1, 1).unwrap();
        assert_eq!(seq.point_sort_builder(&config).fallback_threshold, 128);
    }

    #[test]
    pub fn test_rejects_zero_threshold() {
        let config = BkdConfig::with_defaults(1, 1, 1).unwrap();
        let mut seq = PointArray::new(vec![Point::new(vec![2], 0), Point::new(vec![1], 1)]);

        let err = seq
            .point_sort_builder(&config)
            .with_fallback_threshold(0)
            .sort()
            .unwrap_err();

        assert!(matches!(
            err,
            PointSortError::InvalidConfig {
                parameter: "fallback_threshold",
                ..
            }
        ));
    }

    #[test]
    pub fn test_rejects_bad_ranges_without_mutation() {
        let config = BkdConfig::with_defaults(1, 1, 1).unwrap();
        let points = vec![
            Point::new(vec![3], 0),
            Point::new(vec![2], 1),
            Point::new(vec![1], 2),
        ];
        let mut seq = PointArray::new(points.clone());

        for (start, end) in [(2, 1), (0, 4), (4, 4)] {
            let err = seq
                .point_sort_builder(&config)
                .with_range(start, end)
                .sort()
                .unwrap_err();

            assert_eq!(
                err,
                PointSortError::InvalidRange {
                    start,
                    end,
                    sequence_length: 3
                }
            );
        }

        assert_eq!(seq.points(), &points[..]);
    }

    #[test]
    pub fn test_rejects_sequence_shorter_than_declared() {
        let config = BkdConfig::with_defaults(1, 1, 1).unwrap();
        let mut seq = PointArray::new(vec![Point::new(vec![3], 0), Point::new(vec![2], 1)]);

        let err = seq
            .point_sort_builder(&config)
            .with_sequence_length(5)
            .with_range(0, 2)
            .sort()
            .unwrap_err();

        assert!(matches!(
            err,
            PointSortError::ContractViolation { position: 2, .. }
        ));
    }

    #[test]
    pub fn test_sorts_sub_range_with_small_threshold() {
        let config = BkdConfig::new(2, 1, 4, 512, false).unwrap();
        let points = gen_points(&config, 3_000, 50);
        let mut seq = PointArray::new(points.clone());

        seq.point_sort_builder(&config)
            .with_range(100, 2_900)
            .with_fallback_threshold(2)
            .sort()
            .unwrap();

        validate_sort(&config, &points, seq.points(), 100, 2_900);
    }
}
