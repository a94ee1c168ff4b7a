use crate::sort_key::SortKey;
use crate::sorts::*;
use crate::utils::*;
use crate::MutablePointSequence;

/// Number of bucket splits a range may recurse through before it is finished with a
/// comparison sort. Keeps stack depth independent of key width.
pub const LEVEL_THRESHOLD: usize = 8;

/// Recursive MSB radix sort over a `SortKey`.
///
/// Each call counts one key level, moves the points into their buckets with a single staged
/// pass, then recurses into every bucket on the next level. Buckets at or below
/// `fallback_threshold` points are finished with an insertion sort instead, and ranges more
/// than `LEVEL_THRESHOLD` splits deep with an index sort.
pub struct Sorter {
    key: SortKey,
    fallback_threshold: usize,
}

impl Sorter {
    pub fn new(key: SortKey, fallback_threshold: usize) -> Self {
        Self {
            key,
            fallback_threshold,
        }
    }

    #[inline]
    pub fn sort<S>(&self, seq: &mut S, start: usize, end: usize)
    where
        S: MutablePointSequence + ?Sized,
    {
        self.handle_range(seq, start, end, 0, 0);
    }

    fn handle_range<S>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
        mut level: usize,
        depth: usize,
    )
    where
        S: MutablePointSequence + ?Sized,
    {
        loop {
            let len = end - start;

            // A fully compared range is in its final order: the sort is stable
            if len <= 1 || level >= self.key.levels() {
                return;
            }

            if len <= self.fallback_threshold {
                #[cfg(feature = "work_profiles")]
                log::trace!("({}) COMPARATIVE {}..{}", level, start, end);

                comparative_sort(seq, &self.key, start, end, level);
                return;
            }

            if depth >= LEVEL_THRESHOLD {
                #[cfg(feature = "work_profiles")]
                log::trace!("({}) INDEX {}..{}", level, start, end);

                index_sort(seq, &self.key, start, end, level);
                return;
            }

            let (counts, already_sorted) = get_counts(seq, &self.key, start, end, level);

            if is_homogenous_bucket(&counts) {
                level += 1;
                continue;
            }

            if !already_sorted {
                #[cfg(feature = "work_profiles")]
                log::trace!("({}) ASSIGN {}..{}", level, start, end);

                assign_sort(seq, &self.key, start, end, &counts, level);
            }

            self.director(seq, start, &counts, level + 1, depth + 1);
            return;
        }
    }

    #[inline]
    fn director<S>(
        &self,
        seq: &mut S,
        start: usize,
        counts: &[usize; 256],
        level: usize,
        depth: usize,
    ) where
        S: MutablePointSequence + ?Sized,
    {
        let mut offset = start;

        for &c in counts.iter() {
            if c > 1 {
                self.handle_range(seq, offset, offset + c, level, depth);
            }

            offset += c;
        }
    }
}
