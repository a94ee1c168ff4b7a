//! `assign_sort` is a single out-of-place counting sort pass over one key level.
//!
//! Each point is staged into the next free slot of its bucket with `assign`, reading the range
//! in index order, and the whole range is committed with a single `finalize_assign`. Reading
//! everything before writing anything means no unread point is overwritten, and reading in index
//! order keeps the pass stable.
//!
//! ## Characteristics
//!
//!  * out-of-place (through the sequence's scratch buffer)
//!  * stable
//!  * single-threaded
//!  * msb-first building block

use crate::sort_key::SortKey;
use crate::utils::*;
use crate::MutablePointSequence;

#[inline]
pub fn assign_sort<S>(
    seq: &mut S,
    key: &SortKey,
    start: usize,
    end: usize,
    counts: &[usize; 256],
    level: usize,
) where
    S: MutablePointSequence + ?Sized,
{
    if end - start < 2 {
        return;
    }

    let mut prefix_sums = get_prefix_sums(counts);

    for i in start..end {
        let b = key.get_level(seq, i, level) as usize;
        seq.assign(i, start + prefix_sums[b]);
        prefix_sums[b] += 1;
    }

    seq.finalize_assign(start, end);
}
