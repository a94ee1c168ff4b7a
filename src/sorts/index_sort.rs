//! `index_sort` finishes a range with a stable comparison sort over positions, then applies the
//! resulting permutation with one staged `assign` pass and a single `finalize_assign`.
//!
//! The sorter hands ranges here once radix recursion is deep enough that going on byte by byte
//! would only peel a few points off per level.
//!
//! ## Characteristics
//!
//!  * out-of-place (through the sequence's scratch buffer)
//!  * stable
//!  * O(n log n) comparisons

use crate::sort_key::SortKey;
use crate::MutablePointSequence;

pub fn index_sort<S>(seq: &mut S, key: &SortKey, start: usize, end: usize, level: usize)
where
    S: MutablePointSequence + ?Sized,
{
    if end - start < 2 {
        return;
    }

    let mut order: Vec<usize> = (start..end).collect();
    order.sort_by(|&a, &b| key.compare(&*seq, a, b, level));

    if order.iter().enumerate().all(|(k, &src)| src == start + k) {
        return;
    }

    for (k, &src) in order.iter().enumerate() {
        seq.assign(src, start + k);
    }

    seq.finalize_assign(start, end);
}
