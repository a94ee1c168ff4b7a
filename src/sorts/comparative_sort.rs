//! `comparative_sort` is a stable insertion sort used once a bucket is small enough that
//! counting every byte value costs more than comparing points directly.
//!
//! It only moves points with `swap`, so it works on any `MutablePointSequence`.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * stable
//!  * single-threaded

use crate::sort_key::SortKey;
use crate::MutablePointSequence;
use std::cmp::Ordering;

pub fn comparative_sort<S>(seq: &mut S, key: &SortKey, start: usize, end: usize, level: usize)
where
    S: MutablePointSequence + ?Sized,
{
    for i in (start + 1)..end {
        let mut j = i;
        while j > start && key.compare(seq, j - 1, j, level) == Ordering::Greater {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}
