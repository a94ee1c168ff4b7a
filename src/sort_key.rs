use crate::errors::{PointSortError, Result};
use crate::{BkdConfig, MutablePointSequence};
use std::cmp::Ordering;

/// The radix key a point is sorted by.
///
/// Levels `0..index_bytes` are the index-dimension bytes of the packed value. When doc ids take
/// part in ordering, they follow as `doc_bytes` big-endian levels, so a plain byte-wise sort also
/// applies the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    index_bytes: usize,
    doc_bytes: usize,
}

impl SortKey {
    pub fn new(index_bytes: usize, doc_bytes: usize) -> Self {
        Self {
            index_bytes,
            doc_bytes,
        }
    }

    /// Scans `start..end` once, without mutating it, to validate every packed value length
    /// and to decide how many doc id bytes the key needs.
    ///
    /// The sort is stable, so docs that are already non-decreasing need no tie-break levels.
    pub fn for_range<S>(config: &BkdConfig, seq: &S, start: usize, end: usize) -> Result<Self>
    where
        S: MutablePointSequence + ?Sized,
    {
        let packed_len = config.packed_bytes_length();
        let track_docs = !config.disable_sort_doc_id();
        let mut docs_sorted = true;
        let mut prev_doc = 0u32;
        let mut max_doc = 0u32;

        for i in start..end {
            let len = seq.value_at(i).len();
            if len != packed_len {
                return Err(PointSortError::ContractViolation {
                    position: i,
                    reason: format!(
                        "packed value has {} bytes, expected {}",
                        len, packed_len
                    ),
                });
            }

            if track_docs {
                let doc = seq.doc_at(i);
                if doc < prev_doc {
                    docs_sorted = false;
                }
                prev_doc = doc;
                max_doc = max_doc.max(doc);
            }
        }

        let doc_bytes = if track_docs && !docs_sorted {
            doc_bytes_required(max_doc)
        } else {
            0
        };

        Ok(Self::new(config.packed_index_bytes_length(), doc_bytes))
    }

    /// Total number of levels in the key.
    #[inline]
    pub fn levels(&self) -> usize {
        self.index_bytes + self.doc_bytes
    }

    #[inline]
    pub fn index_bytes(&self) -> usize {
        self.index_bytes
    }

    #[inline]
    pub fn doc_bytes(&self) -> usize {
        self.doc_bytes
    }

    #[inline]
    pub fn get_level<S>(&self, seq: &S, i: usize, level: usize) -> u8
    where
        S: MutablePointSequence + ?Sized,
    {
        if level < self.index_bytes {
            seq.byte_at(i, level)
        } else {
            let shift = (self.levels() - 1 - level) * 8;
            (seq.doc_at(i) >> shift) as u8
        }
    }

    /// Compares the points at `i` and `j`, assuming all levels before `from_level` are equal.
    #[inline]
    pub fn compare<S>(&self, seq: &S, i: usize, j: usize, from_level: usize) -> Ordering
    where
        S: MutablePointSequence + ?Sized,
    {
        if from_level < self.index_bytes {
            let a = &seq.value_at(i)[from_level..self.index_bytes];
            let b = &seq.value_at(j)[from_level..self.index_bytes];

            match a.cmp(b) {
                Ordering::Equal => {}
                o => return o,
            }
        }

        if self.doc_bytes > 0 {
            seq.doc_at(i).cmp(&seq.doc_at(j))
        } else {
            Ordering::Equal
        }
    }
}

/// Smallest number of bytes that can hold `max_doc`, never less than one.
#[inline]
pub fn doc_bytes_required(max_doc: u32) -> usize {
    let bits = (u32::BITS - max_doc.leading_zeros()) as usize;
    bits.div_ceil(8).max(1)
}
