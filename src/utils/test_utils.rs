use crate::{BkdConfig, MutablePointSequence, Point, PointArray};
use nanorand::{Rng, WyRand};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Random points with docs drawn from `0..doc_range`.
pub fn gen_points(config: &BkdConfig, n: usize, doc_range: u32) -> Vec<Point> {
    let packed_len = config.packed_bytes_length();

    (0..n)
        .into_par_iter()
        .map_init(WyRand::new, |rng, _| {
            let packed_value: Vec<u8> = (0..packed_len).map(|_| rng.generate::<u8>()).collect();
            Point::new(packed_value, rng.generate_range(0..doc_range))
        })
        .collect()
}

/// Points whose values only use `distinct` different byte patterns, to force long runs of
/// duplicate keys.
pub fn gen_duplicate_heavy_points(config: &BkdConfig, n: usize, distinct: u8) -> Vec<Point> {
    let packed_len = config.packed_bytes_length();
    let mut rng = WyRand::new();

    (0..n)
        .map(|_| {
            let b = rng.generate_range(0..distinct);
            Point::new(vec![b; packed_len], rng.generate_range(0..n as u32))
        })
        .collect()
}

pub fn index_key<'a>(config: &BkdConfig, point: &'a Point) -> &'a [u8] {
    &point.packed_value[..config.packed_index_bytes_length()]
}

/// Asserts that `after` is a valid result of sorting `before[start..end]` under `config`.
pub fn validate_sort(config: &BkdConfig, before: &[Point], after: &[Point], start: usize, end: usize) {
    assert_eq!(before.len(), after.len());
    assert_eq!(&before[..start], &after[..start], "points before the range moved");
    assert_eq!(&before[end..], &after[end..], "points after the range moved");

    for (i, w) in after[start..end].windows(2).enumerate() {
        match index_key(config, &w[0]).cmp(index_key(config, &w[1])) {
            Ordering::Greater => panic!("keys out of order at {}: {:?} > {:?}", start + i, w[0], w[1]),
            Ordering::Equal if !config.disable_sort_doc_id() => assert!(
                w[0].doc <= w[1].doc,
                "docs out of order at {}: {:?} > {:?}",
                start + i,
                w[0],
                w[1]
            ),
            _ => {}
        }
    }

    let mut expected = before[start..end].to_vec();
    let mut actual = after[start..end].to_vec();
    expected.sort_unstable_by(|a, b| a.packed_value.cmp(&b.packed_value).then(a.doc.cmp(&b.doc)));
    actual.sort_unstable_by(|a, b| a.packed_value.cmp(&b.packed_value).then(a.doc.cmp(&b.doc)));
    assert_eq!(expected, actual, "sorted range is not a permutation of the input");
}

/// Wraps a `PointArray` and checks the two-phase move protocol as it is used.
///
/// Every commit must cover exactly the destinations staged since the previous commit, each
/// staged once.
pub struct AuditingSequence {
    inner: PointArray,
    staged: Vec<usize>,
    pub swaps: usize,
    pub assigns: usize,
    pub commits: Vec<(usize, usize)>,
}

impl AuditingSequence {
    pub fn new(inner: PointArray) -> Self {
        Self {
            inner,
            staged: Vec::new(),
            swaps: 0,
            assigns: 0,
            commits: Vec::new(),
        }
    }

    pub fn inner(&self) -> &PointArray {
        &self.inner
    }

    pub fn into_inner(self) -> PointArray {
        assert!(self.staged.is_empty(), "staged moves were never committed");
        self.inner
    }
}

impl MutablePointSequence for AuditingSequence {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn value_at(&self, i: usize) -> &[u8] {
        self.inner.value_at(i)
    }

    fn byte_at(&self, i: usize, k: usize) -> u8 {
        let b = self.inner.byte_at(i, k);
        assert_eq!(b, self.inner.value_at(i)[k]);
        b
    }

    fn doc_at(&self, i: usize) -> u32 {
        self.inner.doc_at(i)
    }

    fn swap(&mut self, i: usize, j: usize) {
        assert!(self.staged.is_empty(), "swap while moves are staged");
        self.swaps += 1;
        self.inner.swap(i, j);
    }

    fn assign(&mut self, from: usize, to: usize) {
        self.assigns += 1;
        self.staged.push(to);
        self.inner.assign(from, to);
    }

    fn finalize_assign(&mut self, from: usize, to: usize) {
        let mut staged = std::mem::take(&mut self.staged);
        staged.sort_unstable();
        let expected: Vec<usize> = (from..to).collect();
        assert_eq!(staged, expected, "commit does not match staged destinations");

        self.commits.push((from, to));
        self.inner.finalize_assign(from, to);
    }
}
