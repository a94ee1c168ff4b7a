use crate::MutablePointSequence;
use std::mem;

const UNSTAGED: usize = usize::MAX;

/// A packed multi-dimensional value and the document it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub packed_value: Vec<u8>,
    pub doc: u32,
}

impl Point {
    pub fn new(packed_value: impl Into<Vec<u8>>, doc: u32) -> Self {
        Self {
            packed_value: packed_value.into(),
            doc,
        }
    }
}

/// In-memory `MutablePointSequence` over a `Vec<Point>`.
///
/// `assign` records the source position for each destination; points themselves only move on
/// `finalize_assign`. The scratch buffer is allocated on the first staged move.
#[derive(Debug, Clone, Default)]
pub struct PointArray {
    points: Vec<Point>,
    temp: Option<Vec<usize>>,
}

impl PointArray {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, temp: None }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for PointArray {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl MutablePointSequence for PointArray {
    #[inline]
    fn size(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn value_at(&self, i: usize) -> &[u8] {
        &self.points[i].packed_value
    }

    #[inline]
    fn byte_at(&self, i: usize, k: usize) -> u8 {
        self.points[i].packed_value[k]
    }

    #[inline]
    fn doc_at(&self, i: usize) -> u32 {
        self.points[i].doc
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j);
    }

    #[inline]
    fn assign(&mut self, from: usize, to: usize) {
        let len = self.points.len();
        let temp = self.temp.get_or_insert_with(|| vec![UNSTAGED; len]);
        temp[to] = from;
    }

    fn finalize_assign(&mut self, from: usize, to: usize) {
        let Some(temp) = self.temp.as_mut() else {
            return;
        };

        let mut snapshot: Vec<Option<Point>> = self.points[from..to]
            .iter_mut()
            .map(|p| Some(mem::take(p)))
            .collect();

        for dst in from..to {
            let src = mem::replace(&mut temp[dst], UNSTAGED);
            assert_ne!(
                src, UNSTAGED,
                "finalize_assign over a destination with no staged point"
            );

            self.points[dst] = if (from..to).contains(&src) {
                snapshot[src - from]
                    .take()
                    .expect("point staged for more than one destination")
            } else {
                // Outside the committed range, so still in place
                self.points[src].clone()
            };
        }
    }
}
