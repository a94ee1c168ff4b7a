//! # bkd-point-sort
//!
//! bkd-point-sort orders packed multi-dimensional points the way a block K-d tree builder needs
//! them: by the bytes of their index dimensions, then by doc id. It sorts in place over any
//! storage that implements `MutablePointSequence`, so points can live in plain vectors,
//! off-heap buffers or memory-mapped files.
//!
//! ## Usage
//!
//! ```
//! use bkd_point_sort::{BkdConfig, Point, PointArray, PointSort};
//!
//! let config = BkdConfig::with_defaults(1, 1, 1).unwrap();
//! let mut points = PointArray::new(vec![
//!     Point::new(vec![3], 10),
//!     Point::new(vec![1], 20),
//!     Point::new(vec![2], 30),
//!     Point::new(vec![1], 5),
//! ]);
//!
//! points.sort_points(&config).unwrap();
//!
//! let docs: Vec<u32> = points.points().iter().map(|p| p.doc).collect();
//! assert_eq!(docs, vec![5, 20, 30, 10]);
//! ```
//!
//! For a sub-range, a declared sequence length, or a custom insertion-sort cut-over, use the
//! builder:
//!
//! ```
//! use bkd_point_sort::{BkdConfig, Point, PointArray, PointSort};
//!
//! let config = BkdConfig::new(2, 1, 2, 512, false).unwrap();
//! let mut points = PointArray::new(vec![
//!     Point::new(vec![9, 9, 0, 0], 1),
//!     Point::new(vec![5, 0, 1, 1], 2),
//!     Point::new(vec![1, 0, 2, 2], 3),
//! ]);
//!
//! points
//!     .point_sort_builder(&config)
//!     .with_range(1, 3)
//!     .with_fallback_threshold(16)
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(points.points()[1].doc, 3);
//! ```
//!
//! ## Algorithm
//!
//! The sort is a stable MSB radix sort. The key is the index-dimension bytes of the packed
//! value followed, when the doc id tie-break applies, by the big-endian bytes of the doc id.
//! Each level is counted, moved into buckets with one staged `assign` pass and a single
//! `finalize_assign` commit, and each bucket is then sorted on the next level. Small buckets
//! finish with an insertion sort. After eight splits a range is finished with a stable
//! comparison sort instead, which keeps recursion shallow for wide keys.
//!
//! Setting `disable_sort_doc_id` drops the doc id levels. If the docs in the range are already
//! non-decreasing they are dropped as well, as the stable sort keeps them in order anyway.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.


mod config;
mod errors;
mod point_sequence;
mod point_sequence_impl;
mod point_sort_builder;
mod sort_key;
mod sorter;
mod sorts;
mod utils;

pub use config::*;
pub use errors::{PointSortError, Result};
pub use point_sequence::MutablePointSequence;
pub use point_sequence_impl::{Point, PointArray};
pub use point_sort_builder::{PointSortBuilder, DEFAULT_FALLBACK_THRESHOLD};

/// Sorts positions `start..end` of `sequence` in place.
///
/// `sequence_length` is the number of positions the caller vouches for; the range must lie
/// within it and the sequence must be at least that long. Nothing is moved if an error is
/// returned.
pub fn sort<S>(
    config: &BkdConfig,
    sequence_length: usize,
    sequence: &mut S,
    start: usize,
    end: usize,
) -> Result<()>
where
    S: MutablePointSequence + ?Sized,
{
    PointSortBuilder::new(config, sequence)
        .with_sequence_length(sequence_length)
        .with_range(start, end)
        .sort()
}

pub trait PointSort: MutablePointSequence {
    /// Sorts the whole sequence under `config`.
    fn sort_points(&mut self, config: &BkdConfig) -> Result<()>;

    fn point_sort_builder<'a>(&'a mut self, config: &'a BkdConfig) -> PointSortBuilder<'a, Self>;
}

impl<S> PointSort for S
where
    S: MutablePointSequence,
{
    fn sort_points(&mut self, config: &BkdConfig) -> Result<()> {
        self.point_sort_builder(config).sort()
    }

    fn point_sort_builder<'a>(&'a mut self, config: &'a BkdConfig) -> PointSortBuilder<'a, Self> {
        PointSortBuilder::new(config, self)
    }
}
