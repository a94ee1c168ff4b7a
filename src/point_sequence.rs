/// A mutable, randomly indexable collection of points that can be sorted in place.
///
/// Positions run over `0..size()`. The sorter never owns points; it only reads them and moves
/// them around through `swap` and the two-phase `assign` / `finalize_assign` protocol.
///
/// ## Two-phase moves
///
/// `assign(from, to)` records that the point currently at `from` should end up at `to`
/// without touching the live sequence. `finalize_assign(from, to)` then copies every staged
/// point with a destination in `from..to` back into place. The sorter stages exactly one
/// point per destination of a contiguous range and commits that same range once, so an
/// implementation can keep its scratch space addressed by destination index.
pub trait MutablePointSequence {
    /// Number of valid positions.
    fn size(&self) -> usize;

    /// Packed value of the point at position `i`.
    fn value_at(&self, i: usize) -> &[u8];

    /// Byte `k` of the packed value at position `i`.
    #[inline]
    fn byte_at(&self, i: usize, k: usize) -> u8 {
        self.value_at(i)[k]
    }

    fn doc_at(&self, i: usize) -> u32;

    /// Exchanges the points at `i` and `j`. `i == j` is a no-op.
    fn swap(&mut self, i: usize, j: usize);

    /// Stages the point currently at `from` to be written to `to` on the next commit.
    fn assign(&mut self, from: usize, to: usize);

    /// Commits the staged points for destinations `from..to`.
    fn finalize_assign(&mut self, from: usize, to: usize);
}
