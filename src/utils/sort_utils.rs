use crate::sort_key::SortKey;
use crate::MutablePointSequence;

#[inline]
pub fn get_prefix_sums(counts: &[usize; 256]) -> [usize; 256] {
    let mut sums = [0usize; 256];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// Counts the byte at `level` for every point in `start..end`, and reports whether those bytes
/// are already in non-decreasing order.
#[inline]
pub fn get_counts<S>(
    seq: &S,
    key: &SortKey,
    start: usize,
    end: usize,
    level: usize,
) -> ([usize; 256], bool)
where
    S: MutablePointSequence + ?Sized,
{
    #[cfg(feature = "work_profiles")]
    log::trace!("({}) COUNT {}..{}", level, start, end);

    let mut already_sorted = true;
    let mut continue_from = end;
    let mut counts_1 = [0usize; 256];
    let mut last = 0usize;

    for i in start..end {
        let b = key.get_level(seq, i, level) as usize;
        counts_1[b] += 1;

        if b < last {
            continue_from = i + 1;
            already_sorted = false;
            break;
        }

        last = b;
    }

    if continue_from == end {
        return (counts_1, already_sorted);
    }

    let mut counts_2 = [0usize; 256];
    let mut counts_3 = [0usize; 256];
    let mut counts_4 = [0usize; 256];
    let mut i = continue_from;

    while i + 4 <= end {
        let a = key.get_level(seq, i, level) as usize;
        let b = key.get_level(seq, i + 1, level) as usize;
        let c = key.get_level(seq, i + 2, level) as usize;
        let d = key.get_level(seq, i + 3, level) as usize;

        counts_1[a] += 1;
        counts_2[b] += 1;
        counts_3[c] += 1;
        counts_4[d] += 1;

        i += 4;
    }

    while i < end {
        let b = key.get_level(seq, i, level) as usize;
        counts_1[b] += 1;
        i += 1;
    }

    for i in 0..256 {
        counts_1[i] += counts_2[i];
        counts_1[i] += counts_3[i];
        counts_1[i] += counts_4[i];
    }

    (counts_1, already_sorted)
}

#[inline]
pub fn is_homogenous_bucket(counts: &[usize; 256]) -> bool {
    let mut seen = false;
    for c in counts {
        if *c > 0 {
            if seen {
                return false;
            } else {
                seen = true;
            }
        }
    }

    true
}
