//! Shell sort with the `3h + 1` gap sequence.

use std::cmp::Ordering;

use crate::exchange;

sort_impl!("shell_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Returns the ascending gap sequence `1, 4, 13, 40, ...` used for a slice of length `len`.
///
/// The sequence has `max(1, floor(log3(len)) - 1)` entries, and is empty for `len < 2` since
/// there is nothing to sort.
pub fn intervals(len: usize) -> Vec<usize> {
    if len < 2 {
        return Vec::new();
    }

    let count = len.ilog(3).saturating_sub(1).max(1) as usize;

    let mut gaps = Vec::with_capacity(count);
    gaps.push(1);
    for k in 1..count {
        gaps.push(3 * gaps[k - 1] + 1);
    }

    gaps
}

fn shell_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for gap in intervals(len).into_iter().rev() {
        // Insertion sort each of the `gap` interleaved sub-sequences starting at `offset`.
        for offset in 0..gap {
            for j in ((offset + gap)..len).step_by(gap) {
                let mut i = j;
                while i >= gap && is_less(&v[i], &v[i - gap]) {
                    exchange(v, i, i - gap);
                    i -= gap;
                }
            }
        }
    }
}
