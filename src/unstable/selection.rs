//! Selection sort.

use std::cmp::Ordering;

use crate::exchange;

sort_impl!("selection_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Returns the index of the smallest element in `v[start..]`, the first one if there are several.
///
/// Returns `start` if `start >= v.len()`.
pub fn min_index<T: Ord>(v: &[T], start: usize) -> usize {
    min_index_by(v, start, &mut |a: &T, b: &T| a.lt(b))
}

fn min_index_by<T, F>(v: &[T], start: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_pos = start;
    for pos in (start + 1)..v.len() {
        if is_less(&v[pos], &v[min_pos]) {
            min_pos = pos;
        }
    }

    min_pos
}

fn selection_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let k = min_index_by(v, i, &mut is_less);
        if i != k {
            exchange(v, i, k);
        }
    }
}
