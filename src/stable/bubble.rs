//! Bubble sort, without the early exit on a pass that performed no exchange.

use std::cmp::Ordering;

use crate::exchange;

sort_impl!("bubble_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // After the pass ending at `end` the largest element of `v[..=end]` sits at `end`.
    for end in (1..len).rev() {
        for i in 0..end {
            if is_less(&v[i + 1], &v[i]) {
                exchange(v, i, i + 1);
            }
        }
    }
}
