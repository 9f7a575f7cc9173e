//! Insertion sort by adjacent exchanges.

use std::cmp::Ordering;

use crate::exchange;

sort_impl!("insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for j in 1..len {
        // `v[..j]` is sorted, move `v[j]` left until its left neighbour is not greater.
        let mut i = j;
        while i > 0 && is_less(&v[i], &v[i - 1]) {
            exchange(v, i, i - 1);
            i -= 1;
        }
    }
}
