//! Quicksort with a midpoint pivot and Hoare partition.

use std::cmp::Ordering;

use crate::exchange;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let (left_len, right_start) = hoare_partition(v, is_less);

        // Elements in `v[left_len..right_start]`, if any, are equal to the pivot and already in
        // their final position.
        let (left, rest) = v.split_at_mut(left_len);
        let right = &mut rest[(right_start - left_len)..];

        // Recurse into the shorter side and continue with the longer one, which bounds the
        // recursion depth to `log2(len)` regardless of how unbalanced the partitions are.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around the element in its middle and returns `(left_len, right_start)`.
///
/// Afterwards no element of `v[..left_len]` is greater than the pivot, no element of
/// `v[right_start..]` is less than it, and `left_len <= right_start`. Both sides are strictly
/// shorter than `v`.
///
/// The caller has to guarantee that `v.len() >= 2`.
fn hoare_partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    // The pivot is referred to by position, and the position follows it whenever it gets
    // exchanged. This keeps `T` free of a `Clone` bound.
    let mut pivot_pos = (len - 1) / 2;

    // `i` and `j` are inclusive cursors. The first pass stops both at the pivot at the latest,
    // every later pass stops at the latest at the elements exchanged in the pass before.
    let mut i = 0;
    let mut j = len - 1;
    loop {
        while is_less(&v[i], &v[pivot_pos]) {
            i += 1;
        }
        while is_less(&v[pivot_pos], &v[j]) {
            j -= 1;
        }

        if i <= j {
            exchange(v, i, j);
            if pivot_pos == i {
                pivot_pos = j;
            } else if pivot_pos == j {
                pivot_pos = i;
            }

            i += 1;
            if j == 0 {
                // The left side is empty.
                return (0, i);
            }
            j -= 1;
        }

        if i > j {
            break;
        }
    }

    (j + 1, i)
}
