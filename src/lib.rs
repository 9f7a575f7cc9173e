use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Swaps the elements at positions `a` and `b`.
///
/// Panics if either index is out of bounds, every caller derives its indices from the loop bounds
/// of the slice it passes in.
#[inline]
pub fn exchange<T>(v: &mut [T], a: usize, b: usize) {
    v.swap(a, b);
}

pub mod error;
pub mod fixture;
pub mod patterns;
pub mod stable;
pub mod unstable;

pub use error::SetupError;
pub use fixture::{
    comparison_report, Algorithm, ComparisonCount, SortBench, DEFAULT_ARRAY_SIZE,
};
