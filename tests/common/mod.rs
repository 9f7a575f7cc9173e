use std::env;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::sync::Mutex;

use classic_sorts::{patterns, Sort};

// The quadratic sorts make anything much larger than this slow in debug builds.
const TEST_SIZES: [usize; 24] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 500, 2_048,
];

fn get_or_init_random_seed<S: Sort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of failures.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", <S as Sort>::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

fn sort_comp<T: Ord + Clone + Debug, S: Sort>(v: &mut [T]) {
    let seed = get_or_init_random_seed::<S>();

    let original = v.to_vec();
    let mut expected = v.to_vec();
    expected.sort();

    <S as Sort>::sort(v);

    // Equal to the stdlib result means sorted, same length and a permutation of the input.
    if expected.as_slice() == v {
        return;
    }

    if v.len() <= 100 {
        eprintln!("Original: {original:?}");
        eprintln!("Expected: {expected:?}");
        eprintln!("Got:      {v:?}");
    } else if env::var("WRITE_LARGE_FAILURE").is_ok() {
        let name = <S as Sort>::name();
        let dump_name = format!("{name}_failure_{seed}.txt");
        fs::write(
            &dump_name,
            format!("original: {original:?}\nexpected: {expected:?}\ngot: {v:?}\n"),
        )
        .unwrap();

        eprintln!("Failed comparison of {} elements, see {dump_name}", v.len());
    } else {
        eprintln!(
            "Failed comparison of {} elements, re-run with WRITE_LARGE_FAILURE set to dump them.",
            v.len()
        );
    }

    panic!("{} did not sort seed {seed} input correctly", <S as Sort>::name());
}

fn test_impl<T: Ord + Clone + Debug, S: Sort>(pattern_fn: impl Fn(usize) -> Vec<T>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<T, S>(test_data.as_mut_slice());
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<i32, S>(&mut [0]);
    sort_comp::<i32, S>(&mut [1, 1]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [3, 2]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn scenarios<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let cases: [(Vec<i32>, Vec<i32>); 6] = [
        (vec![], vec![]),
        (vec![5], vec![5]),
        (vec![3, 1, 2], vec![1, 2, 3]),
        (vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5]),
        (vec![2, 2, 1, 2], vec![1, 2, 2, 2]),
        (vec![1, 2, 2, 2], vec![1, 2, 2, 2]),
    ];

    for (mut input, expected) in cases {
        <S as Sort>::sort(&mut input);
        assert_eq!(input, expected);
    }
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_str<S: Sort>() {
    test_impl::<String, S>(|size| {
        patterns::random(size)
            .iter()
            .map(|val| format!("{:010}", val.saturating_abs()))
            .collect()
    });
}

pub fn random_narrow<S: Sort>() {
    // Few distinct values, lots of duplicates.
    for max_val in [3, 15, 255] {
        test_impl::<i32, S>(|size| patterns::random_uniform(size, 0..=max_val));
    }
}

pub fn random_dataset<S: Sort>() {
    // The distribution the benchmark fixture generates.
    test_impl::<i32, S>(|size| {
        let mut rng = patterns::new_seed();
        patterns::generate_random_sequence(size, &mut rng).unwrap()
    });
}

pub fn random_binary<S: Sort>() {
    test_impl::<i32, S>(|size| patterns::random_uniform(size, 0..=1));
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn idempotent<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for test_size in TEST_SIZES {
        let mut v = patterns::random_uniform(test_size, 0..=16);
        <S as Sort>::sort(&mut v);

        let sorted = v.clone();
        <S as Sort>::sort(&mut v);
        assert_eq!(v, sorted);
    }
}

pub fn deterministic<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for test_size in TEST_SIZES {
        let input = patterns::random(test_size);

        let mut a = input.clone();
        let mut b = input;
        <S as Sort>::sort(&mut a);
        <S as Sort>::sort(&mut b);
        assert_eq!(a, b);
    }
}

pub fn stability<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if <S as Sort>::name().contains("unstable") {
        // It would be great to mark the test as skipped, but that isn't possible as of now.
        return;
    }

    let rand_vals = patterns::random_uniform(5_000, 0..=9);
    let mut rand_idx = 0;

    for len in (2..55).chain(500..505) {
        let mut counts = [0; 10];

        // Create a vector like [(6, 1), (5, 1), (6, 2), ...], where the second item of each tuple
        // counts the occurrences of the first item so far, so equal first items have ascending
        // second items.
        let orig: Vec<(i32, i32)> = (0..len)
            .map(|_| {
                let n = rand_vals[rand_idx];
                rand_idx = (rand_idx + 1) % rand_vals.len();

                counts[n as usize] += 1;
                (n, counts[n as usize])
            })
            .collect();

        let mut v = orig.clone();
        // Only sort on the first element, so an unstable sort may mix up the counts.
        <S as Sort>::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

pub fn sort_vs_sort_by<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Ensure that sort and sort_by produce the same result.
    let mut input_normal = [800, 3, -801, 5, -801, -3, 60, 200, 50, 7, 10];
    let expected = [-801, -801, -3, 3, 5, 7, 10, 50, 60, 200, 800];

    let mut input_sort_by = input_normal.to_vec();

    <S as Sort>::sort(&mut input_normal);
    <S as Sort>::sort_by(&mut input_sort_by, |a, b| a.cmp(b));

    assert_eq!(input_normal, expected);
    assert_eq!(input_sort_by, expected);
}

pub fn sort_by_reverse<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for test_size in TEST_SIZES {
        let mut v = patterns::random_uniform(test_size, 0..=64);
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        <S as Sort>::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, expected);
    }
}

pub fn int_edge<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3, i32::MAX, i32::MIN, 5]);
    sort_comp::<i32, S>(&mut [0, i32::MAX, -1, i32::MAX, i32::MIN, 1]);

    let mut large = patterns::random(500);
    large.extend([i32::MAX, i32::MIN, i32::MAX]);
    sort_comp::<i32, S>(&mut large);
}

macro_rules! instantiate_sort_test_impl {
    ($sort_impl:ty, $($sort_name:ident),*) => {
        $(
            #[test]
            fn $sort_name() {
                crate::common::$sort_name::<$sort_impl>();
            }
        )*
    };
}

macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        instantiate_sort_test_impl!(
            $sort_impl,
            all_equal,
            ascending,
            basic,
            descending,
            deterministic,
            fixed_seed,
            idempotent,
            int_edge,
            pipe_organ,
            random,
            random_binary,
            random_dataset,
            random_narrow,
            random_str,
            saw_mixed,
            scenarios,
            sort_by_reverse,
            sort_vs_sort_by,
            stability
        );
    };
}
