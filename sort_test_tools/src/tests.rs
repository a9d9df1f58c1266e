use std::cmp::Ordering;
use std::io::{self, Write};
use std::sync::Mutex;

use sort_metrics::config::random_init_seed;
use sort_metrics::{Algorithm, AlgorithmKind, ArrayShape, Decimal, Element, Sort, SortDirection};

use crate::patterns;

#[cfg(miri)]
const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 20, 24, 33, 50, 100, 200, 400,
];

#[cfg(feature = "large_test_sizes")]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 28] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000, 10_000,
];

#[cfg(not(feature = "large_test_sizes"))]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 26] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048,
];

fn new_algorithm<S: Sort + Default>() -> Algorithm<S> {
    Algorithm::new(S::default())
}

fn get_or_init_random_seed<S: Sort + Default>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        crate::init_logging();

        // Always write the seed before doing anything to ensure reproducibility of failures.
        io::stdout()
            .write_all(
                format!(
                    "\nSeed: {seed}\nTesting: {}\n\n",
                    S::default().info().name()
                )
                .as_bytes(),
            )
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

fn expected_sorted<T: Element>(v: &[T], direction: SortDirection) -> Vec<T> {
    let mut expected = v.to_vec();
    match direction {
        SortDirection::Ascending => expected.sort_by(T::total_cmp),
        SortDirection::Descending => expected.sort_by(|a, b| b.total_cmp(a)),
    }
    expected
}

fn sort_comp_dir<T: Element, S: Sort + Default>(v: &[T], direction: SortDirection) {
    let _seed = get_or_init_random_seed::<S>();

    let is_small_test = v.len() <= 100;
    let expected = expected_sorted(v, direction);

    let mut algo = new_algorithm::<S>();
    let got = algo
        .sort(v, direction)
        .unwrap_or_else(|err| panic!("{} failed: {err}", algo.info().name()));

    assert_eq!(expected.len(), got.len());

    for (a, b) in expected.iter().zip(got.iter()) {
        if a.total_cmp(b) != Ordering::Equal {
            if is_small_test {
                eprintln!("Original: {:?}", v);
                eprintln!("Expected: {:?}", expected);
                eprintln!("Got:      {:?}", got);
            } else {
                eprintln!(
                    "Failed comparison for len {} {direction}, re-run with the printed seed.",
                    v.len()
                );
            }

            panic!("Test assertion failed!")
        }
    }
}

fn sort_comp<T: Element, S: Sort + Default>(v: &[T]) {
    sort_comp_dir::<T, S>(v, SortDirection::Ascending);
}

fn test_sizes(max_len: usize) -> impl Iterator<Item = usize> {
    TEST_SIZES.into_iter().filter(move |&len| len <= max_len)
}

fn test_impl<T: Element, S: Sort + Default>(max_len: usize, pattern_fn: impl Fn(usize) -> Vec<T>) {
    for test_size in test_sizes(max_len) {
        let test_data = pattern_fn(test_size);
        sort_comp::<T, S>(&test_data);
    }
}

#[derive(Clone, Debug)]
struct Record {
    key: u8,
    label: String,
}

// --- TESTS ---

pub fn basic<S: Sort + Default>(_max_len: usize) {
    sort_comp::<i32, S>(&[]);
    sort_comp::<i32, S>(&[5]);
    sort_comp::<i32, S>(&[2, 3]);
    sort_comp::<i32, S>(&[3, 2]);
    sort_comp::<i32, S>(&[2, 3, 6]);
    sort_comp::<i32, S>(&[2, 3, 99, 6]);
    sort_comp::<i32, S>(&[2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&[15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_seed<S: Sort + Default>(_max_len: usize) {
    let fixed_seed_a = random_init_seed();
    let fixed_seed_b = random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, patterns::random);
}

pub fn random_d4<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| patterns::random_uniform(size, 0, 3));
}

pub fn random_binary<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| patterns::random_uniform(size, 0, 1));
}

pub fn random_similar<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| patterns::random_similar(size, 0.5));
}

pub fn all_equal<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, patterns::all_equal);
}

pub fn ascending<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, patterns::ascending);
}

pub fn descending<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, patterns::descending);
}

pub fn saw_mixed<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, patterns::pipe_organ);
}

pub fn nearly_sorted<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| {
        patterns::shaped(size, ArrayShape::NearlySorted)
    });
}

pub fn reversed<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| patterns::shaped(size, ArrayShape::Reversed));
}

pub fn few_unique<S: Sort + Default>(max_len: usize) {
    test_impl::<i32, S>(max_len, |size| patterns::shaped(size, ArrayShape::FewUnique));
}

macro_rules! random_type_tests {
    ($($name:ident: $t:ty),*) => {
        $(
            paste::paste! {
                pub fn [<random_type_ $name>]<S: Sort + Default>(max_len: usize) {
                    test_impl::<$t, S>(max_len, patterns::random::<$t>);
                }
            }
        )*
    };
}

random_type_tests!(
    i8: i8,
    u8: u8,
    i16: i16,
    u16: u16,
    u32: u32,
    i64: i64,
    u64: u64,
    f32: f32,
    f64: f64,
    decimal: Decimal,
    char: char
);

pub fn int_edge<S: Sort + Default>(max_len: usize) {
    // Ensure that the sort can handle integer edge cases.
    sort_comp::<i32, S>(&[i32::MIN, i32::MAX]);
    sort_comp::<i32, S>(&[i32::MAX, i32::MIN]);
    sort_comp::<i32, S>(&[i32::MIN, -3, i32::MAX]);
    sort_comp::<i32, S>(&[i32::MIN, -3, i32::MAX, i32::MIN, 5]);

    sort_comp::<u64, S>(&[u64::MAX, u64::MIN]);
    sort_comp::<u64, S>(&[u64::MIN, u64::MAX - 3, u64::MAX, u64::MIN, 5]);

    let large_len = test_sizes(max_len).last().unwrap_or(0).saturating_sub(3);
    let mut large = patterns::random::<i32>(large_len);
    large.push(i32::MAX);
    large.push(i32::MIN);
    large.push(i32::MAX);
    sort_comp::<i32, S>(&large);
}

pub fn float_edge<S: Sort + Default>(_max_len: usize) {
    sort_comp::<f64, S>(&[0.0, -0.0]);
    sort_comp::<f64, S>(&[f64::INFINITY, 1.5, f64::NEG_INFINITY]);
    sort_comp::<f64, S>(&[f64::MAX, f64::MIN_POSITIVE, -f64::MIN_POSITIVE, f64::MIN]);
    sort_comp::<f32, S>(&[f32::EPSILON, -0.0, 0.0, -f32::EPSILON, 1e-45]);
}

pub fn descending_direction<S: Sort + Default>(max_len: usize) {
    for test_size in test_sizes(max_len) {
        let random = patterns::random::<i32>(test_size);
        sort_comp_dir::<i32, S>(&random, SortDirection::Descending);

        let few = patterns::random_uniform(test_size, 0, 3);
        sort_comp_dir::<i32, S>(&few, SortDirection::Descending);
    }

    sort_comp_dir::<i32, S>(&[1, 2, 3, 4, 5], SortDirection::Descending);
    sort_comp_dir::<char, S>(&['b', 'a', 'c'], SortDirection::Descending);
}

fn check_stability<S: Sort + Default>(lens: impl Iterator<Item = usize>, direction: SortDirection) {
    let mut algo = new_algorithm::<S>();
    let rand_vals = patterns::random_uniform(5_000, 0u8, 9);
    let mut rand_idx = 0;

    for len in lens {
        let mut counts = [0u32; 10];

        // create a vector like [(6, 1), (5, 1), (6, 2), ...],
        // where the first item of each tuple is random, but
        // the second item represents which occurrence of that
        // number this element is, i.e., the second elements
        // will occur in sorted order.
        let orig: Vec<(u8, u32)> = (0..len)
            .map(|_| {
                let n = rand_vals[rand_idx];
                rand_idx = (rand_idx + 1) % rand_vals.len();

                counts[n as usize] += 1;
                (n, counts[n as usize])
            })
            .collect();

        // Only sort on the first element, so an unstable sort
        // may mix up the counts.
        let v = algo
            .sort_by(&orig, direction, |a, b| a.0.cmp(&b.0))
            .unwrap();

        // Equal keys must keep increasing counts, whatever the key order is.
        assert!(v.windows(2).all(|w| {
            let key_order = match direction {
                SortDirection::Ascending => w[0].0.cmp(&w[1].0),
                SortDirection::Descending => w[1].0.cmp(&w[0].0),
            };
            key_order == Ordering::Less || (key_order == Ordering::Equal && w[0].1 < w[1].1)
        }));
    }
}

pub fn stability<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();

    if !S::default().info().stable {
        // It would be great to mark the test as skipped, but that isn't possible as of now.
        return;
    }

    let large_range = if cfg!(miri) { 100..110 } else { 500..510 };
    let rounds = if cfg!(miri) { 1 } else { 10 };

    for _ in 0..rounds {
        let lens = (2..55).chain(large_range.clone()).filter(|&len| len <= max_len);
        check_stability::<S>(lens, SortDirection::Ascending);
    }
}

pub fn stability_descending<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();

    if !S::default().info().stable {
        return;
    }

    check_stability::<S>(test_sizes(max_len), SortDirection::Descending);
}

pub fn idempotent<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();

    for test_size in test_sizes(max_len) {
        let input = patterns::random_uniform(test_size, -50, 50);

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let once = algo.sort(&input, direction).unwrap();
            let twice = algo.sort(&once, direction).unwrap();
            assert_eq!(once, twice);
        }
    }
}

pub fn non_destructive<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();

    for test_size in test_sizes(max_len) {
        let input = patterns::random::<i64>(test_size);
        let original = input.clone();

        let output = algo.sort(&input, SortDirection::Descending).unwrap();

        assert_eq!(input, original);
        assert_eq!(output.len(), input.len());
    }
}

pub fn counters<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();

    // Trivial inputs never touch the comparator.
    for trivial in [&[][..], &[42][..]] {
        let run = algo.run::<i32>(trivial, SortDirection::Ascending).unwrap();
        assert_eq!(run.comparisons(), 0);
        assert_eq!(run.swaps(), 0);
        assert_eq!(run.output(), trivial);
    }

    for test_size in test_sizes(max_len).filter(|&len| len >= 2) {
        let input = patterns::random::<i32>(test_size);
        let run = algo.run(&input, SortDirection::Ascending).unwrap();

        assert!(run.comparisons() > 0);
        assert_eq!(run.comparisons(), algo.comparisons());
        assert_eq!(run.swaps(), algo.swaps());
        assert_eq!(run.elapsed(), algo.elapsed());
    }
}

pub fn reinvocation<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();

    let len = test_sizes(max_len).last().unwrap_or(0);
    let input = patterns::random::<i32>(len);

    let first = algo.run(&input, SortDirection::Ascending).unwrap();

    // Counters start from zero on every call.
    let single = algo.run(&[7], SortDirection::Ascending).unwrap();
    assert_eq!(single.comparisons(), 0);
    assert_eq!(single.swaps(), 0);

    let second = algo.run(&input, SortDirection::Ascending).unwrap();
    assert_eq!(first.output(), second.output());

    if first.kind() != AlgorithmKind::Bogo {
        // Deterministic algorithms repeat the exact same work.
        assert_eq!(first.comparisons(), second.comparisons());
        assert_eq!(first.swaps(), second.swaps());
    }
}

pub fn run_result<S: Sort + Default>(max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();
    let info = algo.info();

    let len = test_sizes(max_len).filter(|&len| len <= 20).last().unwrap_or(0);
    let input = patterns::random_uniform(len, 'a', 'z');

    let run = algo.run(&input, SortDirection::Descending).unwrap();

    assert_eq!(run.kind(), info.kind);
    assert_eq!(run.name(), info.kind.name());
    assert_eq!(run.is_stable(), info.stable);
    assert_eq!(run.direction(), SortDirection::Descending);
    assert!(!run.best_case().is_empty());
    assert!(!run.average_case().is_empty());
    assert!(!run.worst_case().is_empty());
    assert!(!run.worst_case_space().is_empty());
    assert_eq!(run.output(), expected_sorted(&input, SortDirection::Descending));
    assert_eq!(info, run.kind().info());
}

pub fn sort_by<S: Sort + Default>(_max_len: usize) {
    let _seed = get_or_init_random_seed::<S>();
    let mut algo = new_algorithm::<S>();

    let input: Vec<Record> = [(3, "c"), (1, "a"), (4, "d"), (1, "b"), (5, "e")]
        .into_iter()
        .map(|(key, label)| Record {
            key,
            label: label.to_owned(),
        })
        .collect();

    let output = algo
        .sort_by(&input, SortDirection::Ascending, |a, b| a.key.cmp(&b.key))
        .unwrap();
    let keys: Vec<u8> = output.iter().map(|r| r.key).collect();
    assert_eq!(keys, [1, 1, 3, 4, 5]);
    assert!(algo.comparisons() > 0);

    let output = algo
        .sort_by(&input, SortDirection::Descending, |a, b| a.label.cmp(&b.label))
        .unwrap();
    let labels: Vec<&str> = output.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["e", "d", "c", "b", "a"]);
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl_inner {
    ($sort_impl:ty, $max_len:expr, miri_yes, $sort_name:ident) => {
        #[test]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>($max_len);
        }
    };
    ($sort_impl:ty, $max_len:expr, miri_no, $sort_name:ident) => {
        #[test]
        #[cfg(not(miri))]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>($max_len);
        }

        #[test]
        #[cfg(miri)]
        #[ignore]
        fn $sort_name() {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl {
    ($sort_impl:ty, $max_len:expr, $([$miri_use:ident, $sort_name:ident]),*) => {
        $(
            sort_test_tools::instantiate_sort_test_impl_inner!(
                $sort_impl,
                $max_len,
                $miri_use,
                $sort_name
            );
        )*
    };
}

/// Instantiates the whole suite for `$sort_impl`, testing lengths up to `$max_len`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty, $max_len:expr) => {
        sort_test_tools::instantiate_sort_test_impl!(
            $sort_impl,
            $max_len,
            [miri_no, all_equal],
            [miri_yes, ascending],
            [miri_yes, basic],
            [miri_yes, counters],
            [miri_yes, descending],
            [miri_yes, descending_direction],
            [miri_yes, few_unique],
            [miri_yes, fixed_seed],
            [miri_yes, float_edge],
            [miri_yes, idempotent],
            [miri_yes, int_edge],
            [miri_yes, nearly_sorted],
            [miri_yes, non_destructive],
            [miri_yes, pipe_organ],
            [miri_yes, random],
            [miri_no, random_binary],
            [miri_yes, random_d4],
            [miri_no, random_similar],
            [miri_no, random_type_char],
            [miri_yes, random_type_decimal],
            [miri_no, random_type_f32],
            [miri_yes, random_type_f64],
            [miri_no, random_type_i16],
            [miri_yes, random_type_i64],
            [miri_no, random_type_i8],
            [miri_no, random_type_u16],
            [miri_no, random_type_u32],
            [miri_yes, random_type_u64],
            [miri_yes, random_type_u8],
            [miri_yes, reinvocation],
            [miri_yes, reversed],
            [miri_yes, run_result],
            [miri_yes, saw_mixed],
            [miri_yes, sort_by],
            [miri_yes, stability],
            [miri_no, stability_descending]
        );
    };
    ($sort_impl:ty) => {
        sort_test_tools::instantiate_sort_tests!($sort_impl, usize::MAX);
    };
}
