//! Shared test suite for every algorithm of `sort_metrics`, see [`instantiate_sort_tests`].

pub mod patterns;
pub mod tests;

/// Routes `log` output of the library through the test harness. `RUST_LOG` picks the level.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
