pub mod bench;
pub mod error;
pub mod greedy;
pub mod min_coins;
pub mod solution;

pub use bench::{bench_one, render_table, run_bench, BenchRow};
pub use error::{Error, Result};
pub use greedy::find_coins_greedy;
pub use min_coins::find_min_coins;
pub use solution::Solution;

/// The default denomination set, descending.
///
/// This is a canonical coin system: greedy and DP agree on the total coin
/// count for every amount, though not necessarily on the decomposition.
pub const CANONICAL_COINS: [u64; 6] = [50, 25, 10, 5, 2, 1];
