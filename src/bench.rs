//! Wall-clock comparison of the two solvers.
//!
//! Purely observational: nothing here feeds back into solver outputs. Each
//! measurement runs a solver `number` times and the minimum total across
//! `repeat` runs is kept, which filters out scheduler jitter the same way
//! `timeit.repeat` does.

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::greedy::find_coins_greedy;
use crate::min_coins::find_min_coins;

/// Timings for one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchRow {
    pub amount: i64,
    pub greedy: Duration,
    pub dp: Duration,
}

impl BenchRow {
    /// Label of the faster solver. Ties go to DP, matching the strict
    /// `greedy < dp` comparison.
    pub fn faster(&self) -> &'static str {
        if self.greedy < self.dp {
            "Greedy"
        } else {
            "DP"
        }
    }
}

/// Times `number` invocations of `solver`, repeated `repeat` times, and
/// returns the minimum observed total.
pub fn bench_one<F>(solver: F, number: u32, repeat: u32) -> Duration
where
    F: Fn(),
{
    let mut best = Duration::MAX;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        for _ in 0..number.max(1) {
            solver();
        }
        best = best.min(start.elapsed());
    }
    best
}

/// Benchmarks both solvers against each amount on the given coin set.
pub fn run_bench(amounts: &[i64], coins: &[u64], number: u32, repeat: u32) -> Vec<BenchRow> {
    amounts
        .iter()
        .map(|&amount| {
            let greedy = bench_one(
                || {
                    let _ = black_box(find_coins_greedy(black_box(amount), black_box(coins)));
                },
                number,
                repeat,
            );
            let dp = bench_one(
                || {
                    let _ = black_box(find_min_coins(black_box(amount), black_box(coins)));
                },
                number,
                repeat,
            );
            debug!(
                "bench: amount={} greedy={:?} dp={:?}",
                amount, greedy, dp
            );
            BenchRow { amount, greedy, dp }
        })
        .collect()
}

/// Renders the comparison as an aligned markdown table.
pub fn render_table(rows: &[BenchRow]) -> String {
    let mut out = String::new();
    out.push_str("| Amount | Greedy (s) | DP (s) | Faster |\n");
    out.push_str("|------:|-----------:|-------:|:------:|\n");
    for row in rows {
        let _ = writeln!(
            out,
            "| {:6} | {:10.6} | {:7.6} | {:^6} |",
            row.amount,
            row.greedy.as_secs_f64(),
            row.dp.as_secs_f64(),
            row.faster()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CANONICAL_COINS;

    #[test]
    fn bench_one_measures_nonzero_time() {
        let d = bench_one(
            || {
                let _ = find_min_coins(113, &CANONICAL_COINS);
            },
            10,
            2,
        );
        assert!(d > Duration::ZERO);
        assert!(d < Duration::MAX);
    }

    #[test]
    fn run_bench_produces_one_row_per_amount() {
        let rows = run_bench(&[11, 113], &CANONICAL_COINS, 5, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, 11);
        assert_eq!(rows[1].amount, 113);
    }

    #[test]
    fn faster_column_follows_strict_comparison() {
        let row = BenchRow {
            amount: 10,
            greedy: Duration::from_micros(1),
            dp: Duration::from_micros(2),
        };
        assert_eq!(row.faster(), "Greedy");

        let tie = BenchRow {
            amount: 10,
            greedy: Duration::from_micros(2),
            dp: Duration::from_micros(2),
        };
        assert_eq!(tie.faster(), "DP");
    }

    #[test]
    fn table_has_header_and_rows() {
        let rows = [BenchRow {
            amount: 113,
            greedy: Duration::from_micros(3),
            dp: Duration::from_micros(90),
        }];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Amount"));
        assert!(lines[2].contains("113"));
        assert!(lines[2].contains("Greedy"));
    }
}
