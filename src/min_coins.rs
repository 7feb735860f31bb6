use log::debug;

use crate::error::{Error, Result};
use crate::solution::Solution;

/// Makes change for `amount` with the fewest coins possible, for any
/// denomination set.
///
/// Classic unbounded coin change, solved bottom-up: `min_count[s]` holds the
/// minimum number of coins forming sub-sum `s`, and `chosen[s]` records the
/// denomination used in one optimal decomposition of `s`. After tabulation
/// the chosen coins are recovered by walking back from `amount` to 0.
///
/// When several denominations reach the same minimal count for a sub-sum,
/// the table only updates on a strict improvement while scanning coins in
/// ascending order, so the first ascending denomination achieving the
/// optimum is the one recorded. The returned decomposition is therefore
/// deterministic even when multiple optima exist.
///
/// Returns [`Error::InvalidInput`] for a negative amount and
/// [`Error::NoSolution`] when no combination of the denominations sums to
/// `amount` (possible whenever the set lacks a unit coin).
///
/// # Examples
///
/// ```
/// use coinage::{find_min_coins, CANONICAL_COINS};
///
/// // Greedy would answer 2+2+2 here; DP finds 5+1.
/// let sol = find_min_coins(6, &CANONICAL_COINS).unwrap();
/// assert_eq!(sol.to_string(), "{1: 1, 5: 1}");
///
/// assert!(find_min_coins(3, &[5, 10]).is_err());
/// ```
///
/// # Complexity
///
/// O(amount × k) time and O(amount) space for k denominations. Note the
/// bound grows with the numeric magnitude of `amount`, not with any
/// combinatorial input size; that is exactly the gap the benchmark harness
/// measures against the O(k) greedy pass.
pub fn find_min_coins(amount: i64, coins: &[u64]) -> Result<Solution> {
    if amount < 0 {
        return Err(Error::invalid_input("amount must be >= 0"));
    }
    if amount == 0 {
        return Ok(Solution::new());
    }

    let amount = amount as usize;
    let mut sorted: Vec<u64> = coins.to_vec();
    sorted.sort_unstable();

    // min_count[s] = minimum coins forming sub-sum s, usize::MAX = unreachable.
    let mut min_count = vec![usize::MAX; amount + 1];
    min_count[0] = 0;
    // chosen[s] = denomination used in an optimal decomposition of s.
    let mut chosen: Vec<Option<u64>> = vec![None; amount + 1];

    for s in 1..=amount {
        for &coin in &sorted {
            let coin_us = coin as usize;
            if coin_us > s {
                // Coins are ascending, nothing further can contribute to s.
                break;
            }
            let prev = min_count[s - coin_us];
            // Strict inequality: equal candidates never overwrite, which
            // pins the reconstruction to the first ascending denomination
            // reaching the optimum.
            if prev != usize::MAX && prev + 1 < min_count[s] {
                min_count[s] = prev + 1;
                chosen[s] = Some(coin);
            }
        }
    }

    if min_count[amount] == usize::MAX {
        return Err(Error::no_solution(format!(
            "amount {amount} is unreachable with the given denominations"
        )));
    }

    let mut result = Solution::new();
    let mut cur = amount;
    while cur > 0 {
        let coin = chosen[cur].ok_or_else(|| {
            Error::reconstruction(format!("no chosen coin recorded for sub-sum {cur}"))
        })?;
        result.add(coin, 1);
        cur -= coin as usize;
    }

    debug!(
        "dp: amount={} coins={} -> {} coins used",
        amount,
        coins.len(),
        result.total_coins()
    );
    Ok(result)
}
