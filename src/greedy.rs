use log::debug;

use crate::error::{Error, Result};
use crate::solution::Solution;

/// Makes change for `amount` with the largest-denomination-first heuristic.
///
/// For each denomination in descending order, takes as many coins of that
/// denomination as fit into the remainder, then moves on. Runs in O(k) for
/// k denominations (after sorting them). Minimality is only guaranteed for
/// canonical coin systems; for arbitrary sets the result can use more coins
/// than the optimum, and if the set has no unit denomination the remainder
/// may simply be left uncovered.
///
/// Returns [`Error::InvalidInput`] if `amount` is negative.
///
/// # Examples
///
/// ```
/// use coinage::{find_coins_greedy, CANONICAL_COINS};
///
/// let sol = find_coins_greedy(113, &CANONICAL_COINS).unwrap();
/// assert_eq!(sol.to_string(), "{1: 1, 2: 1, 10: 1, 50: 2}");
/// assert_eq!(sol.total_coins(), 5);
///
/// // Greedy is not optimal for every set: {1,3,4} and amount 6.
/// let sol = find_coins_greedy(6, &[1, 3, 4]).unwrap();
/// assert_eq!(sol.total_coins(), 3); // 4 + 1 + 1, optimum is 3 + 3
/// ```
pub fn find_coins_greedy(amount: i64, coins: &[u64]) -> Result<Solution> {
    if amount < 0 {
        return Err(Error::invalid_input("amount must be >= 0"));
    }

    let mut sorted: Vec<u64> = coins.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut result = Solution::new();
    let mut remaining = amount as u64;

    for &coin in &sorted {
        if remaining == 0 {
            break;
        }
        let count = remaining / coin;
        if count > 0 {
            result.add(coin, count);
            remaining -= coin * count;
        }
    }

    debug!(
        "greedy: amount={} coins={} -> {} coins used",
        amount,
        coins.len(),
        result.total_coins()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CANONICAL_COINS;

    #[test]
    fn zero_amount_yields_empty_solution() {
        let sol = find_coins_greedy(0, &CANONICAL_COINS).unwrap();
        assert!(sol.is_empty());
    }

    #[test]
    fn negative_amount_is_invalid_input() {
        assert!(matches!(
            find_coins_greedy(-1, &CANONICAL_COINS),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn canonical_decompositions() {
        let sol = find_coins_greedy(11, &CANONICAL_COINS).unwrap();
        assert_eq!(sol.count_of(10), 1);
        assert_eq!(sol.count_of(1), 1);
        assert_eq!(sol.total_coins(), 2);

        let sol = find_coins_greedy(999, &CANONICAL_COINS).unwrap();
        assert_eq!(sol.total_value(), 999);
        // 19*50 + 1*25 + 2*10 + 2*2
        assert_eq!(sol.count_of(50), 19);
        assert_eq!(sol.count_of(25), 1);
        assert_eq!(sol.count_of(10), 2);
        assert_eq!(sol.count_of(2), 2);
        assert_eq!(sol.total_coins(), 24);
    }

    #[test]
    fn unsorted_input_is_handled() {
        let sol = find_coins_greedy(31, &[1, 50, 2, 25, 5, 10]).unwrap();
        assert_eq!(sol.total_value(), 31);
        assert_eq!(sol.total_coins(), 3); // 25 + 5 + 1
    }

    #[test]
    fn set_without_unit_leaves_remainder_uncovered() {
        let sol = find_coins_greedy(13, &[5, 10]).unwrap();
        assert_eq!(sol.count_of(10), 1);
        assert_eq!(sol.total_value(), 10); // the trailing 3 cannot be placed
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = find_coins_greedy(113, &CANONICAL_COINS).unwrap();
        let b = find_coins_greedy(113, &CANONICAL_COINS).unwrap();
        assert_eq!(a, b);
    }
}
