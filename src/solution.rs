use std::collections::BTreeMap;
use std::fmt;

/// The multiset of coins used to form a target amount.
///
/// Only denominations with a nonzero count are stored. Iteration and
/// `Display` output are always sorted by denomination ascending, regardless
/// of the order in which coins were added.
///
/// # Examples
///
/// ```
/// use coinage::Solution;
///
/// let mut sol = Solution::new();
/// sol.add(10, 1);
/// sol.add(1, 1);
/// assert_eq!(sol.total_coins(), 2);
/// assert_eq!(sol.total_value(), 11);
/// assert_eq!(sol.to_string(), "{1: 1, 10: 1}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    counts: BTreeMap<u64, u64>,
}

impl Solution {
    /// Creates an empty solution (the answer for amount 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of the given denomination.
    ///
    /// Adding a zero count is a no-op, so empty entries never appear.
    pub fn add(&mut self, denomination: u64, count: u64) {
        if count > 0 {
            *self.counts.entry(denomination).or_insert(0) += count;
        }
    }

    /// Count used for one denomination, 0 if unused.
    pub fn count_of(&self, denomination: u64) -> u64 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins across all denominations.
    pub fn total_coins(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of denomination times count, i.e. the amount this solution forms.
    pub fn total_value(&self) -> u64 {
        self.counts.iter().map(|(d, c)| d * c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(denomination, count)` pairs in ascending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denom, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{denom}: {count}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_solution_displays_as_braces() {
        let sol = Solution::new();
        assert!(sol.is_empty());
        assert_eq!(sol.total_coins(), 0);
        assert_eq!(sol.total_value(), 0);
        assert_eq!(sol.to_string(), "{}");
    }

    #[test]
    fn display_is_sorted_ascending_regardless_of_insertion_order() {
        let mut sol = Solution::new();
        sol.add(50, 2);
        sol.add(1, 3);
        sol.add(10, 1);
        assert_eq!(sol.to_string(), "{1: 3, 10: 1, 50: 2}");
    }

    #[test]
    fn add_accumulates_and_ignores_zero() {
        let mut sol = Solution::new();
        sol.add(5, 0);
        assert!(sol.is_empty());
        sol.add(5, 1);
        sol.add(5, 2);
        assert_eq!(sol.count_of(5), 3);
        assert_eq!(sol.count_of(2), 0);
        assert_eq!(sol.total_value(), 15);
    }
}
