//! Stable top-down merge sort.

use crate::transaction::Transaction;

/// Ordering strategy for the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Creation time, oldest first.
    Timestamp,
    /// Movement amount, smallest first.
    Amount,
}

impl SortKey {
    /// `true` when `a` may stay in front of `b`.
    ///
    /// Uses `<=`, so equal keys keep their current relative order.
    pub fn in_order(self, a: &Transaction, b: &Transaction) -> bool {
        match self {
            SortKey::Timestamp => a.timestamp() <= b.timestamp(),
            SortKey::Amount => a.amount() <= b.amount(),
        }
    }
}

/// Sort `items` with a "less than or equal" predicate.
///
/// The left half always receives the middle element (`ceil(n/2)` items), and
/// the merge takes from the left half on ties, which makes the sort stable.
pub fn merge_sort_by<T, F>(mut items: Vec<T>, in_order: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len().div_ceil(2));
    let left = merge_sort_by(items, in_order);
    let right = merge_sort_by(right, in_order);
    merge(left, right, in_order)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, in_order: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => in_order(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_single_are_untouched() {
        let le = |a: &i32, b: &i32| a <= b;
        assert!(merge_sort_by(Vec::<i32>::new(), &le).is_empty());
        assert_eq!(merge_sort_by(vec![9], &le), vec![9]);
    }

    #[test]
    fn sorts_odd_and_even_lengths() {
        let le = |a: &i32, b: &i32| a <= b;
        assert_eq!(merge_sort_by(vec![3, 1, 2], &le), vec![1, 2, 3]);
        assert_eq!(merge_sort_by(vec![4, 3, 2, 1], &le), vec![1, 2, 3, 4]);
    }

    #[test]
    fn ties_keep_input_order() {
        // (key, original position)
        let input = vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)];
        let sorted = merge_sort_by(input, &|a: &(i32, i32), b: &(i32, i32)| a.0 <= b.0);
        assert_eq!(sorted, vec![(1, 1), (1, 3), (2, 0), (2, 2), (2, 4)]);
    }

    proptest! {
        #[test]
        fn agrees_with_std_stable_sort(keys in prop::collection::vec(0u8..8, 0..200)) {
            let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();

            let mut expected = tagged.clone();
            expected.sort_by_key(|(k, _)| *k);

            let actual = merge_sort_by(tagged, &|a: &(u8, usize), b: &(u8, usize)| a.0 <= b.0);
            prop_assert_eq!(actual, expected);
        }
    }
}
