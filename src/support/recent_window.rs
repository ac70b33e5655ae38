//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Feedtab.
//
// Feedtab is free software: you can redistribute it and/or modify it under the
// terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// Feedtab is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Feedtab. If not, see <http://www.gnu.org/licenses/>.

use crate::support::error::Error;

/// Types which carry a recency timestamp.
///
/// Greater values are more recent. The unit is the caller's business; the
/// window only ever compares two keys.
pub trait Timestamped {
    fn timestamp(&self) -> i64;
}

/// Bare keys work as items, which is mainly useful for tests and simple
/// callers.
impl Timestamped for i64 {
    fn timestamp(&self) -> i64 {
        *self
    }
}

/// A bounded container holding the most recent items it has been given.
///
/// The window never holds more than `capacity` items and keeps them sorted
/// ascending by timestamp, so the natural iteration order is
/// oldest-to-newest and [`RecentWindow::newest_first`] matches the usual
/// display order of a feed list. Inserting into a full window evicts the
/// item with the smallest timestamp.
///
/// Ties are stable in the same sense as a stable sort: of two items with
/// equal timestamps, the one given to the window first sorts first and is
/// the last of the two to be evicted. In particular, offering an item whose
/// timestamp does not exceed the current minimum of a full window leaves
/// the window untouched.
///
/// This is internally a sorted `Vec` of at most `capacity` elements. The
/// intended capacities are small (a feed card shows a handful of lines), so
/// the shifts done by `insert`/`remove` are not worth avoiding with a heap.
#[derive(Clone, Debug)]
pub struct RecentWindow<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: Timestamped> RecentWindow<T> {
    /// Create an empty window retaining at most `capacity` items.
    ///
    /// Fails with `Error::ZeroCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if 0 == capacity {
            return Err(Error::ZeroCapacity);
        }

        Ok(RecentWindow {
            capacity,
            items: Vec::with_capacity(capacity),
        })
    }

    /// The maximum number of items this window retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of items currently held, between 0 and `capacity()`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the window contents with the most recent items of `items`.
    ///
    /// The input may be unordered and of any length; only the items with
    /// the `capacity()` greatest timestamps are retained (at tied
    /// timestamps, earlier input positions win). This is a single pass over
    /// the input and never buffers more than `capacity()` items.
    pub fn rebuild(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        for item in items {
            self.offer(item);
        }
    }

    /// Offer a single item to the window.
    ///
    /// The item is placed according to its timestamp regardless of the
    /// order of prior offers. If the window was already full, the minimum-
    /// timestamp item is evicted, which is the offered item itself whenever
    /// its timestamp does not exceed the current minimum.
    ///
    /// Returns whether the offered item was retained.
    pub fn offer(&mut self, item: T) -> bool {
        let ts = item.timestamp();

        if self.items.len() == self.capacity {
            let min = self.items[0].timestamp();
            if ts <= min {
                return false;
            }

            // Evict the latest arrival among the minimum-timestamp items
            // (the last element of the minimal run) so that earlier
            // arrivals win ties, consistent with rebuild().
            let run = self.items.partition_point(|i| min == i.timestamp());
            self.items.remove(run - 1);
        }

        let at = self.items.partition_point(|i| i.timestamp() <= ts);
        self.items.insert(at, item);
        true
    }

    /// The current contents, ascending by timestamp.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate the current contents, ascending by timestamp.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Iterate the current contents newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }

    /// Mutably iterate the current contents, ascending by timestamp.
    ///
    /// Callers must not change any item's timestamp through this, as that
    /// would unsort the window.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    /// An item with an identity, so tests can tell tied timestamps apart.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct TestItem {
        ts: i64,
        id: usize,
    }

    impl Timestamped for TestItem {
        fn timestamp(&self) -> i64 {
            self.ts
        }
    }

    fn window(capacity: usize) -> RecentWindow<i64> {
        RecentWindow::new(capacity).unwrap()
    }

    fn contents(w: &RecentWindow<i64>) -> Vec<i64> {
        w.iter().copied().collect()
    }

    /// Reference implementation: top `n` by timestamp, first occurrence
    /// winning ties, result ascending.
    fn naive_top_n(items: &[TestItem], n: usize) -> Vec<TestItem> {
        let mut indexed: Vec<(usize, TestItem)> =
            items.iter().copied().enumerate().collect();
        // Stable sort, newest first; ties keep input order.
        indexed.sort_by(|a, b| b.1.ts.cmp(&a.1.ts));
        indexed.truncate(n);
        // Back to ascending-by-timestamp with input order at ties.
        indexed.sort_by(|a, b| a.1.ts.cmp(&b.1.ts).then(a.0.cmp(&b.0)));
        indexed.into_iter().map(|(_, item)| item).collect()
    }

    #[test]
    fn rebuild_keeps_most_recent_ascending() {
        let mut w = window(5);
        w.rebuild(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(vec![3, 4, 5, 6, 9], contents(&w));
        assert_eq!(5, w.len());
    }

    #[test]
    fn capacity_one_keeps_single_newest() {
        let mut w = window(1);
        w.rebuild(vec![5, 2, 9, 1]);
        assert_eq!(vec![9], contents(&w));
    }

    #[test]
    fn rebuild_with_empty_input_yields_empty_window() {
        let mut w = window(3);
        w.rebuild(Vec::new());
        assert_eq!(0, w.len());
        assert!(w.is_empty());
        assert!(contents(&w).is_empty());
    }

    #[test]
    fn short_input_is_fully_retained() {
        let mut w = window(10);
        w.rebuild(vec![7, 3]);
        assert_eq!(vec![3, 7], contents(&w));
    }

    #[test]
    fn offer_reports_retention_and_eviction() {
        let mut w = window(2);

        assert!(w.offer(10));
        assert_eq!(vec![10], contents(&w));

        // Out-of-order offer below capacity sorts into place.
        assert!(w.offer(7));
        assert_eq!(vec![7, 10], contents(&w));

        assert!(w.offer(20));
        assert_eq!(vec![10, 20], contents(&w));

        // Too old for a full window; rejected, window untouched.
        assert!(!w.offer(5));
        assert_eq!(vec![10, 20], contents(&w));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_matches!(Err(Error::ZeroCapacity), RecentWindow::<i64>::new(0));
    }

    #[test]
    fn tied_timestamps_favour_earlier_arrivals() {
        let mut w = RecentWindow::new(2).unwrap();
        w.rebuild(vec![
            TestItem { ts: 5, id: 0 },
            TestItem { ts: 5, id: 1 },
            TestItem { ts: 6, id: 2 },
        ]);
        // id 1 arrived later at the tied minimum, so it is the one that
        // goes when 6 arrives.
        assert_eq!(
            vec![TestItem { ts: 5, id: 0 }, TestItem { ts: 6, id: 2 }],
            w.iter().copied().collect::<Vec<_>>()
        );

        // Offering another tied-minimum item into the full window is a
        // no-op, keeping the earlier arrival.
        assert!(!w.offer(TestItem { ts: 5, id: 3 }));
        assert_eq!(
            vec![TestItem { ts: 5, id: 0 }, TestItem { ts: 6, id: 2 }],
            w.iter().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn newest_first_reverses() {
        let mut w = window(3);
        w.rebuild(vec![2, 8, 4]);
        assert_eq!(
            vec![8, 4, 2],
            w.newest_first().copied().collect::<Vec<_>>()
        );
    }

    fn items(max_len: usize) -> impl Strategy<Value = Vec<TestItem>> {
        // A narrow timestamp range so ties are common.
        prop::collection::vec(0i64..10, 0..=max_len).prop_map(|tss| {
            tss.into_iter()
                .enumerate()
                .map(|(id, ts)| TestItem { ts, id })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rebuild_matches_reference(
            input in items(24),
            capacity in 1usize..8,
        ) {
            let mut w = RecentWindow::new(capacity).unwrap();
            w.rebuild(input.clone());
            prop_assert_eq!(
                naive_top_n(&input, capacity),
                w.iter().copied().collect::<Vec<_>>()
            );
        }

        #[test]
        fn rebuild_is_idempotent(
            input in items(24),
            capacity in 1usize..8,
        ) {
            let mut once = RecentWindow::new(capacity).unwrap();
            once.rebuild(input.clone());

            let mut twice = RecentWindow::new(capacity).unwrap();
            twice.rebuild(input.clone());
            twice.rebuild(input);

            prop_assert_eq!(once.as_slice(), twice.as_slice());
        }

        #[test]
        fn invariants_hold_after_rebuild(
            input in items(24),
            capacity in 1usize..8,
        ) {
            let mut w = RecentWindow::new(capacity).unwrap();
            w.rebuild(input.clone());

            prop_assert!(w.len() <= capacity);
            prop_assert_eq!(w.len(), input.len().min(capacity));
            prop_assert!(w
                .as_slice()
                .windows(2)
                .all(|pair| pair[0].ts <= pair[1].ts));

            // Everything retained is at least as recent as everything
            // evicted.
            if let Some(min_kept) = w.as_slice().first().map(|i| i.ts) {
                for item in input {
                    if !w.as_slice().contains(&item) {
                        prop_assert!(item.ts <= min_kept);
                    }
                }
            }
        }

        #[test]
        fn ordered_offers_match_rebuild(
            input in items(24),
            capacity in 1usize..8,
        ) {
            let mut ordered = input.clone();
            ordered.sort_by_key(|item| item.ts);

            let mut offered = RecentWindow::new(capacity).unwrap();
            for item in ordered.clone() {
                offered.offer(item);
            }

            let mut rebuilt = RecentWindow::new(capacity).unwrap();
            rebuilt.rebuild(ordered);

            prop_assert_eq!(rebuilt.as_slice(), offered.as_slice());
        }

        #[test]
        fn offer_return_value_reflects_retention(
            input in items(24),
            capacity in 1usize..8,
            extra in 0i64..10,
        ) {
            let mut w = RecentWindow::new(capacity).unwrap();
            w.rebuild(input);

            let item = TestItem { ts: extra, id: usize::MAX };
            let retained = w.offer(item);
            prop_assert_eq!(retained, w.as_slice().contains(&item));
            prop_assert!(w.len() <= capacity);
        }
    }
}
