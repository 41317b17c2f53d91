//! Bounded top-k selection.

use std::collections::BinaryHeap;

use crate::item::Item;
use crate::ranking::RankKey;

/// Heap entry ordered by [`RankKey`]; the heap's maximum is the worst-ranked item.
struct Ranked<'a> {
    key: RankKey,
    item: &'a Item,
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Ranked<'_> {}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Select the `k` items with the greatest quantity, best first.
///
/// Keeps a working set of at most `k` entries and evicts the current worst when a
/// better item arrives: O(n log k) time, O(k) extra space. Equal quantities rank by
/// ascending id.
pub fn select_top_k<'a, I>(items: I, k: usize) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Ranked<'a>> = BinaryHeap::with_capacity(k.saturating_add(1).min(1024));
    for item in items {
        let candidate = Ranked {
            key: RankKey::of(item),
            item,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(mut worst) = heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    // Ascending by key is best-first.
    heap.into_sorted_vec().into_iter().map(|r| r.item).collect()
}
