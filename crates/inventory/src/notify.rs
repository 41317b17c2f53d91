//! Low-stock notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::item::Item;

/// Receives a notice whenever an item is stored below the restock threshold.
///
/// Notifications are informational; they never affect the outcome of the store
/// operation that raised them.
pub trait RestockNotifier {
    fn notify(&self, item: &Item, threshold: u64);
}

impl<N> RestockNotifier for Rc<N>
where
    N: RestockNotifier + ?Sized,
{
    fn notify(&self, item: &Item, threshold: u64) {
        (**self).notify(item, threshold)
    }
}

/// Default notifier: emits a structured `warn` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl RestockNotifier for TracingNotifier {
    fn notify(&self, item: &Item, threshold: u64) {
        tracing::warn!(
            item_id = %item.id,
            category = %item.category,
            quantity = item.quantity,
            threshold,
            "item below restock threshold"
        );
    }
}

/// Collects notified items in memory (tests, batch callers).
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: RefCell<Vec<Item>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Item> {
        self.seen.take()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl RestockNotifier for RecordingNotifier {
    fn notify(&self, item: &Item, _threshold: u64) {
        self.seen.borrow_mut().push(item.clone());
    }
}
