// Picker events
// Change notifications and the subscriber list that receives them

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::range::DateRange;

/// Notification sent to subscribers whenever the selection may have changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickerEvent {
    RangeChanged(DateRange),
    FromChanged(Option<NaiveDate>),
    ToChanged(Option<NaiveDate>),
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&PickerEvent)>;

/// Synchronous observer list
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Returns false if the id was not registered
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn notify(&mut self, event: &PickerEvent) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
