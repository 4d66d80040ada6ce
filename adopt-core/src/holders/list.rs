use crate::models::Dog;
use crate::observe::{SubscriptionId, ValueCell};
use crate::roster::Roster;

/// State holder backing the list screen.
///
/// Populated once, at construction, from the injected roster; the UI only
/// ever reads. There are no mutation operations and no failure path.
pub struct DogListHolder {
    dogs: ValueCell<Vec<Dog>>,
}

impl DogListHolder {
    pub fn new(roster: &Roster) -> Self {
        Self {
            dogs: ValueCell::new(roster.records().to_vec()),
        }
    }

    /// Read-only view of the record collection, in roster order.
    pub fn dogs(&self) -> &[Dog] {
        self.dogs.get()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Vec<Dog>) + 'static) -> SubscriptionId {
        self.dogs.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dogs.unsubscribe(id)
    }
}
