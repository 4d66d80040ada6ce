use crate::error::HolderError;
use crate::models::Dog;
use crate::observe::{SubscriptionId, ValueCell};
use crate::roster::Roster;

/// State holder backing the details screen.
///
/// Exposes an observable optional record, initially absent, populated by
/// [`DogDetailsHolder::init_by_id`].
pub struct DogDetailsHolder {
    dog: ValueCell<Option<Dog>>,
}

impl DogDetailsHolder {
    pub fn new() -> Self {
        Self {
            dog: ValueCell::new(None),
        }
    }

    /// Resolve `id` against the roster and publish the result.
    ///
    /// Lookup is first-match in roster order. A miss publishes `None` so a
    /// previously shown record never outlives the identifier that replaced
    /// it, and is reported to the caller rather than swallowed.
    pub fn init_by_id(&mut self, roster: &Roster, id: &str) -> Result<(), HolderError> {
        match roster.find(id) {
            Some(dog) => {
                log::debug!("details resolved id={} to {}", dog.id, dog.name);
                self.dog.set(Some(dog.clone()));
                Ok(())
            }
            None => {
                log::warn!("details lookup missed identifier '{}'", id);
                self.dog.set(None);
                Err(HolderError::UnknownDog(id.to_string()))
            }
        }
    }

    /// The currently resolved record, if any.
    pub fn dog(&self) -> Option<&Dog> {
        self.dog.get().as_ref()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Option<Dog>) + 'static) -> SubscriptionId {
        self.dog.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dog.unsubscribe(id)
    }
}

impl Default for DogDetailsHolder {
    fn default() -> Self {
        Self::new()
    }
}
