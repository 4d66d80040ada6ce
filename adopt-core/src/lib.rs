pub mod error;
pub mod holders;
pub mod models;
pub mod observe;
pub mod roster;

pub use error::{HolderError, RosterError};
pub use holders::{DogDetailsHolder, DogListHolder};
pub use models::Dog;
pub use observe::{SubscriptionId, ValueCell};
pub use roster::Roster;
