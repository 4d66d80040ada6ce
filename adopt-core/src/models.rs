use serde::{Deserialize, Serialize};

/// A single adoptable dog record.
///
/// Records are plain data: built once when the roster is constructed and
/// never mutated afterwards. `photo` is an opaque handle the UI layer
/// resolves to an actual image; `id` is not guaranteed unique (the sample
/// data deliberately carries a collision, see [`crate::roster::Roster`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub shelter: String,
    pub photo: String,
    pub age: u32,
    pub size: String,
    pub breed: String,
}
