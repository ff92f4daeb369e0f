//! Trait definitions for the seams between layers
//!
//! The registry implementation lives in `kintree-store`; the relation engine
//! in `kintree-engine` only ever sees a [`FamilyGraph`].

use crate::{DirectRelation, Person, PersonId};

/// Read-only view of the family graph
///
/// Implemented by the storage layer (kintree-store). Lookups of a handle the
/// graph does not know return `None`; traversals treat that as "no relatives".
pub trait FamilyGraph {
    /// Get a person by handle
    fn person(&self, id: PersonId) -> Option<&Person>;

    /// Children of a person (empty for unknown handles)
    fn children_of(&self, id: PersonId) -> Vec<PersonId> {
        self.person(id)
            .map(|p| p.children().iter().copied().collect())
            .unwrap_or_default()
    }

    /// Father and mother of a person, whichever are recorded
    fn parents_of(&self, id: PersonId) -> Vec<PersonId> {
        self.person(id)
            .map(|p| p.parents().collect())
            .unwrap_or_default()
    }
}

/// Trait for storing and resolving people by name
///
/// Implemented by the infrastructure layer (kintree-store)
pub trait PersonStore {
    /// Error type for store operations
    type Error;

    /// Insert a person, replacing any entry with the same name
    ///
    /// Only name and gender are stored; links come from `add_relation`.
    fn add_person(&mut self, person: Person) -> PersonId;

    /// Resolve a name to its handle
    fn resolve(&self, name: &str) -> Result<PersonId, Self::Error>;

    /// Find a person by exact name
    fn find(&self, name: &str) -> Result<&Person, Self::Error>;

    /// Record a direct relation: `name1` is `relation` to `name2`
    fn add_relation(
        &mut self,
        name1: &str,
        relation: DirectRelation,
        name2: &str,
    ) -> Result<(), Self::Error>;

    /// Every person, ordered by name
    fn people_sorted_by_name(&self) -> Vec<&Person>;
}
