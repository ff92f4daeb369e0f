//! Person registry: the arena that owns every person in a tree.

use crate::{Result, StoreError};
use kintree_domain::traits::{FamilyGraph, PersonStore};
use kintree_domain::{link, DirectRelation, Person, PersonId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Arena of persons keyed by unique name
///
/// Persons are appended to the arena and never removed, so every
/// [`PersonId`] handed out stays valid for the registry's lifetime.
/// Names are compared after trimming surrounding whitespace.
/// Re-adding a name points the name at a fresh slot; links recorded
/// against the earlier entry keep referring to it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    people: Vec<Person>,
    by_name: HashMap<String, PersonId>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person, silently replacing any entry with the same name
    ///
    /// Only the name and gender are kept. Relatives are recorded with
    /// [`Registry::add_relation`].
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let person = Person::new(person.name(), person.gender());
        let id = PersonId::from_index(self.people.len());
        let name = person.name().to_string();
        debug!(name = %name, gender = %person.gender(), %id, "adding person");
        self.people.push(person);

        if let Some(previous) = self.by_name.insert(name.clone(), id) {
            warn!(name = %name, %previous, %id, "person re-added, replacing earlier entry");
        }
        id
    }

    /// Resolve a name to its handle (exact and case-sensitive, surrounding
    /// whitespace ignored)
    pub fn resolve(&self, name: &str) -> Result<PersonId> {
        self.by_name
            .get(name.trim())
            .copied()
            .ok_or_else(|| StoreError::PersonNotFound(name.to_string()))
    }

    /// Find a person by exact name
    pub fn find(&self, name: &str) -> Result<&Person> {
        let id = self.resolve(name)?;
        self.get(id)
            .ok_or_else(|| StoreError::PersonNotFound(name.to_string()))
    }

    /// Get a person by handle
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    /// Record that `name1` is `relation` to `name2`
    ///
    /// Father/mother set the parent link on `name2` and add `name2` to the
    /// parent's children in the same call. Husband/wife set both spouse
    /// links. Earlier links are overwritten, never pruned. Nothing is
    /// changed when either name is unknown.
    pub fn add_relation(
        &mut self,
        name1: &str,
        relation: DirectRelation,
        name2: &str,
    ) -> Result<()> {
        let first = self.resolve(name1)?;
        let second = self.resolve(name2)?;
        debug!(%name1, %relation, %name2, "adding relation");

        let linked = link(&mut self.people, first, relation, second);
        debug_assert!(linked, "resolved handles index live slots");
        Ok(())
    }

    /// Every live entry, ordered by name
    pub fn people_sorted_by_name(&self) -> Vec<&Person> {
        let mut people: Vec<&Person> = self
            .by_name
            .values()
            .filter_map(|id| self.get(*id))
            .collect();
        people.sort_by(|a, b| a.name().cmp(b.name()));
        people
    }

    /// Number of distinct names registered
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether no one is registered
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FamilyGraph for Registry {
    fn person(&self, id: PersonId) -> Option<&Person> {
        self.get(id)
    }
}

impl PersonStore for Registry {
    type Error = StoreError;

    fn add_person(&mut self, person: Person) -> PersonId {
        Registry::add_person(self, person)
    }

    fn resolve(&self, name: &str) -> Result<PersonId> {
        Registry::resolve(self, name)
    }

    fn find(&self, name: &str) -> Result<&Person> {
        Registry::find(self, name)
    }

    fn add_relation(&mut self, name1: &str, relation: DirectRelation, name2: &str) -> Result<()> {
        Registry::add_relation(self, name1, relation, name2)
    }

    fn people_sorted_by_name(&self) -> Vec<&Person> {
        Registry::people_sorted_by_name(self)
    }
}
