//! Person module - the node type of the family graph

use crate::{DirectRelation, Gender};
use std::collections::BTreeSet;
use std::fmt;

/// Handle to a person held by a registry
///
/// A plain arena index. It never owns the person it names, so parent,
/// child and spouse links can point at each other freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(usize);

impl PersonId {
    /// Create a handle from a raw arena index
    ///
    /// This is primarily for the storage layer.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw arena index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person in the genealogical tree
///
/// Name and gender are fixed at construction. Relationship fields start
/// empty and change only through [`link`], which keeps `children`
/// consistent with `father`/`mother` and sets `spouse` on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    gender: Gender,
    father: Option<PersonId>,
    mother: Option<PersonId>,
    spouse: Option<PersonId>,
    children: BTreeSet<PersonId>,
}

impl Person {
    /// Create a person with no relatives
    ///
    /// Surrounding whitespace is stripped from the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use kintree_domain::{Gender, Person};
    ///
    /// let person = Person::new("Alice", Gender::Woman);
    /// assert_eq!(person.to_string(), "Alice,woman");
    /// ```
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into().trim().to_string(),
            gender,
            father: None,
            mother: None,
            spouse: None,
            children: BTreeSet::new(),
        }
    }

    /// The person's unique name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The person's father, if recorded
    pub fn father(&self) -> Option<PersonId> {
        self.father
    }

    /// The person's mother, if recorded
    pub fn mother(&self) -> Option<PersonId> {
        self.mother
    }

    /// Father and mother, whichever are recorded
    pub fn parents(&self) -> impl Iterator<Item = PersonId> {
        self.father.into_iter().chain(self.mother)
    }

    /// The person's spouse, if recorded
    pub fn spouse(&self) -> Option<PersonId> {
        self.spouse
    }

    /// The person's children
    pub fn children(&self) -> &BTreeSet<PersonId> {
        &self.children
    }

    /// Whether `id` is among this person's children
    pub fn has_child(&self, id: PersonId) -> bool {
        self.children.contains(&id)
    }
}

/// Record that `from` is `relation` to `to`, updating both people
///
/// Father/mother set the parent link on `to` and add `to` to the parent's
/// children. Husband/wife set both spouse links. Earlier links are
/// overwritten, never pruned. Returns false, changing nothing, if either
/// handle is out of range for `people`.
pub fn link(
    people: &mut [Person],
    from: PersonId,
    relation: DirectRelation,
    to: PersonId,
) -> bool {
    if from.0 >= people.len() || to.0 >= people.len() {
        return false;
    }

    match relation {
        DirectRelation::Father => {
            people[from.0].children.insert(to);
            people[to.0].father = Some(from);
        }
        DirectRelation::Mother => {
            people[from.0].children.insert(to);
            people[to.0].mother = Some(from);
        }
        DirectRelation::Husband | DirectRelation::Wife => {
            people[from.0].spouse = Some(to);
            people[to.0].spouse = Some(from);
        }
    }
    true
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.gender)
    }
}
