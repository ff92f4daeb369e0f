//! Kintree Relation Engine
//!
//! Answers "what relation does A have to B?" from the handful of links a
//! tree actually records (father, mother, spouse, children).
//!
//! The engine provides:
//! - Derived kin sets (siblings, grandparents, cousins, ...) in [`kinship`]
//! - The fixed-precedence rule table in [`Rule`]
//! - [`classify`], which picks exactly one [`Relation`](kintree_domain::Relation)
//!   for an ordered pair
//!
//! Everything here reads through the domain's `FamilyGraph` trait and
//! never mutates the tree.
//!
//! # Examples
//!
//! ```
//! use kintree_domain::{DirectRelation, Gender, Person, Relation};
//! use kintree_engine::classify;
//! use kintree_store::Registry;
//!
//! let mut registry = Registry::new();
//! let john = registry.add_person(Person::new("John", Gender::Man));
//! let tom = registry.add_person(Person::new("Tom", Gender::Man));
//! registry.add_relation("John", DirectRelation::Father, "Tom").unwrap();
//!
//! assert_eq!(classify(&registry, john, tom), Relation::Father);
//! assert_eq!(classify(&registry, tom, john), Relation::Son);
//! ```

#![warn(missing_docs)]

mod classify;
pub mod kinship;
mod rules;

pub use classify::{classify, describe, matching_rule, relation_between, RelationStatement};
pub use rules::Rule;
