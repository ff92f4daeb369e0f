//! Kintree Storage Layer
//!
//! Owns every [`Person`](kintree_domain::Person) of a genealogical tree and
//! records the direct relations between them.
//!
//! # Architecture
//!
//! - [`Registry`]: arena of persons keyed by unique name, implementing the
//!   domain's `PersonStore` and `FamilyGraph` traits
//! - [`records`]: the line-oriented `name,gender` / `name1,relation,name2`
//!   codec used to load a tree and export its people
//!
//! # Examples
//!
//! ```
//! use kintree_domain::{DirectRelation, Gender, Person};
//! use kintree_store::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_person(Person::new("John", Gender::Man));
//! registry.add_person(Person::new("Mary", Gender::Woman));
//! registry.add_relation("John", DirectRelation::Father, "Mary").unwrap();
//!
//! let mary = registry.find("Mary").unwrap();
//! assert!(mary.father().is_some());
//! ```

#![warn(missing_docs)]

mod error;
pub mod records;
mod registry;

pub use error::{Result, StoreError};
pub use records::{save_people, write_people, Record};
pub use registry::Registry;
