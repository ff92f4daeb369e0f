//! Kintree Domain Layer
//!
//! This crate contains the genealogical data model shared by every other
//! kintree crate. It has ZERO external dependencies and defines the value
//! types plus the trait interfaces the registry and the relation engine meet at.
//!
//! ## Key Concepts
//!
//! - **Person**: a named individual with a fixed gender and links to relatives
//! - **PersonId**: a non-owning handle into the registry that owns every person
//! - **DirectRelation**: the four relations that can be recorded (father, mother, husband, wife)
//! - **Relation**: the eighteen labels a kinship query can answer with
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Storage lives in `kintree-store`, inference in `kintree-engine`
//! - [`traits::FamilyGraph`] is the read-only view the engine traverses

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gender;
pub mod person;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use gender::Gender;
pub use person::{link, Person, PersonId};
pub use relation::{DirectRelation, Relation};
pub use traits::{FamilyGraph, PersonStore};
