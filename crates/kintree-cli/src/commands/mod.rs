//! Command implementations.

pub mod export;
pub mod load;
pub mod people;
pub mod relation;

pub use self::export::execute_export;
pub use self::load::{execute_load, load_tree};
pub use self::people::execute_people;
pub use self::relation::execute_relation;
