//! Derived kin sets.
//!
//! Each function looks at a bounded neighborhood of one person (at most
//! three hops) and never recurses, so it terminates on any graph, cyclic
//! or not.

use kintree_domain::traits::FamilyGraph;
use kintree_domain::PersonId;
use std::collections::HashSet;

/// A set of person handles
pub type PersonSet = HashSet<PersonId>;

/// Children of the person's father and mother, excluding the person
pub fn siblings<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    let mut siblings: PersonSet = graph
        .parents_of(id)
        .into_iter()
        .flat_map(|parent| graph.children_of(parent))
        .collect();
    siblings.remove(&id);
    siblings
}

/// Fathers and mothers of the person's father and mother
pub fn grandparents<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    graph
        .parents_of(id)
        .into_iter()
        .flat_map(|parent| graph.parents_of(parent))
        .collect()
}

/// Children of the person's children
pub fn grandchildren<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    graph
        .children_of(id)
        .into_iter()
        .flat_map(|child| graph.children_of(child))
        .collect()
}

/// Siblings of the person's father and mother
pub fn uncles_and_aunts<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    graph
        .parents_of(id)
        .into_iter()
        .flat_map(|parent| siblings(graph, parent))
        .collect()
}

/// Children of the person's uncles and aunts
pub fn cousins<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    uncles_and_aunts(graph, id)
        .into_iter()
        .flat_map(|relative| graph.children_of(relative))
        .collect()
}

/// Children of the person's siblings
pub fn nephews_and_nieces<G: FamilyGraph + ?Sized>(graph: &G, id: PersonId) -> PersonSet {
    siblings(graph, id)
        .into_iter()
        .flat_map(|sibling| graph.children_of(sibling))
        .collect()
}
