//! Derivation rules and their precedence

use crate::kinship;
use kintree_domain::traits::FamilyGraph;
use kintree_domain::{Gender, PersonId, Relation};

/// One way a person can be related to another
///
/// Rules are tested in [`Rule::PRECEDENCE`] order and the first that holds
/// decides the label. On a malformed graph several rules can hold at once;
/// the order is what keeps the answer deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// B is one of A's children
    Parent,
    /// B is A's father or mother
    Child,
    /// B shares a parent with A
    Sibling,
    /// B is a child of one of A's uncles or aunts
    Cousin,
    /// B is A's spouse
    Spouse,
    /// B is a child of one of A's children
    Grandparent,
    /// B is a parent of one of A's parents
    Grandchild,
    /// B is a child of one of A's siblings
    UncleOrAunt,
    /// B is a sibling of one of A's parents
    NephewOrNiece,
}

impl Rule {
    /// Evaluation order. Must not be reordered.
    pub const PRECEDENCE: [Rule; 9] = [
        Rule::Parent,
        Rule::Child,
        Rule::Sibling,
        Rule::Cousin,
        Rule::Spouse,
        Rule::Grandparent,
        Rule::Grandchild,
        Rule::UncleOrAunt,
        Rule::NephewOrNiece,
    ];

    /// Get the rule name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Parent => "parent",
            Rule::Child => "child",
            Rule::Sibling => "sibling",
            Rule::Cousin => "cousin",
            Rule::Spouse => "spouse",
            Rule::Grandparent => "grandparent",
            Rule::Grandchild => "grandchild",
            Rule::UncleOrAunt => "uncle_or_aunt",
            Rule::NephewOrNiece => "nephew_or_niece",
        }
    }

    /// Whether this rule relates `a` to `b`
    ///
    /// An unknown `a` satisfies no rule.
    pub fn holds<G: FamilyGraph + ?Sized>(&self, graph: &G, a: PersonId, b: PersonId) -> bool {
        let Some(person) = graph.person(a) else {
            return false;
        };

        match self {
            Rule::Parent => person.has_child(b),
            Rule::Child => person.father() == Some(b) || person.mother() == Some(b),
            Rule::Sibling => kinship::siblings(graph, a).contains(&b),
            Rule::Cousin => kinship::cousins(graph, a).contains(&b),
            Rule::Spouse => person.spouse() == Some(b),
            Rule::Grandparent => kinship::grandchildren(graph, a).contains(&b),
            Rule::Grandchild => kinship::grandparents(graph, a).contains(&b),
            Rule::UncleOrAunt => kinship::nephews_and_nieces(graph, a).contains(&b),
            Rule::NephewOrNiece => kinship::uncles_and_aunts(graph, a).contains(&b),
        }
    }

    /// The label this rule gives a person of `gender`
    pub fn label(&self, gender: Gender) -> Relation {
        match self {
            Rule::Parent => gender.pick(Relation::Father, Relation::Mother),
            Rule::Child => gender.pick(Relation::Son, Relation::Daughter),
            Rule::Sibling => gender.pick(Relation::Brother, Relation::Sister),
            Rule::Cousin => Relation::Cousin,
            Rule::Spouse => gender.pick(Relation::Husband, Relation::Wife),
            Rule::Grandparent => gender.pick(Relation::Grandfather, Relation::Grandmother),
            Rule::Grandchild => gender.pick(Relation::Grandson, Relation::Granddaughter),
            Rule::UncleOrAunt => gender.pick(Relation::Uncle, Relation::Aunt),
            Rule::NephewOrNiece => gender.pick(Relation::Nephew, Relation::Niece),
        }
    }
}
