//! Relation classification for an ordered pair of people

use crate::Rule;
use kintree_domain::traits::{FamilyGraph, PersonStore};
use kintree_domain::{PersonId, Relation};
use std::fmt;
use tracing::trace;

/// The first rule, in precedence order, that relates `a` to `b`
pub fn matching_rule<G: FamilyGraph + ?Sized>(graph: &G, a: PersonId, b: PersonId) -> Option<Rule> {
    Rule::PRECEDENCE
        .into_iter()
        .find(|rule| rule.holds(graph, a, b))
}

/// Classify what `a` is to `b`
///
/// Total: always returns exactly one relation, falling back to
/// [`Relation::Unrelated`] when no rule holds or `a` is unknown.
pub fn classify<G: FamilyGraph + ?Sized>(graph: &G, a: PersonId, b: PersonId) -> Relation {
    let Some(person) = graph.person(a) else {
        return Relation::Unrelated;
    };

    let rule = matching_rule(graph, a, b);
    let relation = rule.map_or(Relation::Unrelated, |rule| rule.label(person.gender()));
    trace!(
        %a,
        %b,
        rule = rule.map_or("none", |r| r.as_str()),
        %relation,
        "classified pair"
    );
    relation
}

/// "`subject` is `relation` to `object`"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationStatement {
    /// Name of the first person
    pub subject: String,
    /// What the first person is to the second
    pub relation: Relation,
    /// Name of the second person
    pub object: String,
}

impl fmt::Display for RelationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} to {}", self.subject, self.relation, self.object)
    }
}

/// Classify a pair and attach both names
pub fn describe<G: FamilyGraph + ?Sized>(graph: &G, a: PersonId, b: PersonId) -> RelationStatement {
    let name = |id: PersonId| {
        graph
            .person(id)
            .map_or_else(|| id.to_string(), |p| p.name().to_string())
    };

    RelationStatement {
        subject: name(a),
        relation: classify(graph, a, b),
        object: name(b),
    }
}

/// Resolve two names and classify them
///
/// Lookup failures are returned unchanged; classification itself cannot fail.
pub fn relation_between<S>(
    store: &S,
    name1: &str,
    name2: &str,
) -> Result<RelationStatement, S::Error>
where
    S: PersonStore + FamilyGraph + ?Sized,
{
    let a = store.resolve(name1)?;
    let b = store.resolve(name2)?;
    Ok(describe(store, a, b))
}
