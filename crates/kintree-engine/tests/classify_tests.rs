//! End-to-end classification scenarios over small hand-built trees.

use kintree_domain::{DirectRelation, Gender, Person, PersonId, Relation};
use kintree_engine::{classify, matching_rule, relation_between, Rule};
use kintree_store::Registry;

struct Tree {
    registry: Registry,
}

impl Tree {
    fn new(people: &[(&str, Gender)]) -> Self {
        let mut registry = Registry::new();
        for (name, gender) in people {
            registry.add_person(Person::new(*name, *gender));
        }
        Self { registry }
    }

    fn relate(mut self, a: &str, relation: DirectRelation, b: &str) -> Self {
        self.registry.add_relation(a, relation, b).unwrap();
        self
    }

    fn id(&self, name: &str) -> PersonId {
        self.registry.resolve(name).unwrap()
    }

    fn classify(&self, a: &str, b: &str) -> Relation {
        classify(&self.registry, self.id(a), self.id(b))
    }
}

#[test]
fn test_father_and_son() {
    let tree = Tree::new(&[("A", Gender::Man), ("B", Gender::Man)])
        .relate("A", DirectRelation::Father, "B");
    assert_eq!(tree.classify("A", "B"), Relation::Father);
    assert_eq!(tree.classify("B", "A"), Relation::Son);
}

#[test]
fn test_mother_and_daughter() {
    let tree = Tree::new(&[("M", Gender::Woman), ("D", Gender::Woman)])
        .relate("M", DirectRelation::Mother, "D");
    assert_eq!(tree.classify("M", "D"), Relation::Mother);
    assert_eq!(tree.classify("D", "M"), Relation::Daughter);
}

#[test]
fn test_full_siblings() {
    let tree = Tree::new(&[
        ("Dad", Gender::Man),
        ("Mom", Gender::Woman),
        ("A", Gender::Man),
        ("B", Gender::Woman),
    ])
    .relate("Dad", DirectRelation::Father, "A")
    .relate("Mom", DirectRelation::Mother, "A")
    .relate("Dad", DirectRelation::Father, "B")
    .relate("Mom", DirectRelation::Mother, "B");

    assert_eq!(tree.classify("A", "B"), Relation::Brother);
    assert_eq!(tree.classify("B", "A"), Relation::Sister);
    assert_eq!(tree.classify("A", "A"), Relation::Unrelated);
}

#[test]
fn test_siblings_through_one_shared_parent() {
    let tree = Tree::new(&[("Mom", Gender::Woman), ("A", Gender::Woman), ("B", Gender::Woman)])
        .relate("Mom", DirectRelation::Mother, "A")
        .relate("Mom", DirectRelation::Mother, "B");
    assert_eq!(tree.classify("A", "B"), Relation::Sister);
}

#[test]
fn test_grandfather_and_grandchild() {
    let tree = Tree::new(&[("A", Gender::Man), ("B", Gender::Man), ("C", Gender::Woman)])
        .relate("A", DirectRelation::Father, "B")
        .relate("B", DirectRelation::Father, "C");
    assert_eq!(tree.classify("A", "C"), Relation::Grandfather);
    assert_eq!(tree.classify("C", "A"), Relation::Granddaughter);
}

#[test]
fn test_grandmother_and_grandson() {
    let tree = Tree::new(&[("G", Gender::Woman), ("P", Gender::Woman), ("K", Gender::Man)])
        .relate("G", DirectRelation::Mother, "P")
        .relate("P", DirectRelation::Mother, "K");
    assert_eq!(tree.classify("G", "K"), Relation::Grandmother);
    assert_eq!(tree.classify("K", "G"), Relation::Grandson);
}

#[test]
fn test_unrelated_is_symmetric() {
    let tree = Tree::new(&[("X", Gender::Man), ("Y", Gender::Woman)]);
    assert_eq!(tree.classify("X", "Y"), Relation::Unrelated);
    assert_eq!(tree.classify("Y", "X"), Relation::Unrelated);
}

#[test]
fn test_in_laws_are_unrelated() {
    // No rule covers a spouse's parents.
    let tree = Tree::new(&[("Dad", Gender::Man), ("Son", Gender::Man), ("Wife", Gender::Woman)])
        .relate("Dad", DirectRelation::Father, "Son")
        .relate("Son", DirectRelation::Husband, "Wife");
    assert_eq!(tree.classify("Dad", "Wife"), Relation::Unrelated);
    assert_eq!(tree.classify("Wife", "Dad"), Relation::Unrelated);
}

#[test]
fn test_uncle_and_nephew() {
    let tree = Tree::new(&[
        ("Grandpa", Gender::Man),
        ("Dad", Gender::Man),
        ("Uncle", Gender::Man),
        ("Kid", Gender::Man),
    ])
    .relate("Grandpa", DirectRelation::Father, "Dad")
    .relate("Grandpa", DirectRelation::Father, "Uncle")
    .relate("Dad", DirectRelation::Father, "Kid");

    assert_eq!(tree.classify("Uncle", "Kid"), Relation::Uncle);
    assert_eq!(tree.classify("Kid", "Uncle"), Relation::Nephew);
}

#[test]
fn test_aunt_and_niece() {
    let tree = Tree::new(&[
        ("Grandma", Gender::Woman),
        ("Mom", Gender::Woman),
        ("Aunt", Gender::Woman),
        ("Girl", Gender::Woman),
    ])
    .relate("Grandma", DirectRelation::Mother, "Mom")
    .relate("Grandma", DirectRelation::Mother, "Aunt")
    .relate("Mom", DirectRelation::Mother, "Girl");

    assert_eq!(tree.classify("Aunt", "Girl"), Relation::Aunt);
    assert_eq!(tree.classify("Girl", "Aunt"), Relation::Niece);
}

#[test]
fn test_cousins_have_no_gender_variant() {
    let tree = Tree::new(&[
        ("Grandpa", Gender::Man),
        ("Dad", Gender::Man),
        ("Aunt", Gender::Woman),
        ("Boy", Gender::Man),
        ("Girl", Gender::Woman),
    ])
    .relate("Grandpa", DirectRelation::Father, "Dad")
    .relate("Grandpa", DirectRelation::Father, "Aunt")
    .relate("Dad", DirectRelation::Father, "Boy")
    .relate("Aunt", DirectRelation::Mother, "Girl");

    assert_eq!(tree.classify("Boy", "Girl"), Relation::Cousin);
    assert_eq!(tree.classify("Girl", "Boy"), Relation::Cousin);
}

#[test]
fn test_husband_and_wife() {
    let tree = Tree::new(&[("H", Gender::Man), ("W", Gender::Woman)])
        .relate("W", DirectRelation::Wife, "H");
    assert_eq!(tree.classify("H", "W"), Relation::Husband);
    assert_eq!(tree.classify("W", "H"), Relation::Wife);
}

#[test]
fn test_parent_beats_child_on_cycle() {
    let tree = Tree::new(&[("A", Gender::Man), ("B", Gender::Woman)])
        .relate("A", DirectRelation::Father, "B")
        .relate("B", DirectRelation::Mother, "A");

    // Both are parent and child of each other; the parent rule comes first.
    assert_eq!(tree.classify("A", "B"), Relation::Father);
    assert_eq!(tree.classify("B", "A"), Relation::Mother);
}

#[test]
fn test_sibling_beats_spouse() {
    let tree = Tree::new(&[("Dad", Gender::Man), ("A", Gender::Man), ("B", Gender::Woman)])
        .relate("Dad", DirectRelation::Father, "A")
        .relate("Dad", DirectRelation::Father, "B")
        .relate("A", DirectRelation::Husband, "B");

    let (a, b) = (tree.id("A"), tree.id("B"));
    assert_eq!(matching_rule(&tree.registry, a, b), Some(Rule::Sibling));
    assert_eq!(tree.classify("A", "B"), Relation::Brother);
    assert!(Rule::Spouse.holds(&tree.registry, a, b));
}

#[test]
fn test_spouse_beats_grandparent() {
    let tree = Tree::new(&[("A", Gender::Man), ("Mid", Gender::Woman), ("C", Gender::Woman)])
        .relate("A", DirectRelation::Father, "Mid")
        .relate("Mid", DirectRelation::Mother, "C")
        .relate("A", DirectRelation::Husband, "C");
    assert_eq!(tree.classify("A", "C"), Relation::Husband);
}

#[test]
fn test_remarried_spouse_leaves_one_sided_link() {
    let tree = Tree::new(&[("H", Gender::Man), ("W1", Gender::Woman), ("W2", Gender::Woman)])
        .relate("H", DirectRelation::Husband, "W1")
        .relate("H", DirectRelation::Husband, "W2");

    assert_eq!(tree.classify("H", "W2"), Relation::Husband);
    assert_eq!(tree.classify("H", "W1"), Relation::Unrelated);
    // W1 was never unlinked
    assert_eq!(tree.classify("W1", "H"), Relation::Wife);
}

#[test]
fn test_fixture_tree() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../kintree-store/tests/fixtures/family.txt");
    let registry = Registry::load_from_path(path).unwrap();

    let cases = [
        ("George", "Peter", "George is father to Peter"),
        ("Anna", "Peter", "Anna is sister to Peter"),
        ("Nick", "Eleni", "Nick is cousin to Eleni"),
        ("Helen", "Nick", "Helen is grandmother to Nick"),
        ("Eleni", "George", "Eleni is granddaughter to George"),
        ("Peter", "Eleni", "Peter is uncle to Eleni"),
        ("Eleni", "Peter", "Eleni is niece to Peter"),
        ("Maria", "Peter", "Maria is wife to Peter"),
        ("Sofia", "Alex", "Sofia is unrelated to Alex"),
        ("Kostas", "Maria", "Kostas is unrelated to Maria"),
    ];
    for (a, b, expected) in cases {
        let statement = relation_between(&registry, a, b).unwrap();
        assert_eq!(statement.to_string(), expected);
    }
}
