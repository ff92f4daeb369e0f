//! Property tests: relation laws over randomly generated well-formed trees.
//!
//! Generated trees are acyclic (parents always come earlier than their
//! children), every child gets at most one father and one mother, fathers
//! are men, mothers are women, and marriages are disjoint man/woman pairs.

use kintree_domain::{DirectRelation, Gender, Person, PersonId, Relation};
use kintree_engine::classify;
use kintree_store::Registry;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct TreeShape {
    men: Vec<bool>,
    fathers: Vec<Option<usize>>,
    mothers: Vec<Option<usize>>,
    spouses: Vec<Option<usize>>,
}

fn tree_shape() -> impl Strategy<Value = TreeShape> {
    (2usize..10).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::option::of(0usize..64), n),
            prop::collection::vec(prop::option::of(0usize..64), n),
            prop::collection::vec(prop::option::of(0usize..64), n),
        )
            .prop_map(|(men, fathers, mothers, spouses)| TreeShape {
                men,
                fathers,
                mothers,
                spouses,
            })
    })
}

fn pick(candidates: &[usize], choice: Option<usize>) -> Option<usize> {
    let choice = choice?;
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[choice % candidates.len()])
    }
}

fn build(shape: &TreeShape) -> (Registry, Vec<PersonId>) {
    let name = |i: usize| format!("p{}", i);
    let gender = |i: usize| if shape.men[i] { Gender::Man } else { Gender::Woman };

    let mut registry = Registry::new();
    let ids: Vec<PersonId> = (0..shape.men.len())
        .map(|i| registry.add_person(Person::new(name(i), gender(i))))
        .collect();

    for child in 0..shape.men.len() {
        let earlier_men: Vec<usize> = (0..child).filter(|&i| shape.men[i]).collect();
        let earlier_women: Vec<usize> = (0..child).filter(|&i| !shape.men[i]).collect();
        if let Some(father) = pick(&earlier_men, shape.fathers[child]) {
            registry
                .add_relation(&name(father), DirectRelation::Father, &name(child))
                .unwrap();
        }
        if let Some(mother) = pick(&earlier_women, shape.mothers[child]) {
            registry
                .add_relation(&name(mother), DirectRelation::Mother, &name(child))
                .unwrap();
        }
    }

    let mut married = vec![false; shape.men.len()];
    for husband in (0..shape.men.len()).filter(|&i| shape.men[i]) {
        let free_women: Vec<usize> = (0..shape.men.len())
            .filter(|&i| !shape.men[i] && !married[i])
            .collect();
        if let Some(wife) = pick(&free_women, shape.spouses[husband]) {
            married[husband] = true;
            married[wife] = true;
            registry
                .add_relation(&name(husband), DirectRelation::Husband, &name(wife))
                .unwrap();
        }
    }

    (registry, ids)
}

proptest! {
    #[test]
    fn prop_classify_is_total(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            for &b in &ids {
                let relation = classify(&registry, a, b);
                prop_assert!(Relation::ALL.contains(&relation));
            }
        }
    }

    #[test]
    fn prop_spouse_labels_are_symmetric(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            for &b in &ids {
                match classify(&registry, a, b) {
                    Relation::Husband => {
                        prop_assert_eq!(classify(&registry, b, a), Relation::Wife);
                    }
                    Relation::Wife => {
                        prop_assert_eq!(classify(&registry, b, a), Relation::Husband);
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn prop_parent_reverses_to_child(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            for &b in &ids {
                if matches!(classify(&registry, a, b), Relation::Father | Relation::Mother) {
                    let reverse = classify(&registry, b, a);
                    prop_assert!(
                        matches!(reverse, Relation::Son | Relation::Daughter),
                        "reverse was {}",
                        reverse
                    );
                }
            }
        }
    }

    #[test]
    fn prop_nobody_is_their_own_sibling(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            let relation = classify(&registry, a, a);
            prop_assert!(!matches!(relation, Relation::Brother | Relation::Sister));
        }
    }

    #[test]
    fn prop_unrelated_is_symmetric(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            for &b in &ids {
                if classify(&registry, a, b) == Relation::Unrelated {
                    prop_assert_eq!(classify(&registry, b, a), Relation::Unrelated);
                }
            }
        }
    }

    #[test]
    fn prop_gendered_label_matches_subject(shape in tree_shape()) {
        let (registry, ids) = build(&shape);
        for &a in &ids {
            let gender = registry.get(a).unwrap().gender();
            for &b in &ids {
                let relation = classify(&registry, a, b);
                let womanly = matches!(
                    relation,
                    Relation::Mother
                        | Relation::Daughter
                        | Relation::Sister
                        | Relation::Wife
                        | Relation::Aunt
                        | Relation::Grandmother
                        | Relation::Granddaughter
                        | Relation::Niece
                );
                let manly = matches!(
                    relation,
                    Relation::Father
                        | Relation::Son
                        | Relation::Brother
                        | Relation::Husband
                        | Relation::Uncle
                        | Relation::Grandfather
                        | Relation::Grandson
                        | Relation::Nephew
                );
                if womanly {
                    prop_assert_eq!(gender, Gender::Woman);
                }
                if manly {
                    prop_assert_eq!(gender, Gender::Man);
                }
            }
        }
    }
}
