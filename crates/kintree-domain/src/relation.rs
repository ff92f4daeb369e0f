//! Relation module - the labels a kinship query answers with

use std::fmt;

/// Relation one person has to another ("A is <relation> to B")
///
/// Closed set: every classification yields exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Male parent
    Father,
    /// Female parent
    Mother,
    /// Male child
    Son,
    /// Female child
    Daughter,
    /// Male sibling
    Brother,
    /// Female sibling
    Sister,
    /// Male spouse
    Husband,
    /// Female spouse
    Wife,
    /// Male sibling of a parent
    Uncle,
    /// Female sibling of a parent
    Aunt,
    /// Child of a parent's sibling
    Cousin,
    /// Male parent of a parent
    Grandfather,
    /// Female parent of a parent
    Grandmother,
    /// Male child of a child
    Grandson,
    /// Female child of a child
    Granddaughter,
    /// Male child of a sibling
    Nephew,
    /// Female child of a sibling
    Niece,
    /// No derivation rule matched
    Unrelated,
}

impl Relation {
    /// Every relation, in declaration order
    pub const ALL: [Relation; 18] = [
        Relation::Father,
        Relation::Mother,
        Relation::Son,
        Relation::Daughter,
        Relation::Brother,
        Relation::Sister,
        Relation::Husband,
        Relation::Wife,
        Relation::Uncle,
        Relation::Aunt,
        Relation::Cousin,
        Relation::Grandfather,
        Relation::Grandmother,
        Relation::Grandson,
        Relation::Granddaughter,
        Relation::Nephew,
        Relation::Niece,
        Relation::Unrelated,
    ];

    /// Get the relation name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Father => "father",
            Relation::Mother => "mother",
            Relation::Son => "son",
            Relation::Daughter => "daughter",
            Relation::Brother => "brother",
            Relation::Sister => "sister",
            Relation::Husband => "husband",
            Relation::Wife => "wife",
            Relation::Uncle => "uncle",
            Relation::Aunt => "aunt",
            Relation::Cousin => "cousin",
            Relation::Grandfather => "grandfather",
            Relation::Grandmother => "grandmother",
            Relation::Grandson => "grandson",
            Relation::Granddaughter => "granddaughter",
            Relation::Nephew => "nephew",
            Relation::Niece => "niece",
            Relation::Unrelated => "unrelated",
        }
    }

}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation that can be recorded directly in input
///
/// Everything else is derived by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectRelation {
    /// First person is the father of the second
    Father,
    /// First person is the mother of the second
    Mother,
    /// First person is the husband of the second
    Husband,
    /// First person is the wife of the second
    Wife,
}

impl DirectRelation {
    /// Get the relation name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        self.as_relation().as_str()
    }

    /// Parse a direct relation, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "father" => Some(DirectRelation::Father),
            "mother" => Some(DirectRelation::Mother),
            "husband" => Some(DirectRelation::Husband),
            "wife" => Some(DirectRelation::Wife),
            _ => None,
        }
    }

    /// The full relation label this input relation corresponds to
    pub fn as_relation(&self) -> Relation {
        match self {
            DirectRelation::Father => Relation::Father,
            DirectRelation::Mother => Relation::Mother,
            DirectRelation::Husband => Relation::Husband,
            DirectRelation::Wife => Relation::Wife,
        }
    }
}

impl fmt::Display for DirectRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DirectRelation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown relation '{}'", s))
    }
}
