//! Gender module

use std::fmt;

/// Gender of a person
///
/// Selects between the two variants of every gendered relation label
/// (father/mother, brother/sister, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    /// Takes the first listed label (father, son, brother, ...)
    Man,

    /// Takes the second listed label (mother, daughter, sister, ...)
    Woman,
}

impl Gender {
    /// Get the gender name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "woman",
        }
    }

    /// Parse a gender, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "man" => Some(Gender::Man),
            "woman" => Some(Gender::Woman),
            _ => None,
        }
    }

    /// Pick the label matching this gender from a (man, woman) pair
    pub fn pick<T>(&self, man: T, woman: T) -> T {
        match self {
            Gender::Man => man,
            Gender::Woman => woman,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown gender '{}'", s))
    }
}
