//! Line-oriented tree records.
//!
//! A tree file holds one record per line:
//!
//! ```text
//! John,man
//! Mary,woman
//! John,husband,Mary
//! John,father,Tom
//! ```
//!
//! Two fields describe a person, three a direct relation. Every person
//! record is applied before any relation record, so relations may appear
//! before the people they name.

use crate::{Registry, Result, StoreError};
use kintree_domain::{DirectRelation, Gender, Person};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// One parsed line of a tree file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `name,gender`
    Person {
        /// Person name
        name: String,
        /// Person gender
        gender: Gender,
    },
    /// `name1,relation,name2`
    Relation {
        /// First person ("name1 is <relation> to name2")
        from: String,
        /// Direct relation
        relation: DirectRelation,
        /// Second person
        to: String,
    },
}

impl Record {
    /// Parse one line. Blank lines yield `None`.
    ///
    /// `line` is the 1-based line number used in error messages.
    pub fn parse(text: &str, line: usize) -> Result<Option<Self>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let invalid = |reason: String| StoreError::InvalidRecord { line, reason };

        match fields.as_slice() {
            [name, gender] => {
                let gender = gender.parse::<Gender>().map_err(invalid)?;
                Ok(Some(Record::Person {
                    name: name.to_string(),
                    gender,
                }))
            }
            [from, relation, to] => {
                let relation = relation.parse::<DirectRelation>().map_err(invalid)?;
                Ok(Some(Record::Relation {
                    from: from.to_string(),
                    relation,
                    to: to.to_string(),
                }))
            }
            other => Err(invalid(format!(
                "expected 2 or 3 fields, found {}",
                other.len()
            ))),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Person { name, gender } => write!(f, "{},{}", name, gender),
            Record::Relation { from, relation, to } => write!(f, "{},{},{}", from, relation, to),
        }
    }
}

/// Parse every record from a reader
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = Record::parse(&line, index + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Apply records to a registry: all people first, then all relations
pub fn apply_records(registry: &mut Registry, records: &[Record]) -> Result<()> {
    for record in records {
        if let Record::Person { name, gender } = record {
            registry.add_person(Person::new(name.clone(), *gender));
        }
    }
    for record in records {
        if let Record::Relation { from, relation, to } = record {
            registry.add_relation(from, *relation, to)?;
        }
    }
    Ok(())
}

impl Registry {
    /// Build a registry from tree records
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let records = parse_records(reader)?;
        let mut registry = Registry::new();
        apply_records(&mut registry, &records)?;
        debug!(records = records.len(), people = registry.len(), "tree loaded");
        Ok(registry)
    }

    /// Build a registry from a tree file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let registry = Self::load_from_reader(BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), people = registry.len(), "loaded tree file");
        Ok(registry)
    }
}

/// Write every person as `name,gender`, ordered by name
///
/// Returns the number of people written.
pub fn write_people<W: Write>(registry: &Registry, mut writer: W) -> Result<usize> {
    let people = registry.people_sorted_by_name();
    for person in &people {
        writeln!(writer, "{}", person)?;
    }
    writer.flush()?;
    Ok(people.len())
}

/// Write every person to a file, ordered by name
pub fn save_people<P: AsRef<Path>>(registry: &Registry, path: P) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let count = write_people(registry, BufWriter::new(File::create(path)?))?;
    info!(path = %path.display(), people = count, "saved people");
    Ok(count)
}
