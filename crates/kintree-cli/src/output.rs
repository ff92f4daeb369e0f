//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kintree_domain::{Person, PersonId};
use kintree_engine::RelationStatement;
use kintree_store::Registry;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format everyone in the registry, ordered by name.
    pub fn format_people(&self, registry: &Registry) -> Result<String> {
        let people = registry.people_sorted_by_name();
        match self.format {
            OutputFormat::Json => self.format_people_json(registry, &people),
            OutputFormat::Table => self.format_people_table(registry, &people),
            OutputFormat::Quiet => Ok(self.format_people_quiet(&people)),
        }
    }

    /// Format the answer to a relation query.
    pub fn format_statement(&self, statement: &RelationStatement) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "subject": statement.subject,
                "relation": statement.relation.as_str(),
                "object": statement.object,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(statement.to_string()),
        }
    }

    fn format_people_json(&self, registry: &Registry, people: &[&Person]) -> Result<String> {
        let json_people: Vec<serde_json::Value> = people
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name(),
                    "gender": p.gender().as_str(),
                    "father": p.father().map(|id| name_of(registry, id)),
                    "mother": p.mother().map(|id| name_of(registry, id)),
                    "spouse": p.spouse().map(|id| name_of(registry, id)),
                    "children": p
                        .children()
                        .iter()
                        .map(|id| name_of(registry, *id))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_people)?)
    }

    fn format_people_table(&self, registry: &Registry, people: &[&Person]) -> Result<String> {
        if people.is_empty() {
            return Ok(self.colorize("No people found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Gender", "Father", "Mother", "Spouse", "Children"]);

        for person in people {
            let link = |id: Option<PersonId>| {
                id.map(|id| name_of(registry, id)).unwrap_or_default()
            };
            let children = person
                .children()
                .iter()
                .map(|id| name_of(registry, *id))
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_record([
                person.name().to_string(),
                person.gender().to_string(),
                link(person.father()),
                link(person.mother()),
                link(person.spouse()),
                children,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Quiet mode prints the same `name,gender` lines an export writes.
    fn format_people_quiet(&self, people: &[&Person]) -> String {
        people
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the result of loading a tree file.
    pub fn tree_loaded(&self, path: &Path, count: usize) -> String {
        self.success(&format!(
            "Genealogical tree loaded from {} ({} people)",
            path.display(),
            count
        ))
    }

    /// Format the result of exporting people.
    pub fn people_saved(&self, path: &Path, count: usize) -> String {
        self.success(&format!(
            "Saved {} people to {} in alphabetical order",
            count,
            path.display()
        ))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn name_of(registry: &Registry, id: PersonId) -> String {
    registry
        .get(id)
        .map_or_else(|| id.to_string(), |p| p.name().to_string())
}
