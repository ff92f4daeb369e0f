//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, ExportArgs, RelationArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kintree_store::Registry;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
///
/// `registry` is the tree loaded from `--tree`, if any; `load` replaces it.
pub fn run_repl(
    config: &Config,
    formatter: &Formatter,
    mut registry: Option<Registry>,
) -> Result<()> {
    println!("{}", formatter.info("Kintree REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if registry.is_some() {
            "kintree> "
        } else {
            "kintree (no tree)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                // Parse command
                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut registry, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.warning("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Load(PathBuf),
    Command(Command),
}

/// Parse a REPL command line.
///
/// Arguments are taken as the rest of the line so that names and paths may
/// contain spaces.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((line, ""));

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "load" => Ok(ReplCommand::Load(required_path(rest, "load <path>")?)),
        "save" | "export" => Ok(ReplCommand::Command(Command::Export(ExportArgs {
            output: required_path(rest, "save <path>")?,
        }))),
        "people" | "list" => Ok(ReplCommand::Command(Command::People)),
        "relation" | "rel" => parse_relation_command(rest),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

fn parse_relation_command(rest: &str) -> Result<ReplCommand> {
    if rest.is_empty() {
        return Err(CliError::InvalidInput("Usage: relation <name1>,<name2>".to_string()));
    }

    // "relation A B" is accepted as long as neither name has a space
    let words: Vec<&str> = rest.split_whitespace().collect();
    let args = if !rest.contains(',') && words.len() == 2 {
        RelationArgs {
            first: words[0].to_string(),
            second: Some(words[1].to_string()),
        }
    } else {
        RelationArgs {
            first: rest.to_string(),
            second: None,
        }
    };

    Ok(ReplCommand::Command(Command::Relation(args)))
}

fn required_path(rest: &str, usage: &str) -> Result<PathBuf> {
    if rest.is_empty() {
        return Err(CliError::InvalidInput(format!("Usage: {}", usage)));
    }
    Ok(PathBuf::from(rest))
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: ReplCommand,
    registry: &mut Option<Registry>,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Load(path) => {
            *registry = Some(commands::execute_load(&path, formatter)?);
        }
        ReplCommand::Command(cmd) => {
            let registry = registry.as_ref().ok_or(CliError::NoTree)?;
            debug!(?cmd, "executing repl command");

            match cmd {
                Command::Relation(args) => commands::execute_relation(args, registry, formatter)?,
                Command::People => commands::execute_people(registry, formatter)?,
                Command::Export(args) => commands::execute_export(args, registry, formatter)?,
                Command::Repl => {
                    println!("{}", formatter.info("Already in the REPL"));
                }
            }
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", err)))
}

fn get_history_path() -> Result<PathBuf> {
    let kintree_dir = Config::dir()?;
    std::fs::create_dir_all(&kintree_dir)?;
    Ok(kintree_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  load <path>                    - Read a tree file and replace the current tree");
    println!("  save <path>                    - Save the people, in alphabetical order");
    println!("  relation <name1>,<name2>       - Find the relation name1 has to name2");
    println!("  people                         - List the people in the tree");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
