use std::{collections::HashSet, fmt, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use phonebook_core::search;
use shared::domain::{Contact, ContactId, SearchField};
use storage::read_contacts;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phonebook-tools", about = "Inspect a phonebook contacts file")]
struct Cli {
    #[arg(long, default_value = "phonebook.json")]
    file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every contact, one per line
    List,
    /// Print contacts matching TERM (case-insensitive)
    Search {
        term: String,
        #[arg(long, value_enum, default_value_t = FieldArg::All)]
        field: FieldArg,
    },
    /// Report duplicate ids, empty required fields and an exhausted id range
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldArg {
    Name,
    Phone,
    Comment,
    All,
}

impl From<FieldArg> for SearchField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Name => SearchField::Name,
            FieldArg::Phone => SearchField::Phone,
            FieldArg::Comment => SearchField::Comment,
            FieldArg::All => SearchField::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Problem {
    DuplicateId(ContactId),
    EmptyName(ContactId),
    EmptyPhone(ContactId),
    IdsExhausted(ContactId),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateId(id) => write!(f, "id {id} is used by more than one contact"),
            Problem::EmptyName(id) => write!(f, "contact {id} has an empty name"),
            Problem::EmptyPhone(id) => write!(f, "contact {id} has an empty phone"),
            Problem::IdsExhausted(id) => {
                write!(f, "contact {id} holds the largest possible id; no new contact can be created")
            }
        }
    }
}

fn check(contacts: &[Contact]) -> Vec<Problem> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut problems = Vec::new();

    for contact in contacts {
        if !seen.insert(contact.id) && reported.insert(contact.id) {
            problems.push(Problem::DuplicateId(contact.id));
        }
        if contact.name.trim().is_empty() {
            problems.push(Problem::EmptyName(contact.id));
        }
        if contact.phone.trim().is_empty() {
            problems.push(Problem::EmptyPhone(contact.id));
        }
    }
    if let Some(max) = contacts.iter().map(|contact| contact.id).max() {
        if max.0 == i64::MAX {
            problems.push(Problem::IdsExhausted(max));
        }
    }
    problems
}

fn format_line(contact: &Contact) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        contact.id, contact.name, contact.phone, contact.comment
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let contacts = read_contacts(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))?;
    debug!(path = %cli.file.display(), count = contacts.len(), "contacts read");

    match cli.command {
        Command::List => {
            for contact in &contacts {
                println!("{}", format_line(contact));
            }
        }
        Command::Search { term, field } => {
            for contact in search::matching(&contacts, &term, field.into()) {
                println!("{}", format_line(contact));
            }
        }
        Command::Check => {
            let problems = check(&contacts);
            for problem in &problems {
                println!("{problem}");
            }
            if !problems.is_empty() {
                bail!("{} problem(s) found in '{}'", problems.len(), cli.file.display());
            }
            println!("{} contact(s), no problems found", contacts.len());
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
