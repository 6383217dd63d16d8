use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use phonebook_core::{Phonebook, PhonebookOptions, PromptError};
use storage::JsonFileStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod settings;
mod terminal;

use settings::load_settings;
use terminal::TerminalPrompter;

#[derive(Parser, Debug)]
#[command(name = "phonebook", about = "Console address book kept in a JSON file")]
struct Args {
    /// Contacts file to open (overrides `data_file` from settings)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
    /// Settings file; defaults to ./phonebook.toml when present
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ask before deleting a contact
    #[arg(long)]
    confirm_delete: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings =
        load_settings(args.config.as_deref())?.with_overrides(args.file, args.confirm_delete);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(data_file = %settings.data_file.display(), "opening phonebook");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut book = Phonebook::with_options(
        JsonFileStore::new(&settings.data_file),
        TerminalPrompter::new(stdin.lock(), stdout.lock()),
        PhonebookOptions {
            confirm_delete: settings.confirm_delete,
        },
    );
    book.load();

    match book.run() {
        Ok(()) => Ok(()),
        Err(PromptError::InputClosed) => {
            warn!(
                unsaved_changes = book.is_dirty(),
                "input closed; leaving phonebook"
            );
            Ok(())
        }
        Err(error) => Err(error).context("phonebook session failed"),
    }
}
