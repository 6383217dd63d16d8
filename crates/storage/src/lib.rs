use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use shared::{domain::Contact, error::StoreError};
use tracing::{debug, warn};

mod memory;
pub use memory::MemoryStore;

/// Whole-snapshot persistence for the contact list.
///
/// `load` never fails outwardly: anything unreadable comes back as an empty
/// list. `save` replaces the stored list with `contacts` in one step.
pub trait ContactStore {
    fn load(&self) -> Vec<Contact>;
    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError>;
}

/// Contacts kept as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> Vec<Contact> {
        match read_contacts(&self.path) {
            Ok(contacts) => {
                debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
                contacts
            }
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "contacts file unreadable; starting with an empty list"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        write_contacts(&self.path, contacts)?;
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}

/// Strict read: a missing or blank file is an empty list, anything else that
/// does not parse is an error.
pub fn read_contacts(path: &Path) -> Result<Vec<Contact>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(StoreError::io(path, error)),
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|error| StoreError::parse(path, error))
}

pub fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(contacts)?;
    atomic_write(path, &json).map_err(|error| StoreError::io(path, error))
}

/// Writes into a sibling temp file, syncs it, then renames it over `path`, so
/// readers see either the old contents or the new ones.
fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    let result = write_and_sync(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_sync(tmp_path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp_path)?;

    {
        let mut writer = BufWriter::new(&mut file);
        writer.write_all(contents)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "contacts".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
