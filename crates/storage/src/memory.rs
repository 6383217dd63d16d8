use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use shared::{domain::Contact, error::StoreError};

use crate::ContactStore;

/// Keeps the snapshot in memory. Saves can be switched to fail so callers can
/// exercise their error path without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Mutex<Vec<Contact>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            ..Self::default()
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Contact>> {
        self.contacts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactStore for MemoryStore {
    fn load(&self) -> Vec<Contact> {
        self.snapshot()
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("memory store is read-only".into()));
        }
        *self.lock() = contacts.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
