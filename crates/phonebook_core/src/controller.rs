use shared::domain::{Contact, ContactDraft, ContactId, ContactPatch, SearchField};
use storage::ContactStore;
use tracing::{debug, error, info, warn};

use crate::{
    command::Command,
    error::PromptError,
    messages,
    prompt::{Confirmation, InputMode, Prompter},
    search,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhonebookOptions {
    /// Ask before removing a contact.
    pub confirm_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Owns the in-memory contact list and every decision made about it.
///
/// `dirty` is true iff the list has changed since the last successful load or
/// save. Ids are only ever handed out by [`Phonebook::next_id`].
pub struct Phonebook<S: ContactStore, P: Prompter> {
    store: S,
    prompter: P,
    options: PhonebookOptions,
    contacts: Vec<Contact>,
    dirty: bool,
}

impl<S: ContactStore, P: Prompter> Phonebook<S, P> {
    pub fn new(store: S, prompter: P) -> Self {
        Self::with_options(store, prompter, PhonebookOptions::default())
    }

    pub fn with_options(store: S, prompter: P, options: PhonebookOptions) -> Self {
        Self {
            store,
            prompter,
            options,
            contacts: Vec::new(),
            dirty: false,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Replaces the list with the stored snapshot.
    pub fn load(&mut self) {
        self.contacts = self.store.load();
        self.dirty = false;
        debug!(count = self.contacts.len(), "phonebook loaded");
    }

    /// Persists the whole list. Returns whether the store accepted it; a
    /// failed save leaves the dirty flag alone.
    pub fn save(&mut self) -> Result<bool, PromptError> {
        match self.store.save(&self.contacts) {
            Ok(()) => {
                self.dirty = false;
                info!(count = self.contacts.len(), "phonebook saved");
                self.prompter.show_message(messages::CONTACTS_SAVED)?;
                Ok(true)
            }
            Err(error) => {
                error!(%error, "phonebook save failed");
                self.prompter.show_message(messages::SAVE_FAILED)?;
                Ok(false)
            }
        }
    }

    /// One past the largest id, or `None` once the largest id is `i64::MAX`.
    pub fn next_id(&self) -> Option<ContactId> {
        match self.contacts.iter().map(|contact| contact.id.0).max() {
            Some(max) => max.checked_add(1).map(ContactId),
            None => Some(ContactId(1)),
        }
    }

    /// Appends a contact under a fresh id and returns that id. Returns `None`
    /// without touching the list when no larger id is left.
    pub fn create(&mut self, draft: ContactDraft) -> Option<ContactId> {
        let Some(id) = self.next_id() else {
            warn!("contact ids exhausted; refusing to create");
            return None;
        };
        self.contacts.push(Contact::from_draft(id, draft));
        self.dirty = true;
        debug!(contact_id = %id, "contact created");
        Some(id)
    }

    pub fn create_flow(&mut self) -> Result<(), PromptError> {
        if self.next_id().is_none() {
            return self.prompter.show_message(messages::IDS_EXHAUSTED);
        }
        let fields = self.prompter.contact_fields(InputMode::Create)?;
        match self.create(fields.into()) {
            Some(_) => self.prompter.show_message(messages::CONTACT_CREATED),
            None => self.prompter.show_message(messages::IDS_EXHAUSTED),
        }
    }

    pub fn search_flow(&mut self) -> Result<(), PromptError> {
        let term = self.prompter.search_term()?;
        let found = search::matching(&self.contacts, &term, SearchField::All);
        debug!(count = found.len(), "search finished");
        self.prompter.show_contacts(&found)
    }

    /// Applies `patch` to the first contact with `id`. Marks the list dirty
    /// whenever the contact exists, even if the patch is empty.
    pub fn update(&mut self, id: ContactId, patch: ContactPatch) -> bool {
        let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            return false;
        };
        if patch.is_empty() {
            debug!(contact_id = %id, "edit left every field unchanged");
        }
        contact.apply(patch);
        self.dirty = true;
        debug!(contact_id = %id, "contact updated");
        true
    }

    /// Edits the contact with `id`, asking the prompter for the new values.
    pub fn edit(&mut self, id: ContactId) -> Result<(), PromptError> {
        if self.contacts.is_empty() {
            return Ok(());
        }
        let Some(contact) = self.contacts.iter().find(|contact| contact.id == id) else {
            debug!(contact_id = %id, "edit target missing");
            return self.prompter.show_message(messages::CONTACT_NOT_FOUND);
        };

        self.prompter.show_message(messages::CONTACT_DETAILS)?;
        self.prompter.show_contacts(&[contact])?;

        let fields = self.prompter.contact_fields(InputMode::Edit)?;
        self.update(id, ContactPatch::from_fields(fields));
        self.prompter.show_message(messages::CONTACT_UPDATED)
    }

    pub fn edit_flow(&mut self) -> Result<(), PromptError> {
        if self.contacts.is_empty() {
            return Ok(());
        }
        let id = self.prompter.contact_id()?;
        self.edit(id)
    }

    /// Removes the first contact with `id`.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|contact| contact.id == id)?;
        let removed = self.contacts.remove(index);
        self.dirty = true;
        debug!(contact_id = %id, "contact deleted");
        Some(removed)
    }

    pub fn delete(&mut self, id: ContactId) -> Result<(), PromptError> {
        if self.contacts.is_empty() {
            return Ok(());
        }
        let Some(contact) = self.contacts.iter().find(|contact| contact.id == id) else {
            debug!(contact_id = %id, "delete target missing");
            return self.prompter.show_message(messages::CONTACT_NOT_FOUND);
        };

        if self.options.confirm_delete {
            self.prompter.show_contacts(&[contact])?;
            if !self.prompter.confirm(Confirmation::Delete)? {
                return self.prompter.show_message(messages::DELETE_CANCELLED);
            }
        }

        self.remove(id);
        self.prompter.show_message(messages::CONTACT_DELETED)
    }

    pub fn delete_flow(&mut self) -> Result<(), PromptError> {
        if self.contacts.is_empty() {
            return Ok(());
        }
        let id = self.prompter.contact_id()?;
        self.delete(id)
    }

    fn show_all(&mut self) -> Result<(), PromptError> {
        let all: Vec<&Contact> = self.contacts.iter().collect();
        self.prompter.show_contacts(&all)
    }

    fn quit(&mut self) -> Result<(), PromptError> {
        if self.dirty && self.prompter.confirm(Confirmation::SaveOnExit)? {
            self.save()?;
        }
        self.prompter.show_message(messages::CLOSING)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, PromptError> {
        debug!(command = command.keyword(), "dispatching menu command");
        match command {
            Command::List => self.show_all()?,
            Command::Create => self.create_flow()?,
            Command::Search => self.search_flow()?,
            Command::Edit => {
                self.show_all()?;
                self.edit_flow()?;
            }
            Command::Delete => {
                self.show_all()?;
                self.delete_flow()?;
            }
            Command::Save => {
                self.save()?;
            }
            Command::Quit => {
                self.quit()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Runs the menu loop until the user quits. Only prompter failures end it
    /// early.
    pub fn run(&mut self) -> Result<(), PromptError> {
        loop {
            let token = self.prompter.show_menu()?;
            let Some(command) = Command::parse(&token) else {
                debug!(token = %token.trim(), "unrecognised menu choice");
                self.prompter.show_message(messages::INVALID_CHOICE)?;
                continue;
            };
            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
