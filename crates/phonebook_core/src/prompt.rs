//! The user-facing side of the phonebook: rendering and raw input.

use shared::domain::{Contact, ContactFields, ContactId};

use crate::error::PromptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Name and phone are collected until non-empty.
    Create,
    /// Every field may come back empty, meaning "keep the current value".
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    SaveOnExit,
    Delete,
}

/// Renders output and collects input for the controller.
///
/// Implementations own all validation loops: `contact_id` only returns once
/// an integer was typed, and `contact_fields` in [`InputMode::Create`] only
/// returns non-empty name and phone.
pub trait Prompter {
    fn show_message(&mut self, text: &str) -> Result<(), PromptError>;

    /// Shows the menu and returns whatever token the user typed.
    fn show_menu(&mut self) -> Result<String, PromptError>;

    /// Renders a listing, or a "not found" notice when `contacts` is empty.
    fn show_contacts(&mut self, contacts: &[&Contact]) -> Result<(), PromptError>;

    fn contact_fields(&mut self, mode: InputMode) -> Result<ContactFields, PromptError>;

    fn search_term(&mut self) -> Result<String, PromptError>;

    fn contact_id(&mut self) -> Result<ContactId, PromptError>;

    /// True only for an explicit yes.
    fn confirm(&mut self, question: Confirmation) -> Result<bool, PromptError>;
}
