//! Address-book core: the contact list, its mutations, and the menu loop that
//! drives them through a [`Prompter`].

pub mod command;
mod controller;
pub mod error;
pub mod messages;
pub mod prompt;
pub mod search;

pub use command::Command;
pub use controller::{Phonebook, PhonebookOptions};
pub use error::PromptError;
pub use prompt::{Confirmation, InputMode, Prompter};
