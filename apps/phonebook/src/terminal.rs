//! Line-oriented terminal front end for the phonebook.

use std::io::{BufRead, Write};

use phonebook_core::{messages, Command, Confirmation, InputMode, PromptError, Prompter};
use shared::domain::{Contact, ContactFields, ContactId};

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and returns the next line without surrounding
    /// whitespace. Bytes that are not valid UTF-8 are replaced rather than
    /// failing the session.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn ask_required(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            let value = self.ask(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "{}", messages::FIELD_REQUIRED)?;
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn show_message(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "\n{text}")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<String, PromptError> {
        writeln!(self.output, "\n{}", messages::MENU_TITLE)?;
        for (index, entry) in Command::ALL.iter().enumerate() {
            writeln!(self.output, "\t{}. {}", index + 1, entry.label)?;
        }
        self.ask(messages::MENU_PROMPT)
    }

    fn show_contacts(&mut self, contacts: &[&Contact]) -> Result<(), PromptError> {
        if contacts.is_empty() {
            writeln!(self.output, "\n{}", messages::CONTACT_NOT_FOUND)?;
            return Ok(());
        }

        writeln!(self.output, "\n{}", messages::CONTACTS_HEADER)?;
        for contact in contacts {
            writeln!(self.output, "{}{}", messages::LABEL_ID, contact.id)?;
            writeln!(self.output, "{}{}", messages::LABEL_NAME, contact.name)?;
            writeln!(self.output, "{}{}", messages::LABEL_PHONE, contact.phone)?;
            writeln!(self.output, "{}{}", messages::LABEL_COMMENT, contact.comment)?;
            writeln!(self.output, "{}", messages::SEPARATOR)?;
        }
        Ok(())
    }

    fn contact_fields(&mut self, mode: InputMode) -> Result<ContactFields, PromptError> {
        match mode {
            InputMode::Create => {
                writeln!(self.output, "\n{}", messages::ENTER_DETAILS)?;
                let name = self.ask_required(messages::LABEL_NAME)?;
                let phone = self.ask_required(messages::LABEL_PHONE)?;
                let comment = self.ask(messages::LABEL_COMMENT)?;
                Ok(ContactFields::new(name, phone, comment))
            }
            InputMode::Edit => {
                writeln!(self.output, "\n{}", messages::ENTER_NEW_DETAILS)?;
                let name = self.ask(messages::LABEL_NAME)?;
                let phone = self.ask(messages::LABEL_PHONE)?;
                let comment = self.ask(messages::LABEL_COMMENT)?;
                Ok(ContactFields::new(name, phone, comment))
            }
        }
    }

    fn search_term(&mut self) -> Result<String, PromptError> {
        writeln!(self.output)?;
        self.ask(messages::ENTER_SEARCH)
    }

    fn contact_id(&mut self) -> Result<ContactId, PromptError> {
        writeln!(self.output)?;
        loop {
            match self.ask(messages::ENTER_ID)?.parse::<i64>() {
                Ok(id) => return Ok(ContactId(id)),
                Err(_) => writeln!(self.output, "{}", messages::INVALID_NUMBER)?,
            }
        }
    }

    fn confirm(&mut self, question: Confirmation) -> Result<bool, PromptError> {
        let prompt = match question {
            Confirmation::SaveOnExit => messages::CONFIRM_SAVE_ON_EXIT,
            Confirmation::Delete => messages::CONFIRM_DELETE,
        };
        writeln!(self.output)?;
        match self.ask(prompt) {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case(messages::AFFIRMATIVE)),
            Err(PromptError::InputClosed) => Ok(false),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
