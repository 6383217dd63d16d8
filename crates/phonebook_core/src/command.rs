//! Menu commands and the token table used to select them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    List,
    Create,
    Search,
    Edit,
    Delete,
    Save,
    Quit,
}

pub struct CommandEntry {
    pub command: Command,
    pub keyword: &'static str,
    pub label: &'static str,
}

impl Command {
    /// Menu order; an entry's 1-based position is its numeric token.
    pub const ALL: [CommandEntry; 7] = [
        CommandEntry {
            command: Command::List,
            keyword: "list",
            label: "Show all contacts",
        },
        CommandEntry {
            command: Command::Create,
            keyword: "create",
            label: "Create new contact",
        },
        CommandEntry {
            command: Command::Search,
            keyword: "search",
            label: "Find contact",
        },
        CommandEntry {
            command: Command::Edit,
            keyword: "edit",
            label: "Edit contact",
        },
        CommandEntry {
            command: Command::Delete,
            keyword: "delete",
            label: "Delete contact",
        },
        CommandEntry {
            command: Command::Save,
            keyword: "save",
            label: "Save changes",
        },
        CommandEntry {
            command: Command::Quit,
            keyword: "quit",
            label: "Exit",
        },
    ];

    /// Accepts the menu number or the keyword, ignoring surrounding
    /// whitespace and case.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Ok(number) = token.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index))
                .map(|entry| entry.command);
        }
        Self::ALL
            .iter()
            .find(|entry| entry.keyword.eq_ignore_ascii_case(token))
            .map(|entry| entry.command)
    }

    pub fn keyword(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|entry| entry.command == self)
            .map_or("unknown", |entry| entry.keyword)
    }
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
