//! Command parsing for the interactive assistant.
//!
//! A line is split once on the first space into a command token and the
//! remainder; the remainder is then split on every single space. Consecutive
//! spaces therefore produce empty arguments, which the handlers reject through
//! normal field validation.

pub mod handlers;

/// A command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    fn from_token(token: &str) -> Self {
        match token {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "remove-phone" => Self::RemovePhone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// One line of user input, split into a command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: Command,
    pub args: Vec<String>,
}

impl ParsedLine {
    /// Parse a raw input line. Surrounding whitespace (including the line
    /// terminator) is ignored; command tokens are case-sensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (token, rest) = match line.split_once(' ') {
            Some((token, rest)) => (token, Some(rest)),
            None => (line, None),
        };

        let args = rest
            .map(|rest| rest.split(' ').map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            command: Command::from_token(token),
            args,
        }
    }
}
