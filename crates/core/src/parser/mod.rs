//! Turns raw user input into executable commands.

use log::debug;

use crate::commands::{Command, SelectContactCommand};
use crate::error::{Error, Result};

pub mod parser_util;
pub mod select_contact;

pub use select_contact::SelectContactCommandParser;

/// Parses the arguments that follow a command keyword.
pub trait Parser {
    type Output: Command;

    /// Parses `args` into a command ready for execution.
    ///
    /// # Errors
    ///
    /// Returns an error if `args` does not match the command's expected format.
    fn parse(&self, args: &str) -> Result<Self::Output>;
}

/// Dispatches a full input line to the parser that owns its keyword.
#[derive(Debug, Default)]
pub struct AddressBookParser {
    select: SelectContactCommandParser,
}

impl AddressBookParser {
    /// Splits off the leading keyword and hands the rest of the line to the
    /// matching parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCommand`] for blank input,
    /// [`Error::UnknownCommand`] for an unrecognised keyword, and whatever
    /// the selected parser reports for malformed arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use address_book_core::parser::AddressBookParser;
    ///
    /// let command = AddressBookParser::default().parse_command("select 2")?;
    /// assert_eq!(format!("{command:?}"), "SelectContactCommand { index: Index { zero_based: 1 } }");
    /// # Ok::<(), address_book_core::error::Error>(())
    /// ```
    pub fn parse_command(&self, input: &str) -> Result<Box<dyn Command>> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::EmptyCommand);
        }

        let (command_word, arguments) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));
        debug!("Dispatching `{command_word}` with arguments `{arguments}`");

        match command_word {
            SelectContactCommand::COMMAND_WORD => Ok(Box::new(self.select.parse(arguments)?)),
            _ => Err(Error::UnknownCommand(command_word.to_string())),
        }
    }
}
