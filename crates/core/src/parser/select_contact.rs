use log::warn;

use crate::commands::SelectContactCommand;
use crate::error::{Error, Result};
use crate::parser::parser_util::parse_index;
use crate::parser::Parser;

/// Parses the arguments of the `select` command.
///
/// The usage text reported on malformed input is injected at construction,
/// so the parser never refers to another command's documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectContactCommandParser {
    usage: String,
}

impl SelectContactCommandParser {
    pub fn new(usage: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
        }
    }

    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }
}

impl Default for SelectContactCommandParser {
    fn default() -> Self {
        Self::new(SelectContactCommand::MESSAGE_USAGE)
    }
}

impl Parser for SelectContactCommandParser {
    type Output = SelectContactCommand;

    /// Parses `args` as the index of the contact to select.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCommandFormat`] carrying this parser's usage text
    /// if `args` is not a valid index. The index error is kept as its source.
    fn parse(&self, args: &str) -> Result<SelectContactCommand> {
        match parse_index(args) {
            Ok(index) => Ok(SelectContactCommand::new(index)),
            Err(e) => {
                warn!("Rejecting select arguments `{}`: {}", args.trim(), e);
                Err(Error::invalid_command_format(self.usage.clone(), e))
            }
        }
    }
}
