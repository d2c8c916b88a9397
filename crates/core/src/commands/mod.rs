//! Executable commands produced by the parsers.

use std::fmt::{Debug, Display, Formatter};

use crate::error::Result;
use crate::model::ContactList;

pub mod select_contact;

pub use select_contact::SelectContactCommand;

/// Feedback shown to the user after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

impl Display for CommandResult {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.feedback)
    }
}

/// An action parsed from user input, ready to run against the contact list.
pub trait Command: Debug {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be applied to `contacts`.
    fn execute(&self, contacts: &mut ContactList) -> Result<CommandResult>;
}
