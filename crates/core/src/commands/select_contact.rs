use log::info;

use crate::commands::{Command, CommandResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::ContactList;

/// Selects a contact by its position in the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectContactCommand {
    index: Index,
}

impl SelectContactCommand {
    pub const COMMAND_WORD: &'static str = "select";

    pub const MESSAGE_USAGE: &'static str = "select: Selects the contact identified by the \
        index number used in the displayed contact list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: select 1";

    #[must_use]
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(&self) -> Index {
        self.index
    }
}

impl Command for SelectContactCommand {
    fn execute(&self, contacts: &mut ContactList) -> Result<CommandResult> {
        let contact = contacts.select(self.index)?;
        info!("Selected contact at index {}", self.index);
        Ok(CommandResult::new(format!("Selected contact: {}", contact.name)))
    }
}
