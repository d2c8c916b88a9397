use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::{Error, Result};
use crate::index::Index;
use crate::model::policy::Policy;

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub policy: Option<Policy>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }
}

impl Display for Contact {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)?;

        if let Some(policy) = &self.policy {
            write!(formatter, " ({policy})")?;
        }

        Ok(())
    }
}

/// The contacts currently on display, in display order, plus the one the
/// user last selected.
#[derive(Debug, Default)]
pub struct ContactList {
    contacts: Vec<Contact>,
    selected: Option<Index>,
}

impl ContactList {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            selected: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: Index) -> Option<&Contact> {
        self.contacts.get(index.zero_based())
    }

    /// Marks the contact at `index` as selected and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContactIndex`] if `index` is past the end of
    /// the list. The previous selection is kept in that case.
    pub fn select(&mut self, index: Index) -> Result<&Contact> {
        let len = self.contacts.len();
        let contact = self
            .contacts
            .get(index.zero_based())
            .ok_or(Error::InvalidContactIndex {
                index: index.one_based(),
                len,
            })?;

        debug!("Selecting contact {index} of {len}");
        self.selected = Some(index);
        Ok(contact)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Contact> {
        self.selected.and_then(|index| self.get(index))
    }
}
