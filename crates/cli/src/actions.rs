//! Handlers for each CLI action.
//!
//! Every handler returns the text to print instead of printing it, so the
//! binary stays a thin wrapper and the handlers can be tested directly.

use address_book_core::config::expand_path;
use address_book_core::error::{Error, Result};
use address_book_core::file_handling::read_policy_file;
use address_book_core::model::policy::PolicyField;
use address_book_core::model::{Contact, ContactList, Policy};
use address_book_core::parser::AddressBookParser;
use itertools::Itertools;
use log::{debug, info};

/// Parses `input` as a command line and runs it against `contacts`.
///
/// With `dry_run`, the parsed command is described but never executed.
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the command fails.
pub fn run_command_line(contacts: &[String], dry_run: bool, input: &[String]) -> Result<String> {
    let line = input.iter().join(" ");
    debug!("Command line: `{line}`");

    let command = AddressBookParser::default().parse_command(&line)?;

    if dry_run {
        return Ok(format!("Parsed command: {command:?}"));
    }

    let mut contact_list = ContactList::new(
        contacts
            .iter()
            .map(|name| Contact::new(name.as_str()))
            .collect(),
    );
    info!("Running against {} contact(s)", contact_list.len());

    Ok(command.execute(&mut contact_list)?.feedback)
}

/// Builds a policy from a YAML document or from individual field values.
///
/// # Errors
///
/// Returns an error if the document cannot be read, a field is missing, or a
/// field breaks its constraint.
pub fn describe_policy(
    file: Option<&str>,
    insurer: Option<&str>,
    number: Option<&str>,
    name: Option<&str>,
    commission: Option<&str>,
) -> Result<String> {
    let policy = match file {
        Some(path) => read_policy_file(&expand_path(path))?,
        None => Policy::from_nullable(insurer, number, name, commission)?,
    };

    Ok(policy.to_string())
}

/// Checks one field value against its rule.
///
/// # Errors
///
/// Returns the field's constraint violation if `value` is not valid.
pub fn check_field(field: PolicyField, value: &str) -> Result<String> {
    if field.is_valid(value) {
        Ok(format!("Valid {field}: `{value}`"))
    } else {
        Err(Error::constraint(field))
    }
}
