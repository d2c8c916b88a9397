//! Address Book Core Library
//!
//! This crate provides the input-parsing and domain-validation layer of the
//! address book: it turns raw command strings into executable commands and
//! validates the insurance policies attached to contacts.
//!
//! # Key Features
//!
//! - **Command Parsing**: Map a command keyword and its arguments to a typed command
//! - **Index Handling**: One-based display indexes with strict parsing
//! - **Policy Validation**: An immutable policy value object with per-field rules
//! - **Error Handling**: A single error type naming the exact rule that failed
//!
//! # Examples
//!
//! Parsing and running a command:
//!
//! ```
//! use address_book_core::model::{Contact, ContactList};
//! use address_book_core::parser::AddressBookParser;
//!
//! let mut contacts = ContactList::new(vec![Contact::new("Alex Yeoh")]);
//! let command = AddressBookParser::default().parse_command("select 1")?;
//! let result = command.execute(&mut contacts)?;
//! assert_eq!(result.feedback, "Selected contact: Alex Yeoh");
//! # Ok::<(), address_book_core::error::Error>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod index;
pub mod messages;
pub mod model;
pub mod parser;
pub mod util;
