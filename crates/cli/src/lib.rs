//! Address Book CLI Library
//!
//! This crate provides the command-line front end for the address book core.
//! It parses command lines, validates policies and checks individual policy
//! fields.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`actions`]: One handler per CLI action
//!
//! # Examples
//!
//! ```bash
//! # Parse and run a command against a list of contacts
//! ab run -c "Alex Yeoh" -c "Bernice Yu" select 2
//!
//! # Dry run (only show the parsed command)
//! ab run --dry-run select 2
//!
//! # Validate a policy from flags or from a YAML document
//! ab policy -i AIA -n 123 -p "Term Life" -m 12.5
//! ab policy --file ~/policies/aia.yml
//!
//! # Check a single field
//! ab check commission -0.5
//! ```

pub mod actions;
pub mod cli_args;
