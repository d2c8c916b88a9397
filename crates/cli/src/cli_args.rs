//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use address_book_core::model::policy::PolicyField;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the address book CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use address_book_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ab", "check", "commission", "-0.5"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Action {
    /// Parse a command line and run it against a list of contacts.
    ///
    /// # Examples
    /// ```bash
    /// ab run -c "Alex Yeoh" -c "Bernice Yu" select 2
    /// ```
    Run {
        /// A contact to show in the list, in display order.
        ///
        /// Multiple contacts can be provided with repeated `-c` flags.
        #[arg(long = "contact", short = 'c', action = clap::ArgAction::Append)]
        contacts: Vec<String>,

        /// Only parse the command line and print the resulting command.
        #[arg(long, short = 'd', action)]
        dry_run: bool,

        /// The command keyword followed by its arguments.
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        input: Vec<String>,
    },

    /// Validate a policy and print it.
    ///
    /// The fields are read either from flags or from a YAML document.
    Policy {
        #[arg(long, short = 'i', conflicts_with = "file")]
        insurer: Option<String>,

        #[arg(long, short = 'n', conflicts_with = "file", allow_hyphen_values = true)]
        number: Option<String>,

        #[arg(long, short = 'p', conflicts_with = "file")]
        name: Option<String>,

        #[arg(long, short = 'm', conflicts_with = "file", allow_hyphen_values = true)]
        commission: Option<String>,

        /// Path to a YAML document with `insurer`, `number`, `name` and `commission`.
        #[arg(long, short = 'f')]
        file: Option<String>,
    },

    /// Check a single policy field value without building a policy.
    Check {
        field: Field,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Policy field selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Insurer,
    Number,
    Name,
    Commission,
}

impl From<Field> for PolicyField {
    fn from(field: Field) -> Self {
        match field {
            Field::Insurer => PolicyField::Insurer,
            Field::Number => PolicyField::Number,
            Field::Name => PolicyField::Name,
            Field::Commission => PolicyField::Commission,
        }
    }
}
