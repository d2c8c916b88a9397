use thiserror::Error;

use crate::model::policy::PolicyField;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The arguments of a known command could not be interpreted. The
    /// underlying failure is kept as the source but never rendered.
    #[error("{}", crate::messages::invalid_command_format(.usage))]
    InvalidCommandFormat {
        usage: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{}", crate::messages::MESSAGE_INVALID_INDEX)]
    InvalidIndex(String),

    #[error("{}", crate::messages::MESSAGE_EMPTY_COMMAND)]
    EmptyCommand,

    #[error("{}: `{}`", crate::messages::MESSAGE_UNKNOWN_COMMAND, .0)]
    UnknownCommand(String),

    #[error("{}", .message)]
    Constraint {
        field: PolicyField,
        message: &'static str,
    },

    #[error("Required argument `{}` was not supplied", .argument)]
    NullArgument { argument: &'static str },

    #[error("{} (got {}, list has {})", crate::messages::MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX, .index, .len)]
    InvalidContactIndex { index: usize, len: usize },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },
}

impl Error {
    pub fn invalid_command_format(usage: impl Into<String>, source: Error) -> Self {
        Self::InvalidCommandFormat {
            usage: usage.into(),
            source: Box::new(source),
        }
    }

    pub fn constraint(field: PolicyField) -> Self {
        Self::Constraint {
            field,
            message: field.constraint_message(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_command_format_hides_cause() {
        let cause = Error::InvalidIndex("abc".to_string());
        let error = Error::invalid_command_format("select: usage", cause);

        let message = error.to_string();
        assert_eq!(message, "Invalid command format! \nselect: usage");
        assert!(!message.contains(crate::messages::MESSAGE_INVALID_INDEX));

        let source = error.source().expect("cause should be chained");
        assert_eq!(source.to_string(), crate::messages::MESSAGE_INVALID_INDEX);
    }

    #[test]
    fn test_constraint_uses_field_message() {
        let error = Error::constraint(PolicyField::Commission);
        assert_eq!(
            error.to_string(),
            PolicyField::Commission.constraint_message()
        );
    }

    #[test]
    fn test_null_argument_names_argument() {
        let error = Error::NullArgument { argument: "insurer" };
        assert!(error.to_string().contains("`insurer`"));
    }
}
