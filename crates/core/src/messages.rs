//! User-facing message templates shared by the parsers and commands.

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n{usage}";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_CONTACT_DISPLAYED_INDEX: &str = "The contact index provided is invalid";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_EMPTY_COMMAND: &str = "No command given. Available commands: select";

/// Renders [`MESSAGE_INVALID_COMMAND_FORMAT`] with the given usage text.
#[must_use]
pub fn invalid_command_format(usage: &str) -> String {
    MESSAGE_INVALID_COMMAND_FORMAT.replace("{usage}", usage)
}
