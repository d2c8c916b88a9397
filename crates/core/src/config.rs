//! Path utilities for address-book input files.

/// Expands shell variables like `~` in a user supplied path.
///
/// # Examples
///
/// ```
/// use address_book_core::config::expand_path;
///
/// let expanded = expand_path("~/policies/aia.yml");
/// assert!(!expanded.starts_with('~'));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
