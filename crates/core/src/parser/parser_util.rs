//! Helpers shared by the command argument parsers.

use std::num::NonZeroUsize;

use crate::error::{Error, Result};
use crate::index::Index;

/// Parses `args` as a one-based index.
///
/// Leading and trailing whitespace is ignored. Only plain digits denoting a
/// positive value that fits a 32-bit signed integer are accepted; signs,
/// inner whitespace and zero are rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] if `args` is not a non-zero unsigned integer.
///
/// # Examples
///
/// ```
/// use address_book_core::parser::parser_util::parse_index;
///
/// let index = parse_index(" 3 ")?;
/// assert_eq!(index.zero_based(), 2);
/// assert!(parse_index("0").is_err());
/// # Ok::<(), address_book_core::error::Error>(())
/// ```
pub fn parse_index(args: &str) -> Result<Index> {
    let trimmed = args.trim();

    parse_non_zero_unsigned(trimmed)
        .map(Index::from_one_based)
        .ok_or_else(|| Error::InvalidIndex(trimmed.to_string()))
}

fn parse_non_zero_unsigned(value: &str) -> Option<NonZeroUsize> {
    // `str::parse` would accept a leading plus sign.
    if value.starts_with('+') {
        return None;
    }

    let parsed = value.parse::<i32>().ok()?;
    usize::try_from(parsed).ok().and_then(NonZeroUsize::new)
}
