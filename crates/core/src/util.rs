//! Argument checks used by value-object constructors.

use crate::error::{Error, Result};

/// Returns `violation` as an error when `condition` does not hold.
///
/// # Errors
///
/// Returns `violation` if `condition` is false.
pub fn check_argument(condition: bool, violation: Error) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(violation)
    }
}

/// Unwraps every named argument, failing on the first one that is missing.
///
/// # Errors
///
/// Returns [`Error::NullArgument`] naming the first `None` argument.
///
/// # Examples
///
/// ```
/// use address_book_core::util::require_all_non_null;
///
/// let [a, b] = require_all_non_null([("a", Some("x")), ("b", Some("y"))])?;
/// assert_eq!((a, b), ("x", "y"));
/// # Ok::<(), address_book_core::error::Error>(())
/// ```
pub fn require_all_non_null<'a, const N: usize>(
    arguments: [(&'static str, Option<&'a str>); N],
) -> Result<[&'a str; N]> {
    let mut values = [""; N];

    for (slot, (argument, value)) in values.iter_mut().zip(arguments) {
        *slot = value.ok_or(Error::NullArgument { argument })?;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_argument_passes() {
        let result = check_argument(true, Error::UnknownCommand("x".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_argument_returns_violation() {
        let result = check_argument(false, Error::UnknownCommand("x".to_string()));
        assert!(matches!(result, Err(Error::UnknownCommand(word)) if word == "x"));
    }

    #[test]
    fn test_require_all_non_null_reports_first_missing() {
        let result = require_all_non_null([("a", Some("1")), ("b", None), ("c", None)]);
        assert!(matches!(
            result,
            Err(Error::NullArgument { argument: "b" })
        ));
    }

    #[test]
    fn test_require_all_non_null_keeps_order() {
        let values = require_all_non_null([("a", Some("1")), ("b", Some("2"))]).unwrap();
        assert_eq!(values, ["1", "2"]);
    }
}
