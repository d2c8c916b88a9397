//! Position of an item in a displayed list.

use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// A position in a displayed list.
///
/// Users see one-based positions while storage is zero-based, so the index
/// stores a single offset and converts on the way in and out. It can never
/// represent a position before the first element, and its one-based form
/// always fits a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Returns `None` for `usize::MAX`, which has no one-based form.
    #[must_use]
    pub fn from_zero_based(zero_based: usize) -> Option<Self> {
        zero_based
            .checked_add(1)
            .and_then(NonZeroUsize::new)
            .map(Self::from_one_based)
    }

    #[must_use]
    pub fn from_one_based(one_based: NonZeroUsize) -> Self {
        Self {
            zero_based: one_based.get() - 1,
        }
    }

    #[must_use]
    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    #[must_use]
    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl Display for Index {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.one_based())
    }
}
