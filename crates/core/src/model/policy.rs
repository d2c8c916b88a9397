//! Insurance policy attached to a contact.
//!
//! A [`Policy`] is only ever built through a validating constructor, so any
//! value of this type satisfies every field rule below. Fields are private and
//! there are no mutators.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{check_argument, require_all_non_null};

pub const NUMBER_MESSAGE_CONSTRAINTS: &str =
    "Policy number should only contain numbers, and it should be at least 1 digit long";
pub const INSURER_NAME_MESSAGE_CONSTRAINTS: &str =
    "Insurer names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const POLICY_NAME_MESSAGE_CONSTRAINTS: &str =
    "Policy plans should only contain alphanumeric characters and spaces, and it should not be blank";
pub const COMMISSION_MESSAGE_CONSTRAINTS: &str = "Commission should be a floating point number";

pub const NAME_VALIDATION_REGEX: &str = r"^[A-Za-z0-9][A-Za-z0-9 ]*$";
pub const NUMBER_VALIDATION_REGEX: &str = r"^[0-9]+$";
pub const COMMISSION_VALIDATION_REGEX: &str = r"^[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)$";

static NAME_RE: OnceLock<Option<Regex>> = OnceLock::new();
static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();
static COMMISSION_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn regex_matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, test: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(test))
}

/// Returns true if `test` is a policy number that converts to a 32-bit integer.
#[must_use]
pub fn is_valid_policy_number(test: &str) -> bool {
    regex_matches(&NUMBER_RE, NUMBER_VALIDATION_REGEX, test) && test.parse::<i32>().is_ok()
}

/// Returns true if `test` is a valid insurer or plan name.
#[must_use]
pub fn is_valid_name(test: &str) -> bool {
    regex_matches(&NAME_RE, NAME_VALIDATION_REGEX, test)
}

/// Returns true if `test` is a signed decimal commission that converts to a
/// finite floating point value.
#[must_use]
pub fn is_valid_policy_commission(test: &str) -> bool {
    regex_matches(&COMMISSION_RE, COMMISSION_VALIDATION_REGEX, test)
        && test.parse::<f64>().is_ok_and(f64::is_finite)
}

/// The four validated fields of a policy, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyField {
    Number,
    Name,
    Insurer,
    Commission,
}

impl PolicyField {
    pub const ALL: [PolicyField; 4] = [Self::Number, Self::Name, Self::Insurer, Self::Commission];

    #[must_use]
    pub fn constraint_message(self) -> &'static str {
        match self {
            Self::Number => NUMBER_MESSAGE_CONSTRAINTS,
            Self::Name => POLICY_NAME_MESSAGE_CONSTRAINTS,
            Self::Insurer => INSURER_NAME_MESSAGE_CONSTRAINTS,
            Self::Commission => COMMISSION_MESSAGE_CONSTRAINTS,
        }
    }

    /// Runs this field's validity predicate without building a policy.
    #[must_use]
    pub fn is_valid(self, test: &str) -> bool {
        match self {
            Self::Number => is_valid_policy_number(test),
            Self::Name | Self::Insurer => is_valid_name(test),
            Self::Commission => is_valid_policy_commission(test),
        }
    }
}

impl Display for PolicyField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Insurer => "insurer",
            Self::Commission => "commission",
        })
    }
}

/// Raw, unvalidated policy fields as they appear in a document.
///
/// A missing field is treated the same as a null constructor argument.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PolicyDocument {
    pub insurer: Option<String>,
    pub number: Option<String>,
    pub name: Option<String>,
    pub commission: Option<String>,
}

/// A contact's insurance plan.
///
/// Two policies are equal when both their insurer and their number match; the
/// plan name and commission do not take part. Hashing uses the same fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(try_from = "PolicyDocument", into = "PolicyDocument")]
pub struct Policy {
    insurer: String,
    number: i32,
    name: String,
    commission: f64,
}

impl Policy {
    /// Validates and builds a policy.
    ///
    /// Fields are checked in the order number, name, insurer, commission and
    /// the first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Constraint`] naming the first field that fails its rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use address_book_core::model::policy::Policy;
    ///
    /// let policy = Policy::new("AIA", "123", "Term Life", "12.5")?;
    /// assert_eq!(policy.number(), 123);
    /// # Ok::<(), address_book_core::error::Error>(())
    /// ```
    pub fn new(insurer: &str, number: &str, name: &str, commission: &str) -> Result<Self> {
        check_argument(
            is_valid_policy_number(number),
            Error::constraint(PolicyField::Number),
        )?;
        check_argument(is_valid_name(name), Error::constraint(PolicyField::Name))?;
        check_argument(is_valid_name(insurer), Error::constraint(PolicyField::Insurer))?;
        check_argument(
            is_valid_policy_commission(commission),
            Error::constraint(PolicyField::Commission),
        )?;

        let number = number
            .parse::<i32>()
            .map_err(|_| Error::constraint(PolicyField::Number))?;
        let commission = commission
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::constraint(PolicyField::Commission))?;

        debug!("Constructed policy {number} from insurer `{insurer}`");

        Ok(Self {
            insurer: insurer.to_string(),
            number,
            name: name.to_string(),
            commission,
        })
    }

    /// Like [`Policy::new`], but any argument may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] before any field rule is evaluated if an
    /// argument is `None`, otherwise the same errors as [`Policy::new`].
    pub fn from_nullable(
        insurer: Option<&str>,
        number: Option<&str>,
        name: Option<&str>,
        commission: Option<&str>,
    ) -> Result<Self> {
        let [insurer, number, name, commission] = require_all_non_null([
            ("insurer", insurer),
            ("number", number),
            ("name", name),
            ("commission", commission),
        ])?;

        Self::new(insurer, number, name, commission)
    }

    #[must_use]
    pub fn insurer(&self) -> &str {
        &self.insurer
    }

    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn commission(&self) -> f64 {
        self.commission
    }

    /// Fields that define equality and hashing.
    fn identity(&self) -> (&str, i32) {
        (&self.insurer, self.number)
    }
}

impl PartialEq for Policy {
    fn eq(&self, other: &Self) -> bool {
        let (insurer, number) = self.identity();
        let (other_insurer, other_number) = other.identity();
        insurer == other_insurer && number == other_number
    }
}

impl Eq for Policy {}

impl Hash for Policy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Display for Policy {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Insurer: {}; Policy ID: {}; Policy Name: {}; Commission: {:?}",
            self.insurer, self.number, self.name, self.commission
        )
    }
}

impl TryFrom<PolicyDocument> for Policy {
    type Error = Error;

    fn try_from(document: PolicyDocument) -> Result<Self> {
        Self::from_nullable(
            document.insurer.as_deref(),
            document.number.as_deref(),
            document.name.as_deref(),
            document.commission.as_deref(),
        )
    }
}

impl From<Policy> for PolicyDocument {
    fn from(policy: Policy) -> Self {
        Self {
            insurer: Some(policy.insurer),
            number: Some(policy.number.to_string()),
            name: Some(policy.name),
            commission: Some(policy.commission.to_string()),
        }
    }
}
