//! Field rules and the evaluator that interprets them

use once_cell::sync::Lazy;
use regex::Regex;

/// Phone numbers: 10 to 13 digits
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,13}$").expect("phone pattern compiles"));

/// Postal codes: exactly 5 digits
pub static POSTAL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern compiles"));

/// Bank account numbers: digits only
pub static BANK_ACCOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("bank account pattern compiles"));

/// Tax numbers (NPWP): exactly 15 digits
pub static TAX_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{15}$").expect("tax number pattern compiles"));

/// Graduation years: exactly 4 digits
pub static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern compiles"));

/// `local@domain`, where the domain is one or more dot separated labels
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// A single constraint applied to a non-blank value
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Trimmed value must have at least this many characters
    MinLength(usize),
    /// Whole value must match the pattern
    Pattern(&'static Lazy<Regex>),
    /// Value must be one of the listed options
    OneOf(&'static [&'static str]),
    /// Value must look like `local@domain`
    Email,
}

impl RuleKind {
    /// Whether `value` satisfies this constraint
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            RuleKind::MinLength(min) => value.trim().chars().count() >= *min,
            RuleKind::Pattern(pattern) => pattern.is_match(value),
            RuleKind::OneOf(options) => options.iter().any(|option| *option == value),
            RuleKind::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// A constraint together with the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    pub kind: RuleKind,
    pub message: &'static str,
}

/// Every rule declared for one field of a step
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    /// Message for a blank value; `None` leaves the field optional
    pub required: Option<&'static str>,
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            required: None,
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn min_length(self, min: usize, message: &'static str) -> Self {
        self.constraint(RuleKind::MinLength(min), message)
    }

    pub fn pattern(self, pattern: &'static Lazy<Regex>, message: &'static str) -> Self {
        self.constraint(RuleKind::Pattern(pattern), message)
    }

    pub fn one_of(self, options: &'static [&'static str], message: &'static str) -> Self {
        self.constraint(RuleKind::OneOf(options), message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.constraint(RuleKind::Email, message)
    }

    fn constraint(mut self, kind: RuleKind, message: &'static str) -> Self {
        self.constraints.push(Constraint { kind, message });
        self
    }

    #[cfg(test)]
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Evaluate the rule, returning the message of the first violation.
    ///
    /// Reporting the first failure is deliberate: an empty required field
    /// reads "is required" rather than a later length or format message.
    /// A blank optional value skips the remaining constraints.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        if value.trim().is_empty() {
            return self.required;
        }
        self.constraints
            .iter()
            .find(|c| !c.kind.accepts(value))
            .map(|c| c.message)
    }
}
